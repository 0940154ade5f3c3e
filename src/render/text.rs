//! Terminal rendering of the dashboard view-models.

use super::view::{AttendeesModal, EventCard, ListView, ModalBody, UserHeader};
use crate::utils::table::{Column, Table};
use ansi_term::{Colour, Style};

const WRAP_WIDTH: usize = 72;

pub fn header(h: &UserHeader) -> String {
    match &h.name {
        Some(name) => format!("👤 {} <{}>", Style::new().bold().paint(name.as_str()), h.email),
        None => format!("👤 {}", Style::new().bold().paint(h.email.as_str())),
    }
}

pub fn card(c: &EventCard) -> String {
    let mut out = format!(
        "{} {}  {}\n",
        Colour::Fixed(8).paint(format!("#{}", c.id)),
        Style::new().bold().paint(c.title.as_str()),
        Colour::Cyan.bold().paint(c.code.as_str())
    );

    if !c.description.trim().is_empty() {
        for line in textwrap::wrap(&c.description, WRAP_WIDTH - 4) {
            out.push_str(&format!("    {}\n", line));
        }
    }

    let venue = if c.venue.is_online() {
        format!("🌐 {}", c.venue.label())
    } else {
        format!("📍 {}", c.venue.label())
    };
    match &c.when {
        Some(when) => out.push_str(&format!("    📅 {}   {}\n", when, venue)),
        None => out.push_str(&format!("    {}\n", venue)),
    }

    if let Some(created) = &c.created {
        out.push_str(&format!(
            "    {}\n",
            Colour::Fixed(8).paint(format!("Created: {}", created))
        ));
    }
    out
}

pub fn list(view: &ListView) -> String {
    let mut out = format!(
        "{}\n",
        Colour::Blue.bold().paint(format!("== {} ==", view.kind.heading()))
    );
    match view.placeholder() {
        Some(text) => out.push_str(&format!("{}\n", Colour::Fixed(8).paint(text))),
        None => {
            let cards: Vec<String> = view.cards().iter().map(card).collect();
            out.push_str(&cards.join("\n"));
        }
    }
    out
}

pub fn attendees_modal(m: &AttendeesModal) -> String {
    let mut out = format!(
        "{}\n",
        Colour::Blue
            .bold()
            .paint(format!("== Attendees of event #{} ==", m.event_id))
    );

    match &m.body {
        ModalBody::Rows(rows) => {
            let mut table = Table::new(vec![
                Column::new("Name", 30),
                Column::new("Email", 40),
                Column::new("Registered", 16),
            ]);
            for r in rows {
                table.add_row(vec![
                    r.name.clone(),
                    r.email.clone(),
                    r.registered.clone().unwrap_or_else(|| "--".into()),
                ]);
            }
            out.push_str(&table.render());
            out.push_str(&format!("{} attendee(s)\n", rows.len()));
        }
        _ => {
            if let Some(text) = m.placeholder() {
                out.push_str(&format!("{}\n", Colour::Fixed(8).paint(text)));
            }
        }
    }
    out
}
