//! HTML fragments for the web dashboard.
//!
//! Every value taken from a view-model goes through [`escape_html`] before it
//! is interpolated; none of the helpers below emit raw user text.

use super::view::{
    AttendeesModal, Banner, BannerKind, EventCard, ListBody, ListView, LOADING, ModalBody,
    UserHeader,
};
use crate::models::Venue;

/// Escape text for use in element content and quoted attribute values.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

pub fn banner(b: &Banner) -> String {
    match (b.kind, b.auto_hide) {
        (BannerKind::Success, Some(ttl)) => format!(
            "<div class=\"success-message\" data-auto-hide-ms=\"{}\">{}</div>",
            ttl.as_millis(),
            escape_html(&b.text)
        ),
        (BannerKind::Success, None) => format!(
            "<div class=\"success-message\">{}</div>",
            escape_html(&b.text)
        ),
        (BannerKind::Error, _) => format!(
            "<div class=\"error-message\">{}</div>",
            escape_html(&b.text)
        ),
    }
}

pub fn header(h: &UserHeader) -> String {
    let mut out = String::from("<div class=\"user-info\">");
    if let Some(name) = &h.name {
        out.push_str(&format!(
            "<span id=\"userName\">{}</span>",
            escape_html(name)
        ));
    }
    out.push_str(&format!(
        "<span id=\"userEmail\">{}</span></div>",
        escape_html(&h.email)
    ));
    out
}

pub fn card(c: &EventCard) -> String {
    let mut out = String::from("<div class=\"event-item\">\n");
    out.push_str(&format!("    <h3>{}</h3>\n", escape_html(&c.title)));
    out.push_str(&format!("    <p>{}</p>\n", escape_html(&c.description)));
    out.push_str(&format!(
        "    <span class=\"event-code\">{}</span>\n",
        escape_html(&c.code)
    ));

    if let Some(when) = &c.when {
        out.push_str(&format!(
            "    <p class=\"event-datetime\">📅 {}</p>\n",
            escape_html(when)
        ));
    }

    let venue = match &c.venue {
        Venue::Online => "🌐 Online".to_string(),
        other => format!("📍 {}", escape_html(other.label())),
    };
    out.push_str(&format!("    <p class=\"event-location\">{}</p>\n", venue));

    if let Some(created) = &c.created {
        out.push_str(&format!(
            "    <p class=\"event-date\">Created: {}</p>\n",
            escape_html(created)
        ));
    }

    if c.manageable {
        out.push_str(&format!(
            "    <div class=\"event-actions\">\n        \
             <button class=\"btn-attendees\" data-event-id=\"{id}\">View Attendees</button>\n        \
             <button class=\"btn-delete\" data-event-id=\"{id}\">Delete</button>\n    \
             </div>\n",
            id = c.id
        ));
    }

    out.push_str("</div>");
    out
}

/// The full list container, including its placeholder or cards.
pub fn list(view: &ListView) -> String {
    let inner = match view.placeholder() {
        Some(text) => {
            let class = if matches!(view.body, ListBody::Loading) {
                "loading"
            } else {
                "empty-state"
            };
            format!("<p class=\"{}\">{}</p>", class, escape_html(text))
        }
        None => view
            .cards()
            .iter()
            .map(card)
            .collect::<Vec<_>>()
            .join("\n"),
    };

    format!(
        "<div id=\"{}\" class=\"events-list\">\n{}\n</div>",
        view.kind.container_id(),
        inner
    )
}

pub fn attendees_modal(m: &AttendeesModal) -> String {
    let display = if m.open { "block" } else { "none" };
    let body = match &m.body {
        ModalBody::Rows(rows) => rows
            .iter()
            .map(|r| {
                let registered = r
                    .registered
                    .as_deref()
                    .map(|d| format!("<span class=\"attendee-date\">{}</span>", escape_html(d)))
                    .unwrap_or_default();
                format!(
                    "<div class=\"attendee-item\"><strong>{}</strong> <span class=\"attendee-email\">{}</span>{}</div>",
                    escape_html(&r.name),
                    escape_html(&r.email),
                    registered
                )
            })
            .collect::<Vec<_>>()
            .join("\n"),
        ModalBody::Loading => format!("<p class=\"loading\">{}</p>", escape_html(LOADING)),
        _ => format!(
            "<p class=\"empty-state\">{}</p>",
            escape_html(m.placeholder().unwrap_or_default())
        ),
    };

    format!(
        "<div id=\"attendeesModal\" class=\"attendees-modal\" data-event-id=\"{}\" style=\"display: {}\">\n\
         <div class=\"modal-content\">\n\
         <span class=\"close\" data-dismiss=\"modal\">&times;</span>\n\
         <h2>Attendees</h2>\n\
         <div id=\"attendeesList\">\n{}\n</div>\n\
         </div>\n\
         </div>",
        m.event_id, display, body
    )
}
