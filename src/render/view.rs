//! View-models produced by the controllers.
//!
//! Everything here holds plain, unescaped text. Adapters (`html`, `text`)
//! decide how it reaches the screen.

use crate::models::{Attendee, Event, SessionIdentity, Venue};
use crate::utils::date::format_timestamp;
use std::time::Duration;

pub const LOADING: &str = "Loading...";
pub const LIST_FAILED: &str = "Error loading events";
pub const NO_ATTENDEES: &str = "No attendees registered yet.";
pub const ATTENDEES_FAILED: &str = "Error loading attendees";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Hosted,
    Attending,
}

impl ListKind {
    pub fn heading(&self) -> &'static str {
        match self {
            ListKind::Hosted => "Events I'm Hosting",
            ListKind::Attending => "Events I'm Attending",
        }
    }

    pub fn empty_message(&self) -> &'static str {
        match self {
            ListKind::Hosted => "You haven't created any events yet.",
            ListKind::Attending => "You haven't registered for any events yet.",
        }
    }

    /// Element id of the list container in the dashboard markup.
    pub fn container_id(&self) -> &'static str {
        match self {
            ListKind::Hosted => "hostedEventsList",
            ListKind::Attending => "attendingEventsList",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EventCard {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub code: String,
    pub when: Option<String>,
    pub venue: Venue,
    pub created: Option<String>,
    /// Hosted cards carry the delete / view-attendees actions.
    pub manageable: bool,
}

impl EventCard {
    pub fn from_event(ev: &Event, kind: ListKind) -> Self {
        Self {
            id: ev.id,
            title: ev.title.clone(),
            description: ev.description().to_string(),
            code: ev.event_code.clone(),
            when: ev.event_date_time.as_deref().map(format_timestamp),
            venue: ev.venue(),
            created: ev.created_at.as_deref().map(format_timestamp),
            manageable: kind == ListKind::Hosted,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ListBody {
    Loading,
    Empty,
    Failed,
    Cards(Vec<EventCard>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListView {
    pub kind: ListKind,
    pub body: ListBody,
}

impl ListView {
    pub fn loading(kind: ListKind) -> Self {
        Self {
            kind,
            body: ListBody::Loading,
        }
    }

    pub fn failed(kind: ListKind) -> Self {
        Self {
            kind,
            body: ListBody::Failed,
        }
    }

    pub fn from_events(kind: ListKind, events: &[Event]) -> Self {
        let body = if events.is_empty() {
            ListBody::Empty
        } else {
            ListBody::Cards(
                events
                    .iter()
                    .map(|ev| EventCard::from_event(ev, kind))
                    .collect(),
            )
        };
        Self { kind, body }
    }

    /// Placeholder text for the non-card states.
    pub fn placeholder(&self) -> Option<&'static str> {
        match self.body {
            ListBody::Loading => Some(LOADING),
            ListBody::Empty => Some(self.kind.empty_message()),
            ListBody::Failed => Some(LIST_FAILED),
            ListBody::Cards(_) => None,
        }
    }

    pub fn cards(&self) -> &[EventCard] {
        match &self.body {
            ListBody::Cards(cards) => cards,
            _ => &[],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Banner {
    pub kind: BannerKind,
    pub text: String,
    /// Successes disappear after this delay; errors stay until the next action.
    pub auto_hide: Option<Duration>,
}

impl Banner {
    pub fn success(text: impl Into<String>, auto_hide: Duration) -> Self {
        Self {
            kind: BannerKind::Success,
            text: text.into(),
            auto_hide: Some(auto_hide),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: BannerKind::Error,
            text: text.into(),
            auto_hide: None,
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == BannerKind::Error
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserHeader {
    pub email: String,
    pub name: Option<String>,
}

impl From<&SessionIdentity> for UserHeader {
    fn from(identity: &SessionIdentity) -> Self {
        Self {
            email: identity.email.clone(),
            name: identity.name.clone().filter(|n| !n.trim().is_empty()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendeeRow {
    pub name: String,
    pub email: String,
    pub registered: Option<String>,
}

impl From<&Attendee> for AttendeeRow {
    fn from(a: &Attendee) -> Self {
        Self {
            name: a.display_name().to_string(),
            email: a.email.clone(),
            registered: a.registered_at.as_deref().map(format_timestamp),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ModalBody {
    Loading,
    Empty,
    Failed,
    Rows(Vec<AttendeeRow>),
}

/// How the user tried to close the modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dismiss {
    CloseButton,
    Click { inside: bool },
}

#[derive(Debug, Clone, PartialEq)]
pub struct AttendeesModal {
    pub event_id: i64,
    pub open: bool,
    pub body: ModalBody,
}

impl AttendeesModal {
    pub fn opening(event_id: i64) -> Self {
        Self {
            event_id,
            open: true,
            body: ModalBody::Loading,
        }
    }

    pub fn show(&mut self, attendees: &[Attendee]) {
        self.body = if attendees.is_empty() {
            ModalBody::Empty
        } else {
            ModalBody::Rows(attendees.iter().map(AttendeeRow::from).collect())
        };
    }

    pub fn fail(&mut self) {
        self.body = ModalBody::Failed;
    }

    /// Apply a dismissal attempt; returns whether the modal closed.
    /// Clicks inside the modal's bounds leave it open.
    pub fn dismiss(&mut self, how: Dismiss) -> bool {
        match how {
            Dismiss::CloseButton | Dismiss::Click { inside: false } => self.open = false,
            Dismiss::Click { inside: true } => {}
        }
        !self.open
    }

    pub fn placeholder(&self) -> Option<&'static str> {
        match self.body {
            ModalBody::Loading => Some(LOADING),
            ModalBody::Empty => Some(NO_ATTENDEES),
            ModalBody::Failed => Some(ATTENDEES_FAILED),
            ModalBody::Rows(_) => None,
        }
    }
}
