use super::location::Venue;
use serde::Deserialize;

/// An event as returned by the hosted/attending listings.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: i64,
    pub event_code: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub event_date_time: Option<String>, // ISO local date-time, no zone
    #[serde(default, alias = "online")]
    pub is_online: bool,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Event {
    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    pub fn venue(&self) -> Venue {
        Venue::from_parts(self.is_online, self.location.as_deref())
    }
}

/// The part of the create response the client uses.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedEvent {
    pub event_code: String,
}
