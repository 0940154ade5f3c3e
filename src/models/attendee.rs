use serde::Deserialize;

/// A registration record for one event (`GET /events/{id}/attendees`).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attendee {
    #[serde(default)]
    pub name: Option<String>,
    pub email: String,
    #[serde(default)]
    pub registered_at: Option<String>,
}

impl Attendee {
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(n) if !n.trim().is_empty() => n,
            _ => "Anonymous",
        }
    }
}
