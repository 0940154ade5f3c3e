use serde::Serialize;

/// Where an event takes place.
///
/// The wire format carries `isOnline` plus an optional `location`; a location
/// only counts for in-person events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Venue {
    Online,
    InPerson(String),
    /// In-person event whose location is missing or blank.
    Unspecified,
}

impl Venue {
    pub fn from_parts(is_online: bool, location: Option<&str>) -> Self {
        if is_online {
            return Venue::Online;
        }
        match location.map(str::trim) {
            Some(l) if !l.is_empty() => Venue::InPerson(l.to_string()),
            _ => Venue::Unspecified,
        }
    }

    pub fn is_online(&self) -> bool {
        matches!(self, Venue::Online)
    }

    /// Location to send to the backend: never for online events.
    pub fn location(&self) -> Option<&str> {
        match self {
            Venue::InPerson(l) => Some(l),
            _ => None,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Venue::Online => "Online",
            Venue::InPerson(l) => l,
            Venue::Unspecified => "Location TBA",
        }
    }
}
