//! Local, pre-network checks. Kept to required fields only.

use crate::api::CreateEventRequest;
use crate::errors::{AppError, AppResult};
use crate::models::Venue;
use crate::utils::date;

pub const EMAIL_REQUIRED: &str = "Please enter your email address";
pub const TITLE_REQUIRED: &str = "Please enter an event title";
pub const LOCATION_REQUIRED: &str = "Location is required for in-person events";
pub const CODE_REQUIRED: &str = "Please enter an event code";

/// Raw create-event form input, as typed by the user.
#[derive(Debug, Clone, Default)]
pub struct EventForm {
    pub title: String,
    pub description: String,
    pub date_time: Option<String>,
    pub is_online: bool,
    pub location: Option<String>,
}

pub fn login_email(raw: &str) -> AppResult<&str> {
    let email = raw.trim();
    if email.is_empty() {
        return Err(AppError::Validation(EMAIL_REQUIRED.into()));
    }
    Ok(email)
}

/// Trim and uppercase: codes are case-insensitive for the user.
pub fn event_code(raw: &str) -> AppResult<String> {
    let code = raw.trim().to_uppercase();
    if code.is_empty() {
        return Err(AppError::Validation(CODE_REQUIRED.into()));
    }
    Ok(code)
}

/// Build the create request for `user_id`, or the first validation failure.
pub fn event_request(form: &EventForm, user_id: i64) -> AppResult<CreateEventRequest> {
    let title = form.title.trim();
    if title.is_empty() {
        return Err(AppError::Validation(TITLE_REQUIRED.into()));
    }

    let venue = Venue::from_parts(form.is_online, form.location.as_deref());
    if venue == Venue::Unspecified {
        return Err(AppError::Validation(LOCATION_REQUIRED.into()));
    }

    let event_date_time = match form.date_time.as_deref().map(str::trim) {
        Some(raw) if !raw.is_empty() => {
            let dt = date::parse_input(raw).ok_or_else(|| AppError::InvalidDateTime(raw.into()))?;
            Some(date::to_wire(&dt))
        }
        _ => None,
    };

    Ok(CreateEventRequest {
        user_id,
        title: title.to_string(),
        description: form.description.trim().to_string(),
        event_date_time,
        is_online: venue.is_online(),
        location: venue.location().map(str::to_string),
    })
}
