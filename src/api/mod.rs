//! Backend REST surface.
//!
//! [`EventApi`] is the seam between the controllers and the network: the
//! production implementation is [`client::HttpApi`], tests plug in fakes.

pub mod client;
pub mod wire;

use crate::models::event::CreatedEvent;
use crate::models::{Attendee, Event};
use async_trait::async_trait;
use thiserror::Error;
pub use client::HttpApi;
pub use wire::{CreateEventRequest, RegisterRequest};

#[derive(Error, Debug)]
pub enum ApiError {
    /// Non-2xx status. `message` is the `error` field of the body, if any.
    #[error("{}", .message.as_deref().unwrap_or("Request rejected by server"))]
    Rejected { status: u16, message: Option<String> },

    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid response from server: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// Text shown to the user: the server message verbatim when there is
    /// one, `fallback` for a bare rejection, the error itself otherwise.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Rejected {
                message: Some(m), ..
            } if !m.trim().is_empty() => m.clone(),
            ApiError::Rejected { .. } => fallback.to_string(),
            other => other.to_string(),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[async_trait]
pub trait EventApi: Send + Sync {
    /// `POST /users/login`. Returns the raw response body on success.
    async fn login(&self, email: &str) -> ApiResult<String>;

    /// `POST /events/create`
    async fn create_event(&self, req: &CreateEventRequest) -> ApiResult<CreatedEvent>;

    /// `POST /events/register`
    async fn register(&self, req: &RegisterRequest) -> ApiResult<()>;

    /// `GET /events/hosted/{userId}`
    async fn hosted_events(&self, user_id: i64) -> ApiResult<Vec<Event>>;

    /// `GET /events/attending/{userId}`
    async fn attending_events(&self, user_id: i64) -> ApiResult<Vec<Event>>;

    /// `DELETE /events/{eventId}`
    async fn delete_event(&self, event_id: i64) -> ApiResult<()>;

    /// `GET /events/{eventId}/attendees`
    async fn attendees(&self, event_id: i64) -> ApiResult<Vec<Attendee>>;
}
