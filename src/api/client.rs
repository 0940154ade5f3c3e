//! reqwest-backed implementation of [`EventApi`].

use super::wire::{ErrorBody, LoginRequest};
use super::{ApiError, ApiResult, CreateEventRequest, EventApi, RegisterRequest};
use crate::models::event::CreatedEvent;
use crate::models::{Attendee, Event};
use async_trait::async_trait;
use log::{debug, error, warn};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";

pub struct HttpApi {
    client: Client,
    base_url: String,
}

impl HttpApi {
    /// `timeout: None` lets requests wait indefinitely.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> ApiResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send a request and return the body of a 2xx response.
    /// Any other status becomes [`ApiError::Rejected`] carrying the body's
    /// `error` field when it has one.
    async fn execute(&self, request: RequestBuilder, what: &str) -> ApiResult<String> {
        debug!("{} -> sending", what);

        let response = request
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                error!("{} failed: {}", what, e);
                ApiError::from(e)
            })?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.error);
            warn!("{} rejected with status {}: {:?}", what, status, message);
            return Err(ApiError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        debug!("{} <- {} ({} bytes)", what, status, body.len());
        Ok(body)
    }

    async fn fetch<T: DeserializeOwned>(&self, request: RequestBuilder, what: &str) -> ApiResult<T> {
        let body = self.execute(request, what).await?;
        serde_json::from_str(&body).map_err(|e| {
            error!("{}: failed to parse response: {}", what, e);
            ApiError::from(e)
        })
    }
}

#[async_trait]
impl EventApi for HttpApi {
    async fn login(&self, email: &str) -> ApiResult<String> {
        let req = self
            .client
            .post(self.url("/users/login"))
            .json(&LoginRequest { email });
        self.execute(req, "POST /users/login").await
    }

    async fn create_event(&self, req: &CreateEventRequest) -> ApiResult<CreatedEvent> {
        let request = self.client.post(self.url("/events/create")).json(req);
        self.fetch(request, "POST /events/create").await
    }

    async fn register(&self, req: &RegisterRequest) -> ApiResult<()> {
        let request = self.client.post(self.url("/events/register")).json(req);
        self.execute(request, "POST /events/register").await?;
        Ok(())
    }

    async fn hosted_events(&self, user_id: i64) -> ApiResult<Vec<Event>> {
        let path = format!("/events/hosted/{}", user_id);
        let request = self.client.get(self.url(&path));
        self.fetch(request, &format!("GET {}", path)).await
    }

    async fn attending_events(&self, user_id: i64) -> ApiResult<Vec<Event>> {
        let path = format!("/events/attending/{}", user_id);
        let request = self.client.get(self.url(&path));
        self.fetch(request, &format!("GET {}", path)).await
    }

    async fn delete_event(&self, event_id: i64) -> ApiResult<()> {
        let path = format!("/events/{}", event_id);
        let request = self.client.delete(self.url(&path));
        self.execute(request, &format!("DELETE {}", path)).await?;
        Ok(())
    }

    async fn attendees(&self, event_id: i64) -> ApiResult<Vec<Attendee>> {
        let path = format!("/events/{}/attendees", event_id);
        let request = self.client.get(self.url(&path));
        self.fetch(request, &format!("GET {}", path)).await
    }
}
