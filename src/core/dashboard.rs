//! The dashboard: create/register forms, the two event lists, deletion and
//! the attendee roster.
//!
//! A controller only exists for an authenticated user: [`DashboardController::init`]
//! yields [`Landing::RedirectToLogin`] when there is no session identity.

use crate::api::{EventApi, RegisterRequest};
use crate::core::validate::{self, EventForm};
use crate::errors::AppResult;
use crate::models::SessionIdentity;
use crate::render::view::{AttendeesModal, Banner, ListKind, ListView, UserHeader};
use crate::session::SessionStore;
use log::{debug, info};
use std::time::Duration;

pub const DELETE_PROMPT: &str =
    "Are you sure you want to delete this event? This action cannot be undone.";

const CREATE_FAILED: &str = "Failed to create event";
const REGISTER_FAILED: &str = "Failed to register for event";
const DELETE_FAILED: &str = "Failed to delete event";
const REGISTERED: &str = "Successfully Registered!";

/// Interactive yes/no prompt used before destructive actions.
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

pub enum Landing<C> {
    RedirectToLogin,
    Ready(C),
}

/// Result of a create or register submission.
#[derive(Debug, Clone, PartialEq)]
pub struct FormOutcome {
    pub banner: Banner,
    /// Clear the form fields (successes only).
    pub reset_form: bool,
    /// The list re-fetched after a success.
    pub reloaded: Option<ListView>,
}

impl FormOutcome {
    fn rejected(message: impl Into<String>) -> Self {
        Self {
            banner: Banner::error(message),
            reset_form: false,
            reloaded: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DeleteOutcome {
    /// The user declined the prompt; nothing was sent.
    Cancelled,
    Deleted(ListView),
    /// Blocking alert text.
    Failed(String),
}

pub struct DashboardController<'a, A: EventApi + ?Sized> {
    api: &'a A,
    user: SessionIdentity,
    banner_ttl: Duration,
}

impl<'a, A: EventApi + ?Sized> DashboardController<'a, A> {
    /// `Unauthenticated → Authenticated`. Makes no request.
    pub fn init(api: &'a A, session: Option<SessionIdentity>, banner_ttl: Duration) -> Landing<Self> {
        match session {
            None => {
                info!("no session identity, redirecting to login");
                Landing::RedirectToLogin
            }
            Some(user) => {
                debug!("dashboard ready for user {}", user.id);
                Landing::Ready(Self {
                    api,
                    user,
                    banner_ttl,
                })
            }
        }
    }

    pub fn user(&self) -> &SessionIdentity {
        &self.user
    }

    pub fn header(&self) -> UserHeader {
        UserHeader::from(&self.user)
    }

    pub async fn load(&self, kind: ListKind) -> ListView {
        match kind {
            ListKind::Hosted => self.load_hosted().await,
            ListKind::Attending => self.load_attending().await,
        }
    }

    pub async fn load_hosted(&self) -> ListView {
        match self.api.hosted_events(self.user.id).await {
            Ok(events) => ListView::from_events(ListKind::Hosted, &events),
            Err(e) => {
                debug!("hosted events unavailable: {}", e);
                ListView::failed(ListKind::Hosted)
            }
        }
    }

    pub async fn load_attending(&self) -> ListView {
        match self.api.attending_events(self.user.id).await {
            Ok(events) => ListView::from_events(ListKind::Attending, &events),
            Err(e) => {
                debug!("attending events unavailable: {}", e);
                ListView::failed(ListKind::Attending)
            }
        }
    }

    /// Both lists, fetched concurrently. Neither waits on the other.
    pub async fn load_lists(&self) -> (ListView, ListView) {
        tokio::join!(self.load_hosted(), self.load_attending())
    }

    pub async fn create_event(&self, form: &EventForm) -> FormOutcome {
        let request = match validate::event_request(form, self.user.id) {
            Ok(request) => request,
            Err(e) => return FormOutcome::rejected(e.to_string()),
        };

        match self.api.create_event(&request).await {
            Ok(created) => {
                info!("event created with code {}", created.event_code);
                FormOutcome {
                    banner: Banner::success(
                        format!(
                            "Event Created! Your shareable event code is: {}",
                            created.event_code
                        ),
                        self.banner_ttl,
                    ),
                    reset_form: true,
                    reloaded: Some(self.load_hosted().await),
                }
            }
            Err(e) => FormOutcome::rejected(e.user_message(CREATE_FAILED)),
        }
    }

    pub async fn register(&self, code_input: &str) -> FormOutcome {
        let event_code = match validate::event_code(code_input) {
            Ok(code) => code,
            Err(e) => return FormOutcome::rejected(e.to_string()),
        };

        let request = RegisterRequest {
            user_id: self.user.id,
            event_code,
        };

        match self.api.register(&request).await {
            Ok(()) => {
                info!("registered for event {}", request.event_code);
                FormOutcome {
                    banner: Banner::success(REGISTERED, self.banner_ttl),
                    reset_form: true,
                    reloaded: Some(self.load_attending().await),
                }
            }
            Err(e) => FormOutcome::rejected(e.user_message(REGISTER_FAILED)),
        }
    }

    pub async fn delete_event(&self, event_id: i64, confirm: &dyn Confirm) -> DeleteOutcome {
        if !confirm.confirm(DELETE_PROMPT) {
            debug!("delete of event {} cancelled", event_id);
            return DeleteOutcome::Cancelled;
        }

        match self.api.delete_event(event_id).await {
            Ok(()) => {
                info!("event {} deleted", event_id);
                DeleteOutcome::Deleted(self.load_hosted().await)
            }
            Err(e) => DeleteOutcome::Failed(e.user_message(DELETE_FAILED)),
        }
    }

    /// Fill an already-open modal with the roster for its event.
    pub async fn fill_attendees(&self, modal: &mut AttendeesModal) {
        match self.api.attendees(modal.event_id).await {
            Ok(attendees) => modal.show(&attendees),
            Err(e) => {
                debug!("attendees of event {} unavailable: {}", modal.event_id, e);
                modal.fail();
            }
        }
    }

    pub async fn view_attendees(&self, event_id: i64) -> AttendeesModal {
        let mut modal = AttendeesModal::opening(event_id);
        self.fill_attendees(&mut modal).await;
        modal
    }

    /// Drop the session identity. The controller is consumed: the caller is
    /// back on the login page.
    pub fn logout(self, store: &SessionStore) -> AppResult<()> {
        store.clear()?;
        info!("user {} logged out", self.user.id);
        Ok(())
    }
}
