use crate::api::EventApi;
use crate::core::validate;
use crate::errors::{AppError, AppResult};
use crate::models::SessionIdentity;
use crate::session::SessionStore;
use log::{info, warn};

const LOGIN_FAILED: &str = "Login failed";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Identity stored; the caller moves on to the dashboard.
    Redirect(SessionIdentity),
    /// Field-level problem found before any request was made.
    Invalid(String),
    /// The backend (or the network) refused the login.
    Failed(String),
}

pub struct AuthController<'a, A: EventApi + ?Sized> {
    api: &'a A,
    store: &'a SessionStore,
}

impl<'a, A: EventApi + ?Sized> AuthController<'a, A> {
    pub fn new(api: &'a A, store: &'a SessionStore) -> Self {
        Self { api, store }
    }

    /// Handle a login form submission.
    ///
    /// Only local I/O errors (writing the session file) come back as `Err`;
    /// everything the user should see is a [`LoginOutcome`].
    pub async fn submit(&self, email_input: &str) -> AppResult<LoginOutcome> {
        let email = match validate::login_email(email_input) {
            Ok(email) => email,
            Err(AppError::Validation(msg)) => return Ok(LoginOutcome::Invalid(msg)),
            Err(e) => return Err(e),
        };

        let body = match self.api.login(email).await {
            Ok(body) => body,
            Err(e) => return Ok(LoginOutcome::Failed(e.user_message(LOGIN_FAILED))),
        };

        let identity: SessionIdentity = match serde_json::from_str(&body) {
            Ok(identity) => identity,
            Err(e) => {
                warn!("login response is not a user identity: {}", e);
                return Ok(LoginOutcome::Failed(LOGIN_FAILED.into()));
            }
        };

        self.store.save_verbatim(&body)?;
        info!("logged in as {} (id {})", identity.email, identity.id);

        Ok(LoginOutcome::Redirect(identity))
    }
}
