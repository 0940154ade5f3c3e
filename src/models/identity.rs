use serde::{Deserialize, Serialize};

/// The logged-in user, exactly as returned by `POST /users/login`.
///
/// Only the fields the client reads are modelled; the raw response body is
/// what gets persisted (see [`crate::session::SessionStore`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionIdentity {
    pub id: i64,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}
