//! Controllers: validation, request shaping and response interpretation.
//! Nothing in here prints; every outcome is returned as a view-model.

pub mod auth;
pub mod dashboard;
pub mod validate;

pub use auth::{AuthController, LoginOutcome};
pub use dashboard::{Confirm, DashboardController, DeleteOutcome, FormOutcome, Landing};
pub use validate::EventForm;
