//! Unified application error type.
//! Controllers report user-facing outcomes as view-models; AppError covers
//! local failures (I/O, config, session file) and the CLI exit path.

use crate::api::ApiError;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / serialization
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Backend
    // ---------------------------
    #[error("{0}")]
    Api(#[from] ApiError),

    /// A backend failure already turned into the text shown to the user.
    #[error("{0}")]
    Rejected(String),

    // ---------------------------
    // Input / session
    // ---------------------------
    #[error("{0}")]
    Validation(String),

    #[error("Invalid date/time: {0}")]
    InvalidDateTime(String),

    #[error("Not logged in. Run `eventhost login <EMAIL>` first.")]
    NotLoggedIn,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type AppResult<T> = Result<T, AppError>;
