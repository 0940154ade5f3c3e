//! Entities → view-models → output.
//!
//! `view` is what the controllers produce; `html` and `text` are the two
//! adapters that turn it into something to print.

pub mod html;
pub mod text;
pub mod view;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Html,
}
