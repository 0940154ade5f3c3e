pub mod date;
pub mod formatting;
pub mod path;
pub mod table;

pub use formatting::{strip_ansi, visible_width};
