//! One handler per subcommand, plus the output helpers they share.
//! Handlers are the adapter layer: they feed user input to the controllers
//! and print the returned view-models in the selected format.

pub mod attendees;
pub mod config;
pub mod create;
pub mod dashboard;
pub mod delete;
pub mod init;
pub mod list;
pub mod login;
pub mod logout;
pub mod register;

use crate::AppContext;
use crate::core::FormOutcome;
use crate::errors::{AppError, AppResult};
use crate::render::view::{AttendeesModal, ListKind, ListView, UserHeader};
use crate::render::{OutputFormat, html, text};
use crate::ui::messages;
use std::io::{self, IsTerminal};

/// Placeholder shown on stderr while a request is in flight, only when a
/// human is watching.
pub(crate) fn show_loading(kind: ListKind) {
    if io::stderr().is_terminal() {
        eprintln!("{}", text::list(&ListView::loading(kind)).trim_end());
    }
}

pub(crate) fn show_modal_loading(modal: &AttendeesModal) {
    if io::stderr().is_terminal() {
        eprintln!("{}", text::attendees_modal(modal).trim_end());
    }
}

pub(crate) fn show_header(ctx: &AppContext, header: &UserHeader) {
    match ctx.output {
        OutputFormat::Text => println!("{}\n", text::header(header)),
        OutputFormat::Html => println!("{}", html::header(header)),
    }
}

pub(crate) fn show_list(ctx: &AppContext, view: &ListView) {
    match ctx.output {
        OutputFormat::Text => println!("{}", text::list(view)),
        OutputFormat::Html => println!("{}", html::list(view)),
    }
}

pub(crate) fn show_modal(ctx: &AppContext, modal: &AttendeesModal) {
    match ctx.output {
        OutputFormat::Text => print!("{}", text::attendees_modal(modal)),
        OutputFormat::Html => println!("{}", html::attendees_modal(modal)),
    }
}

/// Print the banner (and the reloaded list on success). An error banner
/// becomes the command's error so the process exits non-zero.
pub(crate) fn show_outcome(ctx: &AppContext, outcome: &FormOutcome) -> AppResult<()> {
    if outcome.banner.is_error() {
        if ctx.output == OutputFormat::Html {
            println!("{}", html::banner(&outcome.banner));
        }
        return Err(AppError::Rejected(outcome.banner.text.clone()));
    }

    match ctx.output {
        OutputFormat::Text => messages::banner(&outcome.banner),
        OutputFormat::Html => println!("{}", html::banner(&outcome.banner)),
    }
    if let Some(view) = &outcome.reloaded {
        if ctx.output == OutputFormat::Text {
            println!();
        }
        show_list(ctx, view);
    }
    Ok(())
}
