use crate::AppContext;
use crate::cli::parser::Commands;
use crate::core::{Confirm, DeleteOutcome};
use crate::errors::{AppError, AppResult};
use crate::render::view::Banner;
use crate::render::{OutputFormat, html};
use crate::ui::messages::{info, success, warning};

use std::io::{self, Write};

/// Yes/no prompt on stdin; `--yes` answers for the user.
struct StdinConfirm {
    assume_yes: bool,
}

impl Confirm for StdinConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        if self.assume_yes {
            return true;
        }

        warning(prompt);
        print!("Confirm [y/N]: ");
        let _ = io::stdout().flush();

        let mut s = String::new();
        if io::stdin().read_line(&mut s).is_ok() {
            matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
        } else {
            false
        }
    }
}

pub async fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Delete { event_id, yes } = cmd {
        let ctrl = ctx.dashboard()?;
        let confirm = StdinConfirm { assume_yes: *yes };

        match ctrl.delete_event(*event_id, &confirm).await {
            DeleteOutcome::Cancelled => info("Operation cancelled."),
            DeleteOutcome::Deleted(hosted) => {
                success(format!("Event #{} has been deleted.", event_id));
                super::show_list(ctx, &hosted);
            }
            DeleteOutcome::Failed(msg) => {
                if ctx.output == OutputFormat::Html {
                    println!("{}", html::banner(&Banner::error(msg.as_str())));
                }
                return Err(AppError::Rejected(msg));
            }
        }
    }

    Ok(())
}
