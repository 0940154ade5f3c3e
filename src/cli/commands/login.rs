use crate::AppContext;
use crate::cli::parser::Commands;
use crate::core::{AuthController, DashboardController, Landing, LoginOutcome};
use crate::errors::{AppError, AppResult};
use crate::render::OutputFormat;
use crate::ui::messages::success;

/// Log in, then continue straight to the dashboard.
pub async fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Login { email } = cmd {
        let auth = AuthController::new(&ctx.api, &ctx.store);

        match auth.submit(email).await? {
            LoginOutcome::Redirect(identity) => {
                if ctx.output == OutputFormat::Text {
                    success(format!("Logged in as {}", identity.email));
                    println!();
                }
                if let Landing::Ready(ctrl) =
                    DashboardController::init(&ctx.api, Some(identity), ctx.cfg.banner_ttl())
                {
                    super::dashboard::render(ctx, &ctrl).await;
                }
            }
            LoginOutcome::Invalid(msg) => return Err(AppError::Validation(msg)),
            LoginOutcome::Failed(msg) => return Err(AppError::Rejected(msg)),
        }
    }

    Ok(())
}
