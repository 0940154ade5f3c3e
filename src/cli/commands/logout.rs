use crate::AppContext;
use crate::core::Landing;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

pub fn handle(ctx: &AppContext) -> AppResult<()> {
    match ctx.landing() {
        Landing::Ready(ctrl) => {
            let email = ctrl.user().email.clone();
            ctrl.logout(&ctx.store)?;
            success(format!("Logged out ({}).", email));
        }
        Landing::RedirectToLogin => {
            // Nothing usable stored, but make sure no stale file survives.
            ctx.store.clear()?;
            info("No active session.");
        }
    }
    info("Run `eventhost login <EMAIL>` to log in again.");
    Ok(())
}
