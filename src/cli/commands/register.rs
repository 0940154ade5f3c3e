use crate::AppContext;
use crate::cli::parser::Commands;
use crate::errors::AppResult;

pub async fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Register { code } = cmd {
        let ctrl = ctx.dashboard()?;
        let outcome = ctrl.register(code).await;
        super::show_outcome(ctx, &outcome)?;
    }
    Ok(())
}
