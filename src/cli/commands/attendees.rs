use crate::AppContext;
use crate::cli::parser::Commands;
use crate::errors::AppResult;
use crate::render::view::AttendeesModal;

pub async fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Attendees { event_id } = cmd {
        let ctrl = ctx.dashboard()?;

        let mut modal = AttendeesModal::opening(*event_id);
        super::show_modal_loading(&modal);
        ctrl.fill_attendees(&mut modal).await;

        super::show_modal(ctx, &modal);
    }
    Ok(())
}
