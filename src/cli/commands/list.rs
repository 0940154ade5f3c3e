use crate::AppContext;
use crate::cli::parser::Commands;
use crate::errors::AppResult;
use crate::render::view::ListKind;

pub async fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::List { hosted, attending } = cmd {
        let ctrl = ctx.dashboard()?;

        // No filter (or both filters) means both lists.
        let both = *hosted == *attending;

        if both {
            super::show_loading(ListKind::Hosted);
            super::show_loading(ListKind::Attending);
            let (h, a) = ctrl.load_lists().await;
            super::show_list(ctx, &h);
            super::show_list(ctx, &a);
        } else {
            let kind = if *hosted {
                ListKind::Hosted
            } else {
                ListKind::Attending
            };
            super::show_loading(kind);
            let view = ctrl.load(kind).await;
            super::show_list(ctx, &view);
        }
    }
    Ok(())
}
