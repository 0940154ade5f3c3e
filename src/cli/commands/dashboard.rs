use crate::AppContext;
use crate::api::EventApi;
use crate::core::DashboardController;
use crate::errors::AppResult;
use crate::render::view::ListKind;

pub async fn handle(ctx: &AppContext) -> AppResult<()> {
    let ctrl = ctx.dashboard()?;
    render(ctx, &ctrl).await;
    Ok(())
}

/// Header plus both lists, loaded concurrently.
pub(crate) async fn render<A: EventApi + ?Sized>(ctx: &AppContext, ctrl: &DashboardController<'_, A>) {
    super::show_header(ctx, &ctrl.header());

    super::show_loading(ListKind::Hosted);
    super::show_loading(ListKind::Attending);
    let (hosted, attending) = ctrl.load_lists().await;

    super::show_list(ctx, &hosted);
    super::show_list(ctx, &attending);
}
