use crate::AppContext;
use crate::cli::parser::CreateArgs;
use crate::core::EventForm;
use crate::errors::AppResult;

pub async fn handle(args: &CreateArgs, ctx: &AppContext) -> AppResult<()> {
    let ctrl = ctx.dashboard()?;

    let form = EventForm {
        title: args.title.clone(),
        description: args.description.clone(),
        date_time: args.at.clone(),
        is_online: args.online,
        location: args.location.clone(),
    };

    let outcome = ctrl.create_event(&form).await;
    super::show_outcome(ctx, &outcome)
}
