use anyhow::Result;
use fitcal_core::month_key::MonthKey;
use fitcal_core::prompt::{PromptAction, PromptState};

use super::Context;

pub async fn run(ctx: &Context, month: MonthKey) -> Result<()> {
    let state = PromptState::Idle.apply(PromptAction::SelectMonth(month));
    ctx.print_prompt(&state).await
}
