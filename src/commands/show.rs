use anyhow::Result;
use fitcal_core::month_key::MonthKey;
use fitcal_core::prompt::{PromptAction, PromptState};

use super::Context;

pub async fn run(ctx: &Context, month: MonthKey, day: u32) -> Result<()> {
    let state = PromptState::Idle.apply(PromptAction::ClickDate(month, day));
    ctx.print_prompt(&state).await
}
