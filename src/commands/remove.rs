use anyhow::Result;
use fitcal_core::month_key::MonthKey;
use fitcal_core::prompt::{PromptAction, PromptState};

use super::{Context, require_user};

/// Remove the workout the prompt would show: the given day's, or the next one.
pub async fn run(ctx: &Context, month: MonthKey, day: Option<u32>) -> Result<()> {
    require_user(ctx)?;

    let state = match day {
        Some(day) => PromptState::Idle.apply(PromptAction::ClickDate(month, day)),
        None => PromptState::Idle.apply(PromptAction::SelectMonth(month)),
    };

    let (next_state, removed) = ctx.view().remove_from_calendar(state).await?;

    match removed {
        Some(record) => println!(
            "Removed {} from {} {}\n",
            record.workout.name,
            month.month.name(),
            record.date
        ),
        None => println!("Nothing to remove.\n"),
    }

    ctx.print_prompt(&next_state).await
}
