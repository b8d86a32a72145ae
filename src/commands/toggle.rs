use anyhow::Result;
use fitcal_core::month_key::MonthKey;
use owo_colors::OwoColorize;

use super::{Context, require_user};

pub async fn run(ctx: &Context, month: MonthKey, day: u32) -> Result<()> {
    let user = require_user(ctx)?;
    let mutation = ctx.api.toggle_complete(Some(user), month, day).await?;

    let status = if mutation.value {
        "complete".green().to_string()
    } else {
        "not complete".yellow().to_string()
    };
    println!("{} {} marked {}", month.month.name(), day, status);

    Ok(())
}
