use anyhow::Result;
use fitcal_core::month_key::MonthKey;
use owo_colors::OwoColorize;

use super::{Context, require_user};
use crate::render::Render;

pub async fn run(ctx: &Context, month: MonthKey) -> Result<()> {
    let user = require_user(ctx)?;
    let days = ctx.api.month_workouts(Some(user), month).await?;

    println!("{}", month.render());

    if days.is_empty() {
        println!("   {}", "No workouts scheduled".dimmed());
        return Ok(());
    }

    for record in days.values() {
        println!("   {}", record.render());
    }

    Ok(())
}
