use std::path::Path;

use anyhow::{Context as _, Result};
use fitcal_core::month_key::{long_date, parse_start_date};
use fitcal_core::program::Program;

use super::{Context, require_user};

pub async fn run(ctx: &Context, program_path: &Path, start: &str) -> Result<()> {
    let user = require_user(ctx)?;
    let start = parse_start_date(start)?;

    let contents = tokio::fs::read_to_string(program_path)
        .await
        .with_context(|| format!("Failed to read program file at {}", program_path.display()))?;
    let program: Program = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse program file at {}", program_path.display()))?;

    let mutation = ctx
        .api
        .expand_program_to_calendar(Some(user), start, &program)
        .await?;

    // Tags come in (Month, Day) pairs, one pair per scheduled day
    let days = mutation.value.len() / 2;
    println!(
        "Added {} {} over {} {} starting {}",
        days,
        if days == 1 { "workout" } else { "workouts" },
        program.duration,
        if program.duration == 1 { "week" } else { "weeks" },
        long_date(start)
    );

    Ok(())
}
