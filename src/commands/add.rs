use std::path::Path;

use anyhow::{Context as _, Result};
use fitcal_core::month_key::MonthKey;
use fitcal_core::workout::Workout;

use super::{Context, require_user};

pub async fn run(ctx: &Context, month: MonthKey, day: u32, workout_path: &Path) -> Result<()> {
    let user = require_user(ctx)?;

    let contents = tokio::fs::read_to_string(workout_path)
        .await
        .with_context(|| format!("Failed to read workout file at {}", workout_path.display()))?;
    let workout: Workout = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse workout file at {}", workout_path.display()))?;

    let name = workout.name.clone();
    ctx.api.write_day_record(Some(user), month, day, workout).await?;

    println!("Scheduled {} on {} {}", name, month.month.name(), day);

    Ok(())
}
