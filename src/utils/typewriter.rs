use std::io::Write;
use std::time::Duration;

use anyhow::Result;
use fitcal_core::prompt::{Emphasis, Narrative};
use owo_colors::OwoColorize;

use crate::render::Render;

/// Print a narrative, typing out `Typed` segments one character at a time.
///
/// A zero delay prints everything at once.
pub async fn print_narrative(narrative: &Narrative, delay: Duration) -> Result<()> {
    let mut stdout = std::io::stdout();

    for segment in narrative.segments() {
        if segment.emphasis != Emphasis::Typed || delay.is_zero() {
            write!(stdout, "{}", segment.render())?;
            continue;
        }

        for c in segment.text.chars() {
            write!(stdout, "{}", c.bold())?;
            stdout.flush()?;
            tokio::time::sleep(delay).await;
        }
    }

    stdout.flush()?;
    Ok(())
}
