mod commands;
mod render;
mod utils;

use std::path::PathBuf;

use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use fitcal_core::fitcal::FitCal;
use fitcal_core::month_key::MonthKey;
use tracing_subscriber::EnvFilter;

use commands::Context;

#[derive(Parser)]
#[command(name = "fitcal")]
#[command(about = "Schedule workouts on your fitness calendar and see what's next")]
struct Cli {
    /// Whose calendar to use (defaults to user_id from config)
    #[arg(short, long, global = true)]
    user: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the workouts scheduled in a month
    Month {
        /// Month to view (e.g. "june_2025"), defaults to the current month
        #[arg(short, long)]
        month: Option<String>,
    },
    /// Describe the next workout planned for a month
    Next {
        #[arg(short, long)]
        month: Option<String>,
    },
    /// Describe the workout on a day
    Show {
        day: u32,

        #[arg(short, long)]
        month: Option<String>,
    },
    /// Schedule a workout (JSON file) on a day, replacing any existing one
    Add {
        day: u32,

        /// Workout JSON file
        #[arg(short, long)]
        workout: PathBuf,

        #[arg(short, long)]
        month: Option<String>,
    },
    /// Remove a day's workout, or the next workout when no day is given
    Remove {
        day: Option<u32>,

        #[arg(short, long)]
        month: Option<String>,
    },
    /// Mark a day's workout complete, or not complete again
    Toggle {
        day: u32,

        #[arg(short, long)]
        month: Option<String>,
    },
    /// Add every workout of a program (JSON file) to the calendar
    Program {
        file: PathBuf,

        /// First day of the program (e.g. "June 3, 2025" or "2025-06-03")
        #[arg(short, long)]
        start: String,
    },
    /// Set the default user
    User { user_id: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let fitcal = FitCal::load()?;
    let ctx = Context::new(fitcal, cli.user, Local::now().date_naive());
    tracing::debug!(user = ?ctx.user(), today = %ctx.today, "resolved context");

    match cli.command {
        Commands::Month { month } => {
            let month = resolve_month(ctx.today, month.as_deref())?;
            commands::month::run(&ctx, month).await
        }
        Commands::Next { month } => {
            let month = resolve_month(ctx.today, month.as_deref())?;
            commands::next::run(&ctx, month).await
        }
        Commands::Show { day, month } => {
            let month = resolve_month(ctx.today, month.as_deref())?;
            commands::show::run(&ctx, month, day).await
        }
        Commands::Add {
            day,
            workout,
            month,
        } => {
            let month = resolve_month(ctx.today, month.as_deref())?;
            commands::add::run(&ctx, month, day, &workout).await
        }
        Commands::Remove { day, month } => {
            let month = resolve_month(ctx.today, month.as_deref())?;
            commands::remove::run(&ctx, month, day).await
        }
        Commands::Toggle { day, month } => {
            let month = resolve_month(ctx.today, month.as_deref())?;
            commands::toggle::run(&ctx, month, day).await
        }
        Commands::Program { file, start } => commands::program::run(&ctx, &file, &start).await,
        Commands::User { user_id } => commands::user::run(ctx, &user_id),
    }
}

/// Logs go to stderr so they never interleave with the narrative.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn resolve_month(today: NaiveDate, month: Option<&str>) -> Result<MonthKey> {
    match month {
        Some(s) => Ok(s.parse()?),
        None => Ok(MonthKey::from_date(today)),
    }
}
