//! taskrank CLI - rank task batches from JSON files.

#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::disallowed_macros)]

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};

use taskrank::errors::RankError;
use taskrank::scoring::score_tasks;
use taskrank::ui;
use taskrank::TaskRecord;

/// Days ahead included in the `suggest` window
const SUGGEST_WINDOW_DAYS: i64 = 7;

/// Number of tasks `suggest` returns
const SUGGEST_TOP: usize = 3;

#[derive(Parser)]
#[command(name = "taskrank")]
#[command(about = "Strategy-weighted task priority scoring", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank a batch of tasks from a JSON file
    Rank {
        /// Path to a JSON array of tasks
        file: PathBuf,

        /// Scoring strategy
        #[arg(short, long, default_value = "smart_balance")]
        strategy: String,

        /// Reference date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        today: Option<NaiveDate>,

        /// Only show the top N tasks
        #[arg(long)]
        top: Option<usize>,
    },

    /// Suggest what to work on: overdue tasks plus the next 7 days, top 3
    Suggest {
        /// Path to a JSON array of tasks
        file: PathBuf,

        /// Scoring strategy
        #[arg(short, long, default_value = "smart_balance")]
        strategy: String,

        /// Reference date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        today: Option<NaiveDate>,
    },

    /// List the available strategies and their weights
    Strategies,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        ui::print_error(&e.to_string());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), RankError> {
    match cli.command {
        Commands::Rank {
            file,
            strategy,
            today,
            top,
        } => {
            let tasks = load_tasks(&file)?;
            let today = today.unwrap_or_else(|| Local::now().date_naive());

            let mut ranked = score_tasks(&tasks, &strategy, today)?;
            let total = ranked.len();
            if let Some(n) = top {
                ranked.truncate(n);
            }

            let table = ui::ranked_table(&ranked);
            println!("{table}");
            println!();
            ui::print_info(&format!(
                "{} of {} task(s), strategy: {}, as of {}",
                ranked.len(),
                total,
                strategy,
                today
            ));
        }

        Commands::Suggest {
            file,
            strategy,
            today,
        } => {
            let tasks = load_tasks(&file)?;
            let today = today.unwrap_or_else(|| Local::now().date_naive());
            let cutoff = today + chrono::Duration::days(SUGGEST_WINDOW_DAYS);

            // Overdue plus the near-term window; the rest can wait
            let window: Vec<TaskRecord> = tasks
                .into_iter()
                .filter(|t| t.due_date <= cutoff)
                .collect();

            if window.is_empty() {
                ui::print_info("No tasks due within the next 7 days");
                return Ok(());
            }

            let mut ranked = score_tasks(&window, &strategy, today)?;
            ranked.truncate(SUGGEST_TOP);

            ui::print_success(&format!("Top {} task(s) for {}", ranked.len(), today));
            let table = ui::ranked_table(&ranked);
            println!("{table}");
        }

        Commands::Strategies => {
            let table = ui::strategy_table();
            println!("{table}");
        }
    }

    Ok(())
}

fn load_tasks(path: &Path) -> Result<Vec<TaskRecord>, RankError> {
    let content = std::fs::read_to_string(path).map_err(|e| RankError::FileReadError {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    Ok(serde_json::from_str(&content)?)
}
