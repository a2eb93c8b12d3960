//! Terminal UI helpers for ranked-task display.
//!
//! This module uses println! for CLI output, which is appropriate
//! for terminal user interfaces.

#![allow(clippy::disallowed_macros)]

use colored::Colorize;
use comfy_table::{Cell, Color, ContentArrangement, Table};

use crate::entities::ScoredTask;
use crate::scoring::Strategy;

/// Create a table for displaying ranked tasks
pub fn ranked_table(tasks: &[ScoredTask]) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("#").fg(Color::Cyan),
        Cell::new("ID").fg(Color::Cyan),
        Cell::new("Title").fg(Color::Cyan),
        Cell::new("Due").fg(Color::Cyan),
        Cell::new("Score").fg(Color::Cyan),
        Cell::new("Why").fg(Color::Cyan),
    ]);

    for (rank, task) in tasks.iter().enumerate() {
        let score_color = if task.score >= 70.0 {
            Color::Red
        } else if task.score >= 40.0 {
            Color::Yellow
        } else {
            Color::Green
        };

        table.add_row(vec![
            Cell::new(rank + 1),
            Cell::new(&task.id),
            Cell::new(&task.title),
            Cell::new(task.due_date.to_string()),
            Cell::new(format!("{:.2}", task.score)).fg(score_color),
            Cell::new(&task.explanation),
        ]);
    }

    table
}

/// Create a table for displaying strategies and their weight vectors
pub fn strategy_table() -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Strategy").fg(Color::Cyan),
        Cell::new("Urgency").fg(Color::Cyan),
        Cell::new("Importance").fg(Color::Cyan),
        Cell::new("Effort").fg(Color::Cyan),
        Cell::new("Dependencies").fg(Color::Cyan),
    ]);

    for strategy in Strategy::ALL {
        let w = strategy.weights();
        let name = if strategy == Strategy::default() {
            format!("{strategy} (default)")
        } else {
            strategy.to_string()
        };

        table.add_row(vec![
            Cell::new(name),
            Cell::new(format!("{:.2}", w.urgency)),
            Cell::new(format!("{:.2}", w.importance)),
            Cell::new(format!("{:.2}", w.effort)),
            Cell::new(format!("{:.2}", w.dependencies)),
        ]);
    }

    table
}

/// Print success message
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message);
}

/// Print error message
pub fn print_error(message: &str) {
    println!("{} {}", "✗".red().bold(), message);
}

/// Print info message
pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}
