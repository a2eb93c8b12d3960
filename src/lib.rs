//! taskrank — strategy-weighted task priority scoring.
//!
//! Ranks a batch of tasks by combining four normalized signals
//! (deadline urgency, stated importance, estimated effort, and how many
//! other tasks each one unblocks) under a named weighting strategy. The
//! engine is pure: it builds a dependency graph per call, rejects the
//! batch on invalid references or cycles, and returns a ranked list of
//! scored copies without touching the caller's records.
//!
//! ```
//! use chrono::NaiveDate;
//! use taskrank::{score_tasks, TaskRecord};
//!
//! let today = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
//! let tasks = vec![
//!     TaskRecord::new("pay-bill", "Pay electricity bill", today.succ_opt().unwrap(), 1.0, 7),
//! ];
//! let ranked = score_tasks(&tasks, "smart_balance", today).unwrap();
//! assert_eq!(ranked[0].id, "pay-bill");
//! ```

pub mod entities;
pub mod errors;
pub mod scoring;
pub mod ui;

pub use entities::{ScoredTask, TaskRecord};
pub use errors::{RankError, RankResult};
pub use scoring::{score_tasks, score_with, Strategy, Weights};
