//! Core data structures for task scoring.

mod task;

pub use task::{ScoredTask, TaskRecord};
