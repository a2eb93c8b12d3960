//! Task record and scored-task types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An unscored task as supplied by the caller.
///
/// The `id` field is optional: a task without one is assigned its
/// zero-based position in the batch, stringified. Dependencies refer to
/// the ids of other tasks in the same batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskRecord {
    /// Unique identifier (string to support alphanumeric ids)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Brief, descriptive title
    pub title: String,

    /// Calendar due date
    pub due_date: NaiveDate,

    /// Estimated effort in hours (non-negative)
    pub estimated_hours: f64,

    /// Stated importance, 1 (lowest) to 10 (highest)
    pub importance: i32,

    /// Ids of prerequisite tasks
    #[serde(default)]
    pub dependencies: Vec<String>,
}

impl TaskRecord {
    /// Create a task with an explicit id and no dependencies
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        due_date: NaiveDate,
        estimated_hours: f64,
        importance: i32,
    ) -> Self {
        Self {
            id: Some(id.into()),
            title: title.into(),
            due_date,
            estimated_hours,
            importance,
            dependencies: Vec::new(),
        }
    }

    /// Builder-style dependency list
    #[must_use]
    pub fn with_dependencies(mut self, deps: Vec<String>) -> Self {
        self.dependencies = deps;
        self
    }
}

/// A scored task: an independent copy of the input fields plus the
/// assigned id, the published score and its explanation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredTask {
    /// Assigned identifier (explicit id or positional fallback)
    pub id: String,

    pub title: String,

    pub due_date: NaiveDate,

    pub estimated_hours: f64,

    pub importance: i32,

    #[serde(default)]
    pub dependencies: Vec<String>,

    /// Priority score, 0-100 with two-decimal precision
    pub score: f64,

    /// Human-readable justification for the score
    pub explanation: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_task_new() {
        let task = TaskRecord::new("1", "Write report", date(2025, 6, 2), 3.0, 7);
        assert_eq!(task.id.as_deref(), Some("1"));
        assert_eq!(task.title, "Write report");
        assert!(task.dependencies.is_empty());
    }

    #[test]
    fn test_dependencies_default_when_absent() {
        let json = r#"{
            "id": "a",
            "title": "No deps field",
            "due_date": "2025-06-02",
            "estimated_hours": 1.5,
            "importance": 5
        }"#;
        let task: TaskRecord = serde_json::from_str(json).unwrap();
        assert!(task.dependencies.is_empty());
    }

    #[test]
    fn test_id_optional() {
        let json = r#"{
            "title": "Anonymous",
            "due_date": "2025-06-02",
            "estimated_hours": 1.0,
            "importance": 5,
            "dependencies": []
        }"#;
        let task: TaskRecord = serde_json::from_str(json).unwrap();
        assert!(task.id.is_none());
    }

    #[test]
    fn test_non_list_dependencies_rejected_at_parse() {
        let json = r#"{
            "title": "Bad shape",
            "due_date": "2025-06-02",
            "estimated_hours": 1.0,
            "importance": 5,
            "dependencies": "not-a-list"
        }"#;
        assert!(serde_json::from_str::<TaskRecord>(json).is_err());
    }
}
