//! Error types for the taskrank crate.

use thiserror::Error;

/// Errors surfaced by scoring and by the CLI surface.
///
/// Every scoring error rejects the whole batch; there are no partial
/// results to recover.
#[derive(Error, Debug, Clone)]
pub enum RankError {
    // Validation errors
    #[error("Task '{task_id}' depends on unknown task '{dep_id}'")]
    InvalidDependency { task_id: String, dep_id: String },

    #[error("Duplicate task id '{task_id}'")]
    DuplicateId { task_id: String },

    // Dependency graph errors
    #[error("Circular dependency detected involving task '{task_id}'")]
    CircularDependency { task_id: String },

    // Strategy errors
    #[error("Unknown strategy '{strategy}'")]
    UnknownStrategy { strategy: String },

    // CLI surface errors
    #[error("Failed to read file '{path}': {reason}")]
    FileReadError { path: String, reason: String },

    #[error("Failed to parse JSON: {reason}")]
    JsonParseError { reason: String },

    #[error("Invalid argument: {reason}")]
    InvalidArgument { reason: String },
}

impl From<serde_json::Error> for RankError {
    fn from(err: serde_json::Error) -> Self {
        Self::JsonParseError {
            reason: err.to_string(),
        }
    }
}

/// Result type alias for scoring operations
pub type RankResult<T> = Result<T, RankError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RankError::InvalidDependency {
            task_id: "1".to_string(),
            dep_id: "99".to_string(),
        };
        assert_eq!(err.to_string(), "Task '1' depends on unknown task '99'");
    }

    #[test]
    fn test_circular_dependency_error() {
        let err = RankError::CircularDependency {
            task_id: "A".to_string(),
        };
        assert!(err.to_string().contains("Circular dependency"));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<Vec<String>>("{").unwrap_err();
        let rank_err: RankError = json_err.into();
        assert!(matches!(rank_err, RankError::JsonParseError { .. }));
    }
}
