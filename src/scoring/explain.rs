//! Human-readable score explanations.

/// Build the four-clause justification sentence.
///
/// Uses the raw calendar distance to the due date (no weekend shift),
/// raw importance and hours, and the direct dependents count. The text
/// is informational only and never feeds back into the score.
pub(crate) fn build_explanation(
    days_diff: i64,
    importance: i32,
    estimated_hours: f64,
    dependents_count: usize,
) -> String {
    let urgency_phrase = if days_diff < 0 {
        "overdue".to_string()
    } else if days_diff == 0 {
        "due today".to_string()
    } else if days_diff == 1 {
        "due in 1 day".to_string()
    } else if days_diff <= 7 {
        format!("due in {days_diff} days")
    } else {
        format!("due in {days_diff} days (low urgency)")
    };

    let importance_phrase = if importance >= 8 {
        "high importance"
    } else if importance >= 4 {
        "medium importance"
    } else {
        "low importance"
    };

    let effort_phrase = if estimated_hours <= 2.0 {
        "quick win"
    } else if estimated_hours <= 5.0 {
        "moderate effort"
    } else {
        "long task"
    };

    let dep_phrase = if dependents_count > 0 {
        format!("unblocks {dependents_count} other task(s)")
    } else {
        "no dependent tasks".to_string()
    };

    format!(
        "{urgency_phrase}, {importance_phrase} ({importance}/10), \
         {effort_phrase} ({estimated_hours}h), {dep_phrase}."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_sentence() {
        let text = build_explanation(3, 8, 1.5, 2);
        assert_eq!(
            text,
            "due in 3 days, high importance (8/10), quick win (1.5h), \
             unblocks 2 other task(s)."
        );
    }

    #[test]
    fn test_urgency_phrases() {
        assert!(build_explanation(-2, 5, 1.0, 0).starts_with("overdue,"));
        assert!(build_explanation(0, 5, 1.0, 0).starts_with("due today,"));
        assert!(build_explanation(1, 5, 1.0, 0).starts_with("due in 1 day,"));
        assert!(build_explanation(7, 5, 1.0, 0).starts_with("due in 7 days,"));
        assert!(build_explanation(8, 5, 1.0, 0).starts_with("due in 8 days (low urgency),"));
    }

    #[test]
    fn test_importance_bands() {
        assert!(build_explanation(1, 8, 1.0, 0).contains("high importance (8/10)"));
        assert!(build_explanation(1, 4, 1.0, 0).contains("medium importance (4/10)"));
        assert!(build_explanation(1, 7, 1.0, 0).contains("medium importance (7/10)"));
        assert!(build_explanation(1, 3, 1.0, 0).contains("low importance (3/10)"));
    }

    #[test]
    fn test_effort_bands() {
        assert!(build_explanation(1, 5, 2.0, 0).contains("quick win (2h)"));
        assert!(build_explanation(1, 5, 5.0, 0).contains("moderate effort (5h)"));
        assert!(build_explanation(1, 5, 6.5, 0).contains("long task (6.5h)"));
    }

    #[test]
    fn test_dependency_clause_and_period() {
        let none = build_explanation(1, 5, 1.0, 0);
        assert!(none.ends_with("no dependent tasks."));

        let some = build_explanation(1, 5, 1.0, 3);
        assert!(some.ends_with("unblocks 3 other task(s)."));
    }
}
