//! Per-task signal normalization.
//!
//! Four independent, stateless computations, each bounded to [0, 1].

use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Hours at and beyond which a task scores the effort floor of 0.0
pub(crate) const MAX_EFFORT_HOURS: f64 = 8.0;

/// Days ahead at which urgency bottoms out at 0.0
const URGENCY_HORIZON_DAYS: i64 = 14;

/// Effective due date for urgency: weekend due dates shift to the
/// following Monday, so a weekend is never treated as an urgent
/// cut-off point. Explanation text keeps the original date.
pub(crate) fn adjust_for_weekend(due_date: NaiveDate) -> NaiveDate {
    match due_date.weekday() {
        Weekday::Sat => due_date + Duration::days(2),
        Weekday::Sun => due_date + Duration::days(1),
        _ => due_date,
    }
}

/// 1.0 when due or overdue, 0.0 at 14+ days out, linear in between.
/// `today` is an explicit input so results are reproducible.
pub(crate) fn normalize_urgency(due_date: NaiveDate, today: NaiveDate) -> f64 {
    let effective_due = adjust_for_weekend(due_date);
    let days_diff = (effective_due - today).num_days();

    if days_diff <= 0 {
        return 1.0;
    }
    if days_diff >= URGENCY_HORIZON_DAYS {
        return 0.0;
    }
    (URGENCY_HORIZON_DAYS - days_diff) as f64 / URGENCY_HORIZON_DAYS as f64
}

/// Importance clamped to [1, 10], divided by 10
pub(crate) fn normalize_importance(importance: i32) -> f64 {
    f64::from(importance.clamp(1, 10)) / 10.0
}

/// Smaller tasks score higher; hours above 8 score the same as 8
pub(crate) fn normalize_effort(estimated_hours: f64) -> f64 {
    let hours = estimated_hours.clamp(0.0, MAX_EFFORT_HOURS);
    1.0 - hours / MAX_EFFORT_HOURS
}

/// Direct dependents relative to the batch maximum; 0.0 when no task in
/// the batch has any dependents
pub(crate) fn dependency_score(dependents_count: usize, max_dependents: usize) -> f64 {
    if max_dependents == 0 {
        return 0.0;
    }
    dependents_count as f64 / max_dependents as f64
}
