//! Task scoring pipeline.
//!
//! One call runs the whole pipeline over an immutable batch snapshot:
//! graph build and validation, cycle detection, signal normalization,
//! strategy-weighted aggregation, explanation, ranking. No state
//! survives between calls, so concurrent calls are fully independent.

mod explain;
mod graph;
mod signals;
mod strategy;

use chrono::NaiveDate;

use crate::entities::{ScoredTask, TaskRecord};
use crate::errors::RankResult;
use graph::DependencyGraph;

pub use strategy::{Strategy, Weights};

/// Score and rank a batch of tasks under a named strategy.
///
/// Returns one scored record per input task, sorted by score
/// descending; tasks with equal scores keep their input order. The
/// whole batch is rejected on an unknown strategy name, a duplicate or
/// unknown task id, or a dependency cycle — there are no partial
/// results.
///
/// `today` is explicit rather than read from the system clock so calls
/// are reproducible.
pub fn score_tasks(
    tasks: &[TaskRecord],
    strategy: &str,
    today: NaiveDate,
) -> RankResult<Vec<ScoredTask>> {
    let strategy: Strategy = strategy.parse()?;
    score_with(tasks, strategy, today)
}

/// [`score_tasks`] with an already-parsed strategy.
pub fn score_with(
    tasks: &[TaskRecord],
    strategy: Strategy,
    today: NaiveDate,
) -> RankResult<Vec<ScoredTask>> {
    let weights = strategy.weights();

    let graph = DependencyGraph::build(tasks)?;
    graph.ensure_acyclic()?;

    tracing::debug!(tasks = tasks.len(), %strategy, %today, "scoring batch");

    let max_dependents = graph.max_dependents();
    let mut scored = Vec::with_capacity(tasks.len());

    for (index, task) in tasks.iter().enumerate() {
        let id = graph.id_at(index).to_string();
        let dependents = graph.dependents_count(&id);

        let urgency = signals::normalize_urgency(task.due_date, today);
        let importance = signals::normalize_importance(task.importance);
        let effort = signals::normalize_effort(task.estimated_hours);
        let dependency = signals::dependency_score(dependents, max_dependents);

        let score = strategy::aggregate(weights, urgency, importance, effort, dependency);

        // Explanation uses the unshifted due date
        let days_diff = (task.due_date - today).num_days();
        let explanation =
            explain::build_explanation(days_diff, task.importance, task.estimated_hours, dependents);

        scored.push(ScoredTask {
            id,
            title: task.title.clone(),
            due_date: task.due_date,
            estimated_hours: task.estimated_hours,
            importance: task.importance,
            dependencies: task.dependencies.clone(),
            score,
            explanation,
        });
    }

    // Stable sort: equal scores keep input order
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));

    Ok(scored)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use crate::errors::RankError;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 2).unwrap() // a Monday
    }

    fn task(id: &str, due_in_days: i64, hours: f64, importance: i32) -> TaskRecord {
        TaskRecord::new(
            id,
            format!("Task {id}"),
            today() + Duration::days(due_in_days),
            hours,
            importance,
        )
    }

    #[test]
    fn test_one_record_per_task_fields_preserved() {
        let tasks = vec![task("A", 3, 2.0, 7), task("B", 5, 4.0, 4)];
        let scored = score_tasks(&tasks, "smart_balance", today()).unwrap();

        assert_eq!(scored.len(), 2);
        let a = scored.iter().find(|s| s.id == "A").unwrap();
        assert_eq!(a.title, "Task A");
        assert_eq!(a.due_date, today() + Duration::days(3));
        assert_eq!(a.estimated_hours, 2.0);
        assert_eq!(a.importance, 7);
    }

    #[test]
    fn test_scores_in_published_range() {
        let tasks = vec![
            task("A", -5, 0.0, 10),
            task("B", 20, 12.0, 1),
            task("C", 4, 3.0, 5),
        ];
        for strategy in Strategy::ALL {
            let scored = score_with(&tasks, strategy, today()).unwrap();
            for s in &scored {
                assert!((0.0..=100.0).contains(&s.score), "{} -> {}", s.id, s.score);
            }
        }
    }

    #[test]
    fn test_input_not_mutated() {
        let tasks = vec![task("A", 3, 2.0, 7)];
        let before = serde_json::to_string(&tasks).unwrap();
        score_tasks(&tasks, "smart_balance", today()).unwrap();
        assert_eq!(serde_json::to_string(&tasks).unwrap(), before);
    }

    #[test]
    fn test_unknown_strategy_rejected() {
        let tasks = vec![task("A", 3, 2.0, 7)];
        let err = score_tasks(&tasks, "harder_better", today()).unwrap_err();
        assert!(matches!(err, RankError::UnknownStrategy { .. }));
    }

    #[test]
    fn test_cycle_rejected_before_scoring() {
        let tasks = vec![
            task("A", 3, 2.0, 7).with_dependencies(vec!["B".into()]),
            task("B", 3, 2.0, 7).with_dependencies(vec!["A".into()]),
        ];
        let err = score_tasks(&tasks, "smart_balance", today()).unwrap_err();
        assert!(matches!(err, RankError::CircularDependency { .. }));
    }

    #[test]
    fn test_stable_tie_order() {
        // Identical tasks score identically; input order must survive
        let tasks = vec![task("first", 3, 2.0, 7), task("second", 3, 2.0, 7)];
        let scored = score_tasks(&tasks, "smart_balance", today()).unwrap();
        assert_eq!(scored[0].score, scored[1].score);
        assert_eq!(scored[0].id, "first");
        assert_eq!(scored[1].id, "second");
    }

    #[test]
    fn test_empty_batch() {
        let scored = score_tasks(&[], "smart_balance", today()).unwrap();
        assert!(scored.is_empty());
    }
}
