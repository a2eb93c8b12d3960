//! Dependency graph construction and cycle detection.

use std::collections::{HashMap, HashSet};

use crate::entities::TaskRecord;
use crate::errors::{RankError, RankResult};

/// Dependency graph over one task batch.
///
/// Built fresh for every scoring call and discarded afterwards. Ids are
/// kept in input order so downstream iteration stays deterministic.
#[derive(Debug)]
pub(crate) struct DependencyGraph {
    /// Assigned ids, one per input task, in input order
    ids: Vec<String>,
    /// id -> ids it depends on
    forward: HashMap<String, Vec<String>>,
    /// id -> ids that depend on it
    reverse: HashMap<String, Vec<String>>,
}

/// Id assigned to a task: its own, or its zero-based position
/// stringified when absent. The positional fallback is kept for
/// backward compatibility with existing callers.
pub(crate) fn assigned_id(task: &TaskRecord, index: usize) -> String {
    task.id.clone().unwrap_or_else(|| index.to_string())
}

impl DependencyGraph {
    /// Build the forward and reverse maps, validating id uniqueness and
    /// reference integrity. Does not mutate the input records.
    pub fn build(tasks: &[TaskRecord]) -> RankResult<Self> {
        let mut ids = Vec::with_capacity(tasks.len());
        let mut id_set = HashSet::with_capacity(tasks.len());

        for (index, task) in tasks.iter().enumerate() {
            let tid = assigned_id(task, index);
            if !id_set.insert(tid.clone()) {
                return Err(RankError::DuplicateId { task_id: tid });
            }
            ids.push(tid);
        }

        let mut forward: HashMap<String, Vec<String>> =
            ids.iter().map(|id| (id.clone(), Vec::new())).collect();
        let mut reverse: HashMap<String, Vec<String>> =
            ids.iter().map(|id| (id.clone(), Vec::new())).collect();

        for (index, task) in tasks.iter().enumerate() {
            let tid = &ids[index];
            for dep in &task.dependencies {
                if !id_set.contains(dep) {
                    return Err(RankError::InvalidDependency {
                        task_id: tid.clone(),
                        dep_id: dep.clone(),
                    });
                }
                forward.entry(tid.clone()).or_default().push(dep.clone());
                reverse.entry(dep.clone()).or_default().push(tid.clone());
            }
        }

        Ok(Self {
            ids,
            forward,
            reverse,
        })
    }

    /// Assigned id of the task at `index`
    pub fn id_at(&self, index: usize) -> &str {
        &self.ids[index]
    }

    /// Number of tasks that list `id` as a dependency
    pub fn dependents_count(&self, id: &str) -> usize {
        self.reverse.get(id).map_or(0, Vec::len)
    }

    /// Largest dependents count observed in the batch
    pub fn max_dependents(&self) -> usize {
        self.reverse.values().map(Vec::len).max().unwrap_or(0)
    }

    /// Verify the forward map is acyclic.
    ///
    /// Iterative depth-first traversal with an explicit stack, so deep
    /// dependency chains cannot exhaust the call stack. The error names
    /// the first task found on the current traversal stack.
    pub fn ensure_acyclic(&self) -> RankResult<()> {
        let mut visited: HashSet<&str> = HashSet::new();

        for root in &self.ids {
            if visited.contains(root.as_str()) {
                continue;
            }

            let mut on_stack: HashSet<&str> = HashSet::new();
            // (node, index of the next dependency to visit)
            let mut stack: Vec<(&str, usize)> = vec![(root.as_str(), 0)];
            visited.insert(root.as_str());
            on_stack.insert(root.as_str());

            while let Some((node, next_dep)) = stack.last_mut() {
                let deps = self.forward.get(*node).map_or(&[] as &[String], Vec::as_slice);

                if let Some(dep) = deps.get(*next_dep) {
                    *next_dep += 1;

                    if on_stack.contains(dep.as_str()) {
                        return Err(RankError::CircularDependency {
                            task_id: dep.clone(),
                        });
                    }
                    if visited.insert(dep.as_str()) {
                        on_stack.insert(dep.as_str());
                        stack.push((dep.as_str(), 0));
                    }
                } else {
                    on_stack.remove(*node);
                    stack.pop();
                }
            }
        }

        Ok(())
    }
}
