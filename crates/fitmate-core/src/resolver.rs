//! Flattening of nested training plans into timed steps.
//!
//! A plan's item list may reference exercises, breaks and other plans, and
//! plans may (directly or indirectly) reference themselves. [`resolve`]
//! expands the graph depth-first, left to right, splicing nested plans in
//! place. An [`ExpansionPath`] tracks the plans currently being expanded;
//! a reference to a plan already on the path is a cycle and is skipped.
//!
//! Only a missing root plan is fatal. Everything else that cannot be
//! resolved is skipped and reported as a [`ResolveWarning`].

use std::collections::HashSet;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, TrackerError},
    models::{Plan, PlanItemRef, ResolvedPlan, Step},
    store::PlanStore,
};

/// Non-fatal problem met while resolving a plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResolveWarning {
    /// An exercise reference points at no stored exercise
    MissingExercise { plan_id: u64, exercise_id: u64 },
    /// A nested plan reference points at no stored plan
    MissingPlan { plan_id: u64, nested_plan_id: u64 },
    /// A nested plan reference would re-enter a plan being expanded
    CycleDetected { plan_id: u64, nested_plan_id: u64 },
    /// An item token could not be parsed
    MalformedToken { plan_id: u64, token: String },
}

/// The outcome of a successful resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resolution {
    pub plan: ResolvedPlan,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<ResolveWarning>,
}

/// Plan IDs currently being expanded.
#[derive(Debug, Default, Clone)]
pub struct ExpansionPath {
    active: HashSet<u64>,
}

impl ExpansionPath {
    /// A path holding only the root plan.
    pub fn rooted_at(root_plan_id: u64) -> Self {
        Self {
            active: HashSet::from([root_plan_id]),
        }
    }

    /// Mark a plan as in progress. Returns false if it already was, meaning
    /// expanding it again would loop.
    pub fn enter(&mut self, plan_id: u64) -> bool {
        self.active.insert(plan_id)
    }

    /// Unmark a plan once its expansion has returned.
    pub fn leave(&mut self, plan_id: u64) {
        self.active.remove(&plan_id);
    }

    pub fn contains(&self, plan_id: u64) -> bool {
        self.active.contains(&plan_id)
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}

/// Resolve a plan into its flattened steps.
///
/// # Errors
///
/// Returns `TrackerError::PlanNotFound` if the root plan does not exist, or
/// any storage error raised by the store.
pub fn resolve<S: PlanStore + ?Sized>(store: &S, root_plan_id: u64) -> Result<Resolution> {
    let root = store
        .get_plan(root_plan_id)?
        .ok_or(TrackerError::PlanNotFound { id: root_plan_id })?;

    let mut path = ExpansionPath::rooted_at(root_plan_id);
    let mut steps = Vec::new();
    let mut warnings = Vec::new();

    expand(store, &root, &mut path, &mut steps, &mut warnings)?;

    debug!(
        "Resolved plan {} ('{}') into {} steps with {} warnings",
        root.id,
        root.name,
        steps.len(),
        warnings.len()
    );

    Ok(Resolution {
        plan: ResolvedPlan {
            source_plan_id: root.id,
            name: root.name,
            steps,
        },
        warnings,
    })
}

/// Append the steps of `plan` to `steps`, recursing into nested plans.
fn expand<S: PlanStore + ?Sized>(
    store: &S,
    plan: &Plan,
    path: &mut ExpansionPath,
    steps: &mut Vec<Step>,
    warnings: &mut Vec<ResolveWarning>,
) -> Result<()> {
    for item in plan.items() {
        let item = match item {
            Ok(item) => item,
            Err(token) => {
                report(
                    warnings,
                    ResolveWarning::MalformedToken {
                        plan_id: plan.id,
                        token: token.to_string(),
                    },
                );
                continue;
            }
        };

        match item {
            PlanItemRef::Break => steps.push(Step::break_time()),
            PlanItemRef::Exercise(exercise_id) => match store.get_exercise(exercise_id)? {
                Some(exercise) => steps.push(Step::exercise(&exercise)),
                None => report(
                    warnings,
                    ResolveWarning::MissingExercise {
                        plan_id: plan.id,
                        exercise_id,
                    },
                ),
            },
            PlanItemRef::NestedPlan(nested_plan_id) => {
                if !path.enter(nested_plan_id) {
                    report(
                        warnings,
                        ResolveWarning::CycleDetected {
                            plan_id: plan.id,
                            nested_plan_id,
                        },
                    );
                    continue;
                }

                let outcome = match store.get_plan(nested_plan_id) {
                    Ok(Some(nested)) => expand(store, &nested, path, steps, warnings),
                    Ok(None) => {
                        report(
                            warnings,
                            ResolveWarning::MissingPlan {
                                plan_id: plan.id,
                                nested_plan_id,
                            },
                        );
                        Ok(())
                    }
                    Err(e) => Err(e),
                };

                path.leave(nested_plan_id);
                outcome?;
            }
        }
    }

    Ok(())
}

fn report(warnings: &mut Vec<ResolveWarning>, warning: ResolveWarning) {
    warn!("{warning}");
    warnings.push(warning);
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::models::{Exercise, StepKind, BREAK_NAME};

    /// In-memory catalog for exercising the resolver without SQLite.
    #[derive(Default)]
    struct MemoryCatalog {
        plans: HashMap<u64, Plan>,
        exercises: HashMap<u64, Exercise>,
    }

    impl MemoryCatalog {
        fn with_exercise(mut self, id: u64, name: &str) -> Self {
            self.exercises.insert(
                id,
                Exercise {
                    id,
                    name: name.to_string(),
                    instructions: vec![format!("Do {name}")],
                },
            );
            self
        }

        fn with_plan(mut self, id: u64, name: &str, item_list: &str) -> Self {
            self.plans.insert(
                id,
                Plan {
                    id,
                    name: name.to_string(),
                    item_list: item_list.to_string(),
                },
            );
            self
        }
    }

    impl PlanStore for MemoryCatalog {
        fn get_plan(&self, plan_id: u64) -> Result<Option<Plan>> {
            Ok(self.plans.get(&plan_id).cloned())
        }

        fn get_exercise(&self, exercise_id: u64) -> Result<Option<Exercise>> {
            Ok(self.exercises.get(&exercise_id).cloned())
        }
    }

    fn step_names(resolution: &Resolution) -> Vec<&str> {
        resolution
            .plan
            .steps
            .iter()
            .map(|s| s.name.as_str())
            .collect()
    }

    #[test]
    fn test_expansion_path_enter_and_leave() {
        let mut path = ExpansionPath::rooted_at(1);
        assert!(path.contains(1));
        assert!(!path.enter(1));
        assert!(path.enter(2));
        assert_eq!(path.len(), 2);
        path.leave(2);
        assert!(!path.contains(2));
        assert!(path.enter(2));
    }

    #[test]
    fn test_resolve_example_plan() {
        let catalog = MemoryCatalog::default()
            .with_exercise(1, "Squats")
            .with_exercise(3, "Lunges")
            .with_plan(1, "Warmup", "E1,-1,P2")
            .with_plan(2, "Legs", "E3");

        let resolution = resolve(&catalog, 1).expect("Failed to resolve plan");

        assert_eq!(resolution.plan.name, "Warmup");
        assert_eq!(resolution.plan.source_plan_id, 1);
        assert_eq!(step_names(&resolution), vec!["Squats", BREAK_NAME, "Lunges"]);
        assert_eq!(resolution.plan.steps[1].kind, StepKind::Break);
        assert!(resolution.warnings.is_empty());
    }

    #[test]
    fn test_flat_plan_keeps_order_and_skips_missing_exercises() {
        let catalog = MemoryCatalog::default()
            .with_exercise(1, "Pushups")
            .with_exercise(2, "Plank")
            .with_exercise(4, "Bridges")
            .with_plan(10, "Flat", "4,1,99,2");

        let resolution = resolve(&catalog, 10).expect("Failed to resolve plan");

        assert_eq!(step_names(&resolution), vec!["Bridges", "Pushups", "Plank"]);
        assert_eq!(
            resolution.warnings,
            vec![ResolveWarning::MissingExercise {
                plan_id: 10,
                exercise_id: 99
            }]
        );
        assert!(resolution.plan.steps.iter().all(|s| s.duration_minutes == 1));
    }

    #[test]
    fn test_break_maps_to_fixed_step_in_any_position() {
        let catalog = MemoryCatalog::default()
            .with_exercise(1, "Squats")
            .with_plan(1, "Breaks", "-1,1,-1,-1");

        let resolution = resolve(&catalog, 1).expect("Failed to resolve plan");
        let kinds: Vec<StepKind> = resolution.plan.steps.iter().map(|s| s.kind).collect();

        assert_eq!(
            kinds,
            vec![StepKind::Break, StepKind::Exercise, StepKind::Break, StepKind::Break]
        );
        for step in resolution.plan.steps.iter().filter(|s| s.kind == StepKind::Break) {
            assert_eq!(step.duration_minutes, 1);
            assert_eq!(step.name, BREAK_NAME);
        }
    }

    #[test]
    fn test_two_plan_cycle_terminates() {
        let catalog = MemoryCatalog::default()
            .with_exercise(1, "Squats")
            .with_exercise(2, "Lunges")
            .with_plan(1, "A", "1,P2")
            .with_plan(2, "B", "2,P1");

        let resolution = resolve(&catalog, 1).expect("Failed to resolve plan");

        assert_eq!(step_names(&resolution), vec!["Squats", "Lunges"]);
        assert_eq!(
            resolution.warnings,
            vec![ResolveWarning::CycleDetected {
                plan_id: 2,
                nested_plan_id: 1
            }]
        );
    }

    #[test]
    fn test_self_reference_is_skipped() {
        let catalog = MemoryCatalog::default()
            .with_exercise(1, "Squats")
            .with_plan(5, "Loop", "1,P5,1");

        let resolution = resolve(&catalog, 5).expect("Failed to resolve plan");

        assert_eq!(step_names(&resolution), vec!["Squats", "Squats"]);
        assert_eq!(resolution.warnings.len(), 1);
    }

    #[test]
    fn test_same_plan_on_sibling_branches_expands_twice() {
        let catalog = MemoryCatalog::default()
            .with_exercise(1, "Squats")
            .with_exercise(2, "Plank")
            .with_plan(1, "Root", "P2,-1,P2")
            .with_plan(2, "Core", "2,1");

        let resolution = resolve(&catalog, 1).expect("Failed to resolve plan");

        assert_eq!(
            step_names(&resolution),
            vec!["Plank", "Squats", BREAK_NAME, "Plank", "Squats"]
        );
        assert!(resolution.warnings.is_empty());
    }

    #[test]
    fn test_deep_nesting_is_spliced_pre_order() {
        let catalog = MemoryCatalog::default()
            .with_exercise(1, "One")
            .with_exercise(2, "Two")
            .with_exercise(3, "Three")
            .with_exercise(4, "Four")
            .with_plan(1, "Outer", "1,P2,4")
            .with_plan(2, "Middle", "2,P3")
            .with_plan(3, "Inner", "3,P1,P2");

        let resolution = resolve(&catalog, 1).expect("Failed to resolve plan");

        assert_eq!(step_names(&resolution), vec!["One", "Two", "Three", "Four"]);
        assert_eq!(resolution.warnings.len(), 2);
        assert!(resolution
            .warnings
            .iter()
            .all(|w| matches!(w, ResolveWarning::CycleDetected { plan_id: 3, .. })));
    }

    #[test]
    fn test_malformed_tokens_and_missing_plans_are_warnings() {
        let catalog = MemoryCatalog::default()
            .with_exercise(1, "Squats")
            .with_plan(1, "Messy", "1,abc,P42,,P,1");

        let resolution = resolve(&catalog, 1).expect("Failed to resolve plan");

        assert_eq!(step_names(&resolution), vec!["Squats", "Squats"]);
        assert_eq!(
            resolution.warnings,
            vec![
                ResolveWarning::MalformedToken {
                    plan_id: 1,
                    token: "abc".to_string()
                },
                ResolveWarning::MissingPlan {
                    plan_id: 1,
                    nested_plan_id: 42
                },
                ResolveWarning::MalformedToken {
                    plan_id: 1,
                    token: String::new()
                },
                ResolveWarning::MalformedToken {
                    plan_id: 1,
                    token: "P".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_missing_root_plan_is_fatal() {
        let catalog = MemoryCatalog::default();
        let err = resolve(&catalog, 7).unwrap_err();
        assert!(matches!(err, TrackerError::PlanNotFound { id: 7 }));
    }

    #[test]
    fn test_plan_with_only_missing_items_resolves_empty() {
        let catalog = MemoryCatalog::default().with_plan(1, "Ghost", "8,9");

        let resolution = resolve(&catalog, 1).expect("Failed to resolve plan");

        assert!(resolution.plan.is_empty());
        assert_eq!(resolution.warnings.len(), 2);
    }
}
