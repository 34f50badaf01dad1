//! Solution validation and timeline simulation.
//!
//! Checks a candidate [`Solution`] against its [`Problem`] and replays the
//! batch timeline to compute the true makespan. Detects:
//! - Batch-count mismatches against the claimed count
//! - Invalid (out-of-range) and duplicate task ids
//! - Incomplete coverage of the task set
//! - Batches over the capacity limit
//! - Claimed makespans below the computed one
//!
//! All findings for one solution are accumulated into a single report;
//! nothing short-circuits. The timeline is replayed even for structurally
//! broken solutions so that a best-effort cost is always available.
//!
//! # Timeline
//!
//! Batches run in the given order on one machine. A batch takes the longest
//! processing time among its tasks, cannot start before the latest ready
//! time among its tasks, and is separated from its predecessor by the
//! instance's reload time. No reload is charged before the first batch.
//! Batches contributing no tasks are skipped: they charge no reload and do
//! not count as the first batch.
//!
//! # Reference
//! Potts & Kovalyov (2000), "Scheduling with batching: A review"

use std::collections::HashSet;

use crate::models::{Batch, Problem, Solution};

/// Cost reported for structurally invalid solutions in compute mode.
///
/// Chosen so that minimizing callers can rank infeasible candidates
/// uniformly behind every feasible one.
pub const INFEASIBLE: i64 = i64::MAX;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation finding.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation findings.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ValidationErrorKind {
    /// The listed batch count differs from the claimed one.
    BatchCountMismatch,
    /// A task id lies outside `1..=n`.
    InvalidTaskId,
    /// A task id appears more than once across the batch sequence.
    DuplicateTaskId,
    /// The scheduled ids do not cover `1..=n` exactly.
    IncompleteCoverage,
    /// A batch holds more tasks than the capacity allows.
    BatchOverCapacity,
    /// The claimed makespan is below the computed one.
    MakespanUnderstated,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Listed batch count differs from the claimed one.
    pub fn batch_count_mismatch(listed: usize, claimed: i64) -> Self {
        Self::new(
            ValidationErrorKind::BatchCountMismatch,
            format!("solution lists {listed} batches but claims {claimed}"),
        )
    }

    /// Task id outside `1..=n`.
    pub fn invalid_task(task_id: i64) -> Self {
        Self::new(
            ValidationErrorKind::InvalidTaskId,
            format!("invalid task id {task_id}"),
        )
    }

    /// Task id scheduled more than once.
    pub fn duplicate_task(task_id: i64) -> Self {
        Self::new(
            ValidationErrorKind::DuplicateTaskId,
            format!("duplicate task id {task_id}"),
        )
    }

    /// Scheduled ids do not cover the task set exactly.
    pub fn incomplete_coverage(task_count: usize) -> Self {
        Self::new(
            ValidationErrorKind::IncompleteCoverage,
            format!("scheduled tasks do not cover 1..={task_count} exactly"),
        )
    }

    /// Batch over the capacity limit. The message carries the batch's task
    /// list for diagnosability.
    pub fn over_capacity(batch: &Batch, capacity: usize) -> Self {
        let ids = batch
            .tasks
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        Self::new(
            ValidationErrorKind::BatchOverCapacity,
            format!(
                "batch {{{ids}}} has {} tasks, capacity is {capacity}",
                batch.len()
            ),
        )
    }

    /// Claimed makespan below the computed one.
    pub fn makespan_understated(claimed: i64, computed: i64) -> Self {
        Self::new(
            ValidationErrorKind::MakespanUnderstated,
            format!("claimed makespan {claimed} is below the computed makespan {computed}"),
        )
    }
}

/// Validates a solution strictly.
///
/// Runs every structural check, replays the timeline, and checks the
/// claimed makespan against the computed one. The makespan check is a
/// lower-bound guarantee: a claim *above* the true makespan is tolerated,
/// a claim below it is not.
///
/// # Returns
/// `Ok(())` when the solution is a valid partition and its claim holds,
/// `Err(errors)` with every detected finding otherwise. Identical inputs
/// yield identical error lists.
pub fn validate(problem: &Problem, solution: &Solution) -> ValidationResult {
    let mut errors = structural_errors(problem, solution);

    let computed = simulate(problem, &solution.batches);
    if solution.claimed_makespan < computed {
        errors.push(ValidationError::makespan_understated(
            solution.claimed_makespan,
            computed,
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Evaluates a solution's cost for ranking.
///
/// Returns the computed makespan when the solution is structurally valid,
/// and [`INFEASIBLE`] otherwise. The claimed makespan plays no role here;
/// callers that need the claim checked use [`validate`].
pub fn evaluate(problem: &Problem, solution: &Solution) -> i64 {
    let computed = simulate(problem, &solution.batches);
    if structural_errors(problem, solution).is_empty() {
        computed
    } else {
        INFEASIBLE
    }
}

/// Replays the batch timeline and returns the completion time of the last
/// effective batch (0 when there is none).
///
/// Best-effort by design: ids that do not resolve to a task of `problem`
/// are ignored, and a batch left without tasks is skipped, so the replay
/// never fails even on structurally broken sequences.
pub fn simulate(problem: &Problem, batches: &[Batch]) -> i64 {
    let mut completion: i64 = 0;
    let mut first = true;

    for batch in batches {
        let mut slowest: Option<i64> = None;
        let mut ready: i64 = 0;
        for task in batch.tasks.iter().filter_map(|&id| problem.task(id)) {
            slowest = Some(slowest.unwrap_or(task.processing_time).max(task.processing_time));
            ready = ready.max(task.ready_time);
        }

        // A batch contributing no tasks has no timeline effect.
        let Some(processing_time) = slowest else {
            continue;
        };

        let reload = if first { 0 } else { problem.reload_time };
        let start = ready.max(completion + reload);
        completion = start + processing_time;
        first = false;
    }

    completion
}

/// Runs the structural checks: batch count, id validity and duplication,
/// batch capacity, coverage of `1..=n`.
fn structural_errors(problem: &Problem, solution: &Solution) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let listed = solution.batch_count();
    if listed as i64 != solution.claimed_batch_count {
        errors.push(ValidationError::batch_count_mismatch(
            listed,
            solution.claimed_batch_count,
        ));
    }

    let mut seen: HashSet<i64> = HashSet::new();
    for batch in &solution.batches {
        for &task_id in &batch.tasks {
            if !problem.contains(task_id) {
                errors.push(ValidationError::invalid_task(task_id));
            }
            if !seen.insert(task_id) {
                errors.push(ValidationError::duplicate_task(task_id));
            }
        }
        if batch.len() > problem.batch_capacity {
            errors.push(ValidationError::over_capacity(batch, problem.batch_capacity));
        }
    }

    let task_count = problem.task_count();
    let covered = seen.len() == task_count && (1..=task_count as i64).all(|id| seen.contains(&id));
    if !covered {
        errors.push(ValidationError::incomplete_coverage(task_count));
    }

    errors
}
