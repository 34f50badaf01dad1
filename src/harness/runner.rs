//! Timed solver subprocess execution.
//!
//! A solver is invoked as `<solver> <instance> <solution-out> <limit-secs>`
//! and may run up to three times its announced limit before being killed.
//! The subprocess result is an explicit three-way outcome (completed,
//! non-zero exit, timed out); completed runs are then judged by validating
//! the solution file they produced.

use anyhow::{Context, Result};
use std::path::Path;
use std::process::{Command, Output, Stdio};
use std::time::{Duration, Instant};

use crate::models::{Problem, Solution};
use crate::validation;

/// A solver gets its announced limit on the command line and is killed
/// only after this many times that much wall clock.
const KILL_GRACE_FACTOR: u32 = 3;

const POLL_INTERVAL: Duration = Duration::from_millis(25);

/// Raw result of one subprocess invocation.
#[derive(Debug)]
pub enum ExecOutcome {
    /// The process exited on its own.
    Completed(Output),
    /// The process outlived its deadline and was killed.
    TimedOut,
}

/// Reporting status of one solver run, after judging its output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverOutcome {
    /// Exit 0 and the produced solution passed strict validation.
    Valid {
        /// Computed makespan of the produced schedule.
        makespan: i64,
    },
    /// Exit 0 but the produced solution was rejected (or unreadable).
    Invalid {
        /// Concatenated rejection reasons.
        detail: String,
    },
    /// Non-zero exit.
    Failed {
        /// Exit code, if the process was not killed by a signal.
        code: Option<i32>,
        /// Captured stderr, newline-flattened.
        detail: String,
    },
    /// Killed after the grace deadline.
    TimedOut,
}

/// One solver × instance run.
#[derive(Debug, Clone)]
pub struct SolverRun {
    /// Reporting status.
    pub outcome: SolverOutcome,
    /// Wall-clock time; timeouts are recorded at the announced limit.
    pub elapsed: Duration,
}

/// Runs one solver against one instance and judges the produced solution.
pub fn run_solver(
    solver: &Path,
    problem: &Problem,
    instance: &Path,
    solution_out: &Path,
    time_limit: Duration,
) -> Result<SolverRun> {
    let mut command = Command::new(solver);
    command
        .arg(instance)
        .arg(solution_out)
        .arg(time_limit.as_secs().to_string())
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::piped());

    let started = Instant::now();
    let exec = run_with_deadline(command, time_limit * KILL_GRACE_FACTOR)
        .with_context(|| format!("running solver {}", solver.display()))?;

    let run = match exec {
        ExecOutcome::TimedOut => SolverRun {
            outcome: SolverOutcome::TimedOut,
            elapsed: time_limit,
        },
        ExecOutcome::Completed(output) if !output.status.success() => SolverRun {
            outcome: SolverOutcome::Failed {
                code: output.status.code(),
                detail: String::from_utf8_lossy(&output.stderr)
                    .trim()
                    .replace('\n', " "),
            },
            elapsed: started.elapsed(),
        },
        ExecOutcome::Completed(_) => SolverRun {
            outcome: judge_solution(problem, solution_out),
            elapsed: started.elapsed(),
        },
    };
    Ok(run)
}

/// Judges a produced solution file: read, parse, validate strictly, and
/// report the computed makespan. Read and parse failures become `Invalid`
/// cells, never harness errors, so one broken solver cannot abort a sweep.
fn judge_solution(problem: &Problem, solution_path: &Path) -> SolverOutcome {
    let text = match std::fs::read_to_string(solution_path) {
        Ok(text) => text,
        Err(err) => {
            return SolverOutcome::Invalid {
                detail: format!("unreadable solution file: {err}"),
            }
        }
    };
    let solution: Solution = match text.parse() {
        Ok(solution) => solution,
        Err(err) => {
            return SolverOutcome::Invalid {
                detail: err.to_string(),
            }
        }
    };
    match validation::validate(problem, &solution) {
        Ok(()) => SolverOutcome::Valid {
            makespan: validation::simulate(problem, &solution.batches),
        },
        Err(errors) => SolverOutcome::Invalid {
            detail: errors
                .iter()
                .map(|e| e.message.as_str())
                .collect::<Vec<_>>()
                .join("; "),
        },
    }
}

/// Spawns the command and waits until it exits or `deadline` passes,
/// killing the process on expiry.
pub fn run_with_deadline(mut command: Command, deadline: Duration) -> Result<ExecOutcome> {
    let started = Instant::now();
    let mut child = command.spawn()?;

    loop {
        if child.try_wait()?.is_some() {
            return Ok(ExecOutcome::Completed(child.wait_with_output()?));
        }
        if started.elapsed() >= deadline {
            child.kill().ok();
            child.wait()?;
            return Ok(ExecOutcome::TimedOut);
        }
        std::thread::sleep(POLL_INTERVAL);
    }
}
