//! Benchmark harness configuration.

use std::path::PathBuf;
use std::time::Duration;

/// Directory layout and timing policy for a benchmark run.
///
/// Every recognized option is an explicit field; nothing is read from
/// globals or the environment. The CLI maps its flags onto this struct.
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    /// Directory holding solver executables.
    pub solvers_dir: PathBuf,
    /// Directory holding instance files (`in_*.txt`).
    pub instances_dir: PathBuf,
    /// Directory receiving solver-generated solution files.
    pub solutions_dir: PathBuf,
    /// Directory receiving the CSV reports.
    pub results_dir: PathBuf,
    /// Time limit handed to solvers when no per-instance limit applies.
    pub default_time_limit: Duration,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            solvers_dir: PathBuf::from("solvers"),
            instances_dir: PathBuf::from("instances"),
            solutions_dir: PathBuf::from("solutions"),
            results_dir: PathBuf::from("results"),
            default_time_limit: Duration::from_secs(5),
        }
    }
}

impl BenchmarkConfig {
    /// Creates a configuration with the default layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the solvers directory.
    pub fn with_solvers_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.solvers_dir = dir.into();
        self
    }

    /// Sets the instances directory.
    pub fn with_instances_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.instances_dir = dir.into();
        self
    }

    /// Sets the generated-solutions directory.
    pub fn with_solutions_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.solutions_dir = dir.into();
        self
    }

    /// Sets the results directory.
    pub fn with_results_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.results_dir = dir.into();
        self
    }

    /// Sets the default time limit.
    pub fn with_default_time_limit(mut self, limit: Duration) -> Self {
        self.default_time_limit = limit;
        self
    }

    /// Per-instance time-limit override rule.
    ///
    /// Grants one second per ten tasks; falls back to the default when the
    /// task count is unknown or the rule would grant zero.
    pub fn time_limit_for(&self, task_count: Option<usize>) -> Duration {
        match task_count {
            Some(n) if n >= 10 => Duration::from_secs((n / 10) as u64),
            _ => self.default_time_limit,
        }
    }
}
