//! Solver benchmarking harness.
//!
//! Discovers solver executables, runs each against each instance as a
//! subprocess under a time budget, judges the produced solutions with the
//! validation engine, and writes tabular CSV reports. A separate baseline
//! sweep cross-validates example solutions against every instance of the
//! matching size.
//!
//! The harness is glue around the core: it owns all I/O, subprocess and
//! timeout concerns, while every verdict comes from [`crate::validation`].

mod baseline;
mod bench;
mod config;
mod report;
mod runner;
mod solver;

pub use baseline::{run_baseline, BaselineRecord, BaselineStatus};
pub use bench::{run_benchmarks, RunRecord};
pub use config::BenchmarkConfig;
pub use report::{write_reports, CMAX_REPORT, TIME_REPORT};
pub use runner::{run_solver, run_with_deadline, ExecOutcome, SolverOutcome, SolverRun};
pub use solver::discover_solvers;
