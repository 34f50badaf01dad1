//! Benchmark orchestration: every solver against every instance.

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::Problem;

use super::config::BenchmarkConfig;
use super::runner::{run_solver, SolverOutcome, SolverRun};
use super::solver::discover_solvers;

/// One cell of the benchmark matrix.
#[derive(Debug, Clone)]
pub struct RunRecord {
    /// Instance file name.
    pub instance: String,
    /// Solver file name.
    pub solver: String,
    /// Outcome and timing.
    pub run: SolverRun,
}

/// Runs every discovered solver against every instance and collects the
/// result matrix. Progress is reported on the terminal as the sweep runs.
///
/// Instances that fail to parse are reported and skipped; the sweep
/// continues with the next instance.
pub fn run_benchmarks(config: &BenchmarkConfig) -> Result<Vec<RunRecord>> {
    fs::create_dir_all(&config.solutions_dir)
        .with_context(|| format!("creating {}", config.solutions_dir.display()))?;
    fs::create_dir_all(&config.results_dir)
        .with_context(|| format!("creating {}", config.results_dir.display()))?;

    let solvers = discover_solvers(&config.solvers_dir)?;
    let instances = list_instances(&config.instances_dir)?;

    println!(
        "{}",
        format!(
            "benchmarking {} solver(s) on {} instance(s)",
            solvers.len(),
            instances.len()
        )
        .bold()
    );

    let mut records = Vec::new();
    for (index, instance_path) in instances.iter().enumerate() {
        let instance_name = file_name(instance_path);
        println!(
            "{}",
            format!(
                "[{}/{}] {}",
                index + 1,
                instances.len(),
                instance_name
            )
            .bold()
        );

        let problem = match load_instance(instance_path) {
            Ok(problem) => problem,
            Err(err) => {
                println!("  {} {err:#}", "skipped:".yellow());
                continue;
            }
        };
        let time_limit = config.time_limit_for(Some(problem.task_count()));

        for solver_path in &solvers {
            let solver_name = file_name(solver_path);
            let solution_out = config
                .solutions_dir
                .join(format!("out_{solver_name}_{instance_name}"));

            let run = run_solver(
                solver_path,
                &problem,
                instance_path,
                &solution_out,
                time_limit,
            )?;
            print_status(&solver_name, &run);
            records.push(RunRecord {
                instance: instance_name.clone(),
                solver: solver_name,
                run,
            });
        }
    }

    Ok(records)
}

fn print_status(solver: &str, run: &SolverRun) {
    let elapsed = run.elapsed.as_secs_f64();
    match &run.outcome {
        SolverOutcome::Valid { makespan } => println!(
            "  {solver}: {} Cmax {makespan} in {elapsed:.4}s",
            "OK".green()
        ),
        SolverOutcome::Invalid { detail } => println!(
            "  {solver}: {} ({detail}) in {elapsed:.4}s",
            "INVALID".red()
        ),
        SolverOutcome::Failed { code, detail } => {
            let code = code.map_or_else(|| "signal".to_string(), |c| c.to_string());
            println!("  {solver}: {} (exit {code}) {detail}", "ERROR".red())
        }
        SolverOutcome::TimedOut => println!(
            "  {solver}: {} after {elapsed:.4}s",
            "TIMEOUT".yellow()
        ),
    }
}

fn load_instance(path: &Path) -> Result<Problem> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    text.parse()
        .with_context(|| format!("parsing {}", path.display()))
}

/// Lists instance files (`in_*.txt`), sorted by name.
fn list_instances(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("reading instances directory {}", dir.display()))?;

    let mut instances = Vec::new();
    for entry in entries {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if entry.file_type()?.is_file() && name.starts_with("in_") && name.ends_with(".txt") {
            instances.push(entry.path());
        }
    }
    instances.sort();
    Ok(instances)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
