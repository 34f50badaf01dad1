//! CLI entry point: validate schedules, benchmark solvers, run baselines.
//!
//! Exit status classes for `validate` (stable, consumed by tooling):
//! 0 valid, 1 rejected by validation, 2 usage error (clap), 3 unexpected
//! fault (unreadable or malformed input).

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use batchval::harness::{run_baseline, run_benchmarks, write_reports, BenchmarkConfig};
use batchval::models::{Problem, Solution};
use batchval::validation::{self, ValidationError};

const EXIT_OK: i32 = 0;
const EXIT_INVALID: i32 = 1;
const EXIT_FAULT: i32 = 3;

#[derive(Parser)]
#[command(name = "batchval")]
#[command(version)]
#[command(about = "Serial-batching schedule validator and solver benchmark", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a solution file against an instance file
    ///
    /// Prints the true makespan and exits 0 when the solution is valid.
    /// Prints every validation error to stderr and exits 1 when it is not.
    /// Unreadable or malformed files exit 3.
    Validate {
        /// Instance file
        instance: PathBuf,
        /// Solution file
        solution: PathBuf,
    },
    /// Run every solver against every instance and write CSV reports
    Bench {
        /// Directory holding solver executables
        #[arg(long, default_value = "solvers")]
        solvers_dir: PathBuf,
        /// Directory holding instance files (in_*.txt)
        #[arg(long, default_value = "instances")]
        instances_dir: PathBuf,
        /// Directory receiving solver-generated solution files
        #[arg(long, default_value = "solutions")]
        solutions_dir: PathBuf,
        /// Directory receiving the CSV reports
        #[arg(long, default_value = "results")]
        results_dir: PathBuf,
        /// Time limit in seconds when no per-instance limit applies
        #[arg(long, value_name = "SECS", default_value_t = 5)]
        time_limit: u64,
    },
    /// Validate example solutions against all instances of the same size
    Baseline {
        /// Directory holding instance files
        #[arg(long, default_value = "instances")]
        instances_dir: PathBuf,
        /// Directory holding example solution files (out_<SIZE>*.txt)
        #[arg(long, default_value = "solutions")]
        solutions_dir: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    let code = match cli.command {
        Commands::Validate { instance, solution } => cmd_validate(&instance, &solution),
        Commands::Bench {
            solvers_dir,
            instances_dir,
            solutions_dir,
            results_dir,
            time_limit,
        } => {
            let config = BenchmarkConfig::new()
                .with_solvers_dir(solvers_dir)
                .with_instances_dir(instances_dir)
                .with_solutions_dir(solutions_dir)
                .with_results_dir(results_dir)
                .with_default_time_limit(Duration::from_secs(time_limit));
            fault_on_error(cmd_bench(&config))
        }
        Commands::Baseline {
            instances_dir,
            solutions_dir,
        } => fault_on_error(cmd_baseline(&instances_dir, &solutions_dir)),
    };
    std::process::exit(code);
}

fn cmd_validate(instance: &Path, solution: &Path) -> i32 {
    match check_files(instance, solution) {
        Ok(Ok(makespan)) => {
            println!("{makespan}");
            EXIT_OK
        }
        Ok(Err(errors)) => {
            for error in &errors {
                eprintln!("{} {}", "error:".red().bold(), error.message);
            }
            EXIT_INVALID
        }
        Err(fault) => {
            eprintln!("{} {fault}", "unexpected error:".red().bold());
            EXIT_FAULT
        }
    }
}

/// Loads both files and validates. The outer result is the fault channel
/// (I/O, malformed input); the inner one is the validation verdict, with
/// the computed makespan on success.
fn check_files(
    instance: &Path,
    solution: &Path,
) -> batchval::Result<Result<i64, Vec<ValidationError>>> {
    let problem: Problem = fs::read_to_string(instance)?.parse()?;
    let solution: Solution = fs::read_to_string(solution)?.parse()?;

    Ok(match validation::validate(&problem, &solution) {
        Ok(()) => Ok(validation::simulate(&problem, &solution.batches)),
        Err(errors) => Err(errors),
    })
}

fn cmd_bench(config: &BenchmarkConfig) -> Result<()> {
    let records = run_benchmarks(config)?;
    write_reports(&config.results_dir, &records)?;
    println!(
        "{}",
        format!("reports written to {}", config.results_dir.display()).bold()
    );
    Ok(())
}

fn cmd_baseline(instances_dir: &Path, solutions_dir: &Path) -> Result<()> {
    run_baseline(instances_dir, solutions_dir)?;
    Ok(())
}

fn fault_on_error(result: Result<()>) -> i32 {
    match result {
        Ok(()) => EXIT_OK,
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            EXIT_FAULT
        }
    }
}
