//! Baseline cross-validation of example solutions.
//!
//! For each solution file named `out_<SIZE><SUFFIX>.txt` (suffix a run of
//! `A`-`E`), validates it against every instance file ending `_<SIZE>.txt`.
//! An outer-join style sweep: one solution is checked against all instances
//! of its size, which makes gaps in either directory visible.

use anyhow::{Context, Result};
use colored::Colorize;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::{Problem, Solution};
use crate::validation;

/// Verdict of one solution × instance pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BaselineStatus {
    /// Valid, with the computed makespan.
    Ok {
        /// Computed makespan of the schedule.
        makespan: i64,
    },
    /// Rejected by the validator.
    Rejected {
        /// Concatenated rejection reasons.
        detail: String,
    },
    /// Either file could not be read or parsed.
    Unreadable {
        /// The fault description.
        detail: String,
    },
}

/// One checked solution × instance pair.
#[derive(Debug, Clone)]
pub struct BaselineRecord {
    /// Solution file name.
    pub solution: String,
    /// Instance file name.
    pub instance: String,
    /// Verdict.
    pub status: BaselineStatus,
}

/// Runs the sweep and returns one record per checked pair, printing a
/// status line for each as it goes.
pub fn run_baseline(instances_dir: &Path, solutions_dir: &Path) -> Result<Vec<BaselineRecord>> {
    let pattern =
        Regex::new(r"^out_(\d+)[A-E]*\.txt$").context("compiling baseline file pattern")?;

    let solutions = list_files(solutions_dir)?;
    let instances = list_files(instances_dir)?;
    let mut records = Vec::new();

    for solution_path in &solutions {
        let solution_name = file_name(solution_path);
        let Some(captures) = pattern.captures(&solution_name) else {
            continue;
        };
        let size = &captures[1];
        let suffix = format!("_{size}.txt");

        let matching: Vec<&PathBuf> = instances
            .iter()
            .filter(|path| file_name(path).ends_with(&suffix))
            .collect();

        println!("{}", format!("checking {solution_name}").bold());
        if matching.is_empty() {
            println!("  {} no instances of size {size}", "warning:".yellow());
            continue;
        }

        for instance_path in matching {
            let instance_name = file_name(instance_path);
            let status = check_pair(instance_path, solution_path);
            print_status(&instance_name, &status);
            records.push(BaselineRecord {
                solution: solution_name.clone(),
                instance: instance_name,
                status,
            });
        }
    }

    Ok(records)
}

fn check_pair(instance_path: &Path, solution_path: &Path) -> BaselineStatus {
    let pair = (|| -> crate::error::Result<(Problem, Solution)> {
        let problem = fs::read_to_string(instance_path)?.parse()?;
        let solution = fs::read_to_string(solution_path)?.parse()?;
        Ok((problem, solution))
    })();
    let (problem, solution) = match pair {
        Ok(pair) => pair,
        Err(err) => {
            return BaselineStatus::Unreadable {
                detail: err.to_string(),
            }
        }
    };

    match validation::validate(&problem, &solution) {
        Ok(()) => BaselineStatus::Ok {
            makespan: validation::simulate(&problem, &solution.batches),
        },
        Err(errors) => BaselineStatus::Rejected {
            detail: errors
                .iter()
                .map(|e| e.message.as_str())
                .collect::<Vec<_>>()
                .join("; "),
        },
    }
}

fn print_status(instance: &str, status: &BaselineStatus) {
    match status {
        BaselineStatus::Ok { makespan } => {
            println!("  {instance}: {} Cmax {makespan}", "OK".green())
        }
        BaselineStatus::Rejected { detail } => {
            println!("  {instance}: {} {detail}", "FAIL".red())
        }
        BaselineStatus::Unreadable { detail } => {
            println!("  {instance}: {} {detail}", "FAULT".red())
        }
    }
}

fn list_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("reading directory {}", dir.display()))?;
    let mut files = Vec::new();
    for entry in entries {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            files.push(entry.path());
        }
    }
    files.sort();
    Ok(files)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_baseline_pairs_by_size() {
        let root = TempDir::new().unwrap();
        let instances = root.path().join("instances");
        let solutions = root.path().join("solutions");
        fs::create_dir_all(&instances).unwrap();
        fs::create_dir_all(&solutions).unwrap();

        // Two instances of size 2, one of size 3.
        fs::write(instances.join("in_a_2.txt"), "2 5 2\n3 0\n4 0\n").unwrap();
        fs::write(instances.join("in_b_2.txt"), "2 1 1\n1 0\n1 0\n").unwrap();
        fs::write(instances.join("in_a_3.txt"), "3 0 3\n1 0\n1 0\n1 0\n").unwrap();

        // Valid against in_a_2 (Cmax 7) but over capacity for in_b_2.
        fs::write(solutions.join("out_2.txt"), "7\n1\n1 2\n").unwrap();
        // Not matching the baseline pattern: ignored.
        fs::write(solutions.join("notes.txt"), "").unwrap();

        let records = run_baseline(&instances, &solutions).unwrap();
        assert_eq!(records.len(), 2);

        assert_eq!(records[0].instance, "in_a_2.txt");
        assert_eq!(records[0].status, BaselineStatus::Ok { makespan: 7 });

        assert_eq!(records[1].instance, "in_b_2.txt");
        assert!(matches!(
            records[1].status,
            BaselineStatus::Rejected { .. }
        ));
    }

    #[test]
    fn test_baseline_suffixed_solutions_match_same_size() {
        let root = TempDir::new().unwrap();
        let instances = root.path().join("instances");
        let solutions = root.path().join("solutions");
        fs::create_dir_all(&instances).unwrap();
        fs::create_dir_all(&solutions).unwrap();

        fs::write(instances.join("in_a_2.txt"), "2 5 2\n3 0\n4 0\n").unwrap();
        fs::write(solutions.join("out_2A.txt"), "12\n2\n1\n2\n").unwrap();

        let records = run_baseline(&instances, &solutions).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].solution, "out_2A.txt");
        assert_eq!(records[0].status, BaselineStatus::Ok { makespan: 12 });
    }

    #[test]
    fn test_baseline_unreadable_instance() {
        let root = TempDir::new().unwrap();
        let instances = root.path().join("instances");
        let solutions = root.path().join("solutions");
        fs::create_dir_all(&instances).unwrap();
        fs::create_dir_all(&solutions).unwrap();

        fs::write(instances.join("in_a_2.txt"), "not an instance\n").unwrap();
        fs::write(solutions.join("out_2.txt"), "7\n1\n1 2\n").unwrap();

        let records = run_baseline(&instances, &solutions).unwrap();
        assert_eq!(records.len(), 1);
        assert!(matches!(
            records[0].status,
            BaselineStatus::Unreadable { .. }
        ));
    }
}
