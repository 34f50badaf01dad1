//! File-level validation flow: the path the CLI wraps.

use std::fs;
use tempfile::TempDir;

use batchval::models::{Problem, Solution};
use batchval::validation::{self, ValidationErrorKind};
use batchval::Error;

fn load(dir: &TempDir, name: &str, contents: &str) -> String {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    fs::read_to_string(&path).unwrap()
}

#[test]
fn test_valid_pair_round_trip() {
    let dir = TempDir::new().unwrap();
    let instance = load(&dir, "in_1_2.txt", "2 5 2\n3 0\n4 0\n");
    let solution = load(&dir, "out_2.txt", "7\n1\n1 2\n");

    let problem: Problem = instance.parse().unwrap();
    let solution: Solution = solution.parse().unwrap();

    assert!(validation::validate(&problem, &solution).is_ok());
    assert_eq!(validation::simulate(&problem, &solution.batches), 7);
}

#[test]
fn test_rejected_pair_reports_every_finding() {
    let dir = TempDir::new().unwrap();
    let instance = load(&dir, "in_1_2.txt", "2 5 2\n3 0\n4 0\n");
    // Wrong batch count claim, duplicate id, missing task 2, understated claim.
    let solution = load(&dir, "out_2.txt", "1\n3\n1 1\n");

    let problem: Problem = instance.parse().unwrap();
    let solution: Solution = solution.parse().unwrap();

    let errors = validation::validate(&problem, &solution).unwrap_err();
    let kinds: Vec<_> = errors.iter().map(|e| e.kind.clone()).collect();
    assert!(kinds.contains(&ValidationErrorKind::BatchCountMismatch));
    assert!(kinds.contains(&ValidationErrorKind::DuplicateTaskId));
    assert!(kinds.contains(&ValidationErrorKind::IncompleteCoverage));
    assert!(kinds.contains(&ValidationErrorKind::MakespanUnderstated));
}

#[test]
fn test_truncated_solution_is_a_content_failure() {
    let dir = TempDir::new().unwrap();
    let instance = load(&dir, "in_1_2.txt", "2 5 2\n3 0\n4 0\n");
    let solution = load(&dir, "out_2.txt", "42\n");

    let problem: Problem = instance.parse().unwrap();
    // The lenient parser degrades short input to the empty solution.
    let solution: Solution = solution.parse().unwrap();
    assert_eq!(solution, Solution::empty());

    let errors = validation::validate(&problem, &solution).unwrap_err();
    assert!(errors
        .iter()
        .any(|e| e.kind == ValidationErrorKind::IncompleteCoverage));
}

#[test]
fn test_malformed_instance_is_a_fault() {
    let dir = TempDir::new().unwrap();
    let instance = load(&dir, "in_1_2.txt", "2 5\n3 0\n4 0\n");
    let err = instance.parse::<Problem>().unwrap_err();
    assert!(matches!(err, Error::MalformedInstance(_)));
}

#[test]
fn test_malformed_solution_is_a_fault() {
    let dir = TempDir::new().unwrap();
    let solution = load(&dir, "out_2.txt", "7\n1\n1 two\n");
    let err = solution.parse::<Solution>().unwrap_err();
    assert!(matches!(err, Error::MalformedSolution(_)));
}
