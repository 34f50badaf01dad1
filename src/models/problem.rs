//! Problem instance model and parser.
//!
//! A problem is a set of tasks to be processed on a single batching machine:
//! each batch runs for the longest processing time among its tasks, cannot
//! start before the latest ready time among its tasks, and a fixed reload
//! time separates consecutive batches.
//!
//! # Text Format
//!
//! ```text
//! n s b
//! p_1 r_1
//! ...
//! p_n r_n
//! ```
//!
//! One record per line, whitespace-separated non-negative integers. The
//! header carries the task count `n`, the reload time `s`, and the batch
//! capacity `b`; record *i* after the header describes task *i* (1-based).
//!
//! # Reference
//! Potts & Kovalyov (2000), "Scheduling with batching: A review"

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::Error;

/// A task on the batching machine.
///
/// Tasks are identified positionally: the task with id `i` (1-based) is
/// stored at index `i - 1` of [`Problem::tasks`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Duration of the task (time units).
    pub processing_time: i64,
    /// Earliest time the task may begin.
    pub ready_time: i64,
}

impl Task {
    /// Creates a new task.
    pub fn new(processing_time: i64, ready_time: i64) -> Self {
        Self {
            processing_time,
            ready_time,
        }
    }
}

/// A batching problem instance.
///
/// Immutable once loaded; constructed from text via [`FromStr`] or directly
/// via [`Problem::new`] in tests and tooling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Problem {
    /// Reload time between consecutive batches (not charged before the first).
    pub reload_time: i64,
    /// Maximum number of tasks per batch.
    pub batch_capacity: usize,
    /// Tasks in input order; task id `i` is at index `i - 1`.
    pub tasks: Vec<Task>,
}

impl Problem {
    /// Creates a problem from its parts.
    pub fn new(reload_time: i64, batch_capacity: usize, tasks: Vec<Task>) -> Self {
        Self {
            reload_time,
            batch_capacity,
            tasks,
        }
    }

    /// Number of tasks (`n`).
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Whether `task_id` names a task of this instance (ids are 1-based).
    pub fn contains(&self, task_id: i64) -> bool {
        task_id >= 1 && task_id <= self.tasks.len() as i64
    }

    /// Looks up a task by its 1-based id.
    pub fn task(&self, task_id: i64) -> Option<&Task> {
        if self.contains(task_id) {
            self.tasks.get(task_id as usize - 1)
        } else {
            None
        }
    }
}

impl FromStr for Problem {
    type Err = Error;

    /// Parses an instance from its text format.
    ///
    /// Blank lines are skipped. Fails if the header is missing or does not
    /// have exactly three fields, if any task record does not have exactly
    /// two fields, if any token is not a parseable integer, or if the number
    /// of task records differs from the `n` announced in the header.
    fn from_str(input: &str) -> Result<Self, Error> {
        let mut records = input.lines().filter_map(|line| {
            let fields: Vec<&str> = line.split_whitespace().collect();
            (!fields.is_empty()).then_some(fields)
        });

        let header = records
            .next()
            .ok_or_else(|| Error::MalformedInstance("missing header record".into()))?;
        if header.len() != 3 {
            return Err(Error::MalformedInstance(format!(
                "header has {} fields, expected 3 (n s b)",
                header.len()
            )));
        }
        let task_count: usize = parse_field(header[0], "task count")?;
        let reload_time: i64 = parse_field(header[1], "reload time")?;
        let batch_capacity: usize = parse_field(header[2], "batch capacity")?;

        let mut tasks = Vec::new();
        for fields in records {
            if fields.len() != 2 {
                return Err(Error::MalformedInstance(format!(
                    "task record {} has {} fields, expected 2 (p r)",
                    tasks.len() + 1,
                    fields.len()
                )));
            }
            let processing_time: i64 = parse_field(fields[0], "processing time")?;
            let ready_time: i64 = parse_field(fields[1], "ready time")?;
            tasks.push(Task::new(processing_time, ready_time));
        }

        if tasks.len() != task_count {
            return Err(Error::MalformedInstance(format!(
                "header announces {} tasks but {} task records follow",
                task_count,
                tasks.len()
            )));
        }

        Ok(Problem::new(reload_time, batch_capacity, tasks))
    }
}

fn parse_field<T: FromStr>(token: &str, what: &str) -> Result<T, Error> {
    token
        .parse()
        .map_err(|_| Error::MalformedInstance(format!("{what} token {token:?} is not an integer")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_instance() {
        let problem: Problem = "3 5 2\n3 0\n4 1\n2 7\n".parse().unwrap();
        assert_eq!(problem.task_count(), 3);
        assert_eq!(problem.reload_time, 5);
        assert_eq!(problem.batch_capacity, 2);
        assert_eq!(problem.tasks[0], Task::new(3, 0));
        assert_eq!(problem.tasks[2], Task::new(2, 7));
    }

    #[test]
    fn test_parse_skips_blank_lines() {
        let problem: Problem = "\n2 1 2\n\n3 0\n\n4 0\n\n".parse().unwrap();
        assert_eq!(problem.task_count(), 2);
    }

    #[test]
    fn test_task_lookup() {
        let problem: Problem = "2 0 1\n3 0\n4 9\n".parse().unwrap();
        assert!(problem.contains(1));
        assert!(problem.contains(2));
        assert!(!problem.contains(0));
        assert!(!problem.contains(3));
        assert!(!problem.contains(-1));
        assert_eq!(problem.task(2), Some(&Task::new(4, 9)));
        assert_eq!(problem.task(3), None);
    }

    #[test]
    fn test_parse_empty_input() {
        assert!("".parse::<Problem>().is_err());
        assert!("   \n\n".parse::<Problem>().is_err());
    }

    #[test]
    fn test_parse_header_arity() {
        assert!("3 5\n".parse::<Problem>().is_err());
        assert!("3 5 2 9\n1 0\n1 0\n1 0\n".parse::<Problem>().is_err());
    }

    #[test]
    fn test_parse_task_record_arity() {
        assert!("1 5 2\n3\n".parse::<Problem>().is_err());
        assert!("1 5 2\n3 0 7\n".parse::<Problem>().is_err());
    }

    #[test]
    fn test_parse_non_integer_token() {
        assert!("x 5 2\n".parse::<Problem>().is_err());
        assert!("1 5 2\n3 y\n".parse::<Problem>().is_err());
    }

    #[test]
    fn test_parse_record_count_mismatch() {
        // Fewer records than announced.
        assert!("3 5 2\n3 0\n4 1\n".parse::<Problem>().is_err());
        // More records than announced.
        assert!("1 5 2\n3 0\n4 1\n".parse::<Problem>().is_err());
    }

    #[test]
    fn test_zero_tasks() {
        let problem: Problem = "0 5 2\n".parse().unwrap();
        assert_eq!(problem.task_count(), 0);
        assert!(!problem.contains(1));
    }
}
