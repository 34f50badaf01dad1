//! Candidate solution model and parser.
//!
//! A solution claims a makespan and a batch count, and lists an ordered
//! sequence of batches, each holding the ids of the tasks it processes.
//! Claims are exactly that — claims. Nothing here is trusted until the
//! validation engine has checked it against a [`Problem`](super::Problem).
//!
//! # Text Format
//!
//! ```text
//! cmax
//! bcnt
//! <task ids of batch 1, space-separated>
//! <task ids of batch 2, space-separated>
//! ...
//! ```
//!
//! Blank lines are skipped entirely and do not produce batches: a batch
//! exists only where at least one task-id token exists. Only the first token
//! of the two claim records is read.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::Error;

/// One batch of a candidate schedule: the ids of the tasks it processes.
///
/// Batches reference tasks by 1-based id; they do not own task data. An
/// empty batch is representable through the API and is a no-op on the
/// timeline, but the text format cannot express one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Batch {
    /// Task ids in this batch (order within a batch is irrelevant).
    pub tasks: Vec<i64>,
}

impl Batch {
    /// Creates a batch from task ids.
    pub fn new(tasks: Vec<i64>) -> Self {
        Self { tasks }
    }

    /// Number of tasks in this batch.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether this batch holds no tasks.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

/// A candidate solution: claimed makespan, claimed batch count, batches.
///
/// Claimed values are kept signed so that nonsensical claims (negative
/// counts, understated makespans) surface as validation findings rather
/// than parse failures.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    /// Claimed makespan (completion time of the last batch).
    pub claimed_makespan: i64,
    /// Claimed number of batches.
    pub claimed_batch_count: i64,
    /// Ordered batch sequence.
    pub batches: Vec<Batch>,
}

impl Solution {
    /// Creates a solution from its parts.
    pub fn new(claimed_makespan: i64, claimed_batch_count: i64, batches: Vec<Batch>) -> Self {
        Self {
            claimed_makespan,
            claimed_batch_count,
            batches,
        }
    }

    /// The empty solution: no batches, zero claims.
    ///
    /// This is the named degrade path for structurally insufficient solution
    /// text (fewer than two non-blank records): rather than failing the
    /// parse, the input becomes an empty schedule, which the validator then
    /// rejects for not covering the tasks. Keeps truncated solver output a
    /// *content* failure instead of a parse failure.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of batches actually listed.
    pub fn batch_count(&self) -> usize {
        self.batches.len()
    }

    /// Iterates over every task id in every batch, in sequence order.
    pub fn task_ids(&self) -> impl Iterator<Item = i64> + '_ {
        self.batches.iter().flat_map(|b| b.tasks.iter().copied())
    }
}

impl FromStr for Solution {
    type Err = Error;

    /// Parses a solution from its text format.
    ///
    /// Degrades to [`Solution::empty`] when fewer than two non-blank records
    /// are present. Fails only when a claim or task-id token is not a
    /// parseable integer.
    fn from_str(input: &str) -> Result<Self, Error> {
        let records: Vec<Vec<&str>> = input
            .lines()
            .filter_map(|line| {
                let fields: Vec<&str> = line.split_whitespace().collect();
                (!fields.is_empty()).then_some(fields)
            })
            .collect();

        if records.len() < 2 {
            return Ok(Solution::empty());
        }

        let claimed_makespan = parse_token(records[0][0], "claimed makespan")?;
        let claimed_batch_count = parse_token(records[1][0], "claimed batch count")?;

        let mut batches = Vec::with_capacity(records.len() - 2);
        for fields in &records[2..] {
            let tasks = fields
                .iter()
                .map(|token| parse_token(token, "task id"))
                .collect::<Result<Vec<i64>, Error>>()?;
            batches.push(Batch::new(tasks));
        }

        Ok(Solution::new(claimed_makespan, claimed_batch_count, batches))
    }
}

fn parse_token(token: &str, what: &str) -> Result<i64, Error> {
    token
        .parse()
        .map_err(|_| Error::MalformedSolution(format!("{what} token {token:?} is not an integer")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_solution() {
        let solution: Solution = "12\n2\n1 3\n2\n".parse().unwrap();
        assert_eq!(solution.claimed_makespan, 12);
        assert_eq!(solution.claimed_batch_count, 2);
        assert_eq!(solution.batches.len(), 2);
        assert_eq!(solution.batches[0], Batch::new(vec![1, 3]));
        assert_eq!(solution.batches[1], Batch::new(vec![2]));
    }

    #[test]
    fn test_blank_lines_produce_no_batches() {
        let solution: Solution = "7\n1\n\n1 2\n\n\n".parse().unwrap();
        assert_eq!(solution.batches.len(), 1);
        assert_eq!(solution.batches[0], Batch::new(vec![1, 2]));
    }

    #[test]
    fn test_short_input_degrades_to_empty() {
        for input in ["", "\n\n", "7\n", "   \n 7 \n"] {
            let solution: Solution = input.parse().unwrap();
            assert_eq!(solution, Solution::empty());
        }
    }

    #[test]
    fn test_claims_read_first_token_only() {
        let solution: Solution = "12 99\n2 88\n1\n2\n".parse().unwrap();
        assert_eq!(solution.claimed_makespan, 12);
        assert_eq!(solution.claimed_batch_count, 2);
    }

    #[test]
    fn test_negative_claims_parse() {
        let solution: Solution = "-1\n-3\n1\n".parse().unwrap();
        assert_eq!(solution.claimed_makespan, -1);
        assert_eq!(solution.claimed_batch_count, -3);
    }

    #[test]
    fn test_bad_token_is_a_parse_failure() {
        assert!("x\n1\n1\n".parse::<Solution>().is_err());
        assert!("7\n1\n1 two\n".parse::<Solution>().is_err());
    }

    #[test]
    fn test_task_ids_iterates_in_sequence_order() {
        let solution: Solution = "0\n3\n3 1\n2\n4\n".parse().unwrap();
        let ids: Vec<i64> = solution.task_ids().collect();
        assert_eq!(ids, vec![3, 1, 2, 4]);
    }

    #[test]
    fn test_serde_round_trip() {
        let solution = Solution::new(7, 1, vec![Batch::new(vec![1, 2])]);
        let json = serde_json::to_string(&solution).unwrap();
        let back: Solution = serde_json::from_str(&json).unwrap();
        assert_eq!(back, solution);
    }
}
