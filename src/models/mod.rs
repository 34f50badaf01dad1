//! Domain models for the serial-batching problem.
//!
//! Two aggregates, both built once from text and never mutated:
//!
//! - [`Problem`]: the instance — tasks with processing and ready times,
//!   a batch capacity, and the reload time between batches.
//! - [`Solution`]: a candidate — an ordered batch sequence plus the claimed
//!   makespan and batch count, trusted only after validation.

mod problem;
mod solution;

pub use problem::{Problem, Task};
pub use solution::{Batch, Solution};
