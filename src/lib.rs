//! Validation and benchmarking for serial-batching schedules.
//!
//! Judges candidate schedules for the single-machine serial batching
//! problem with ready times: tasks are grouped into an ordered sequence of
//! batches of bounded size, a batch runs for the longest processing time
//! among its tasks and cannot start before their latest ready time, and a
//! fixed reload time separates consecutive batches. Given an instance and
//! a claimed schedule, the crate verifies the partition, replays the
//! timeline, and checks the claimed makespan.
//!
//! # Modules
//!
//! - **`models`**: `Problem`/`Task` and `Solution`/`Batch`, with their text parsers
//! - **`validation`**: the engine — structural checks, timeline replay, cost evaluation
//! - **`harness`**: solver benchmarking — discovery, timed subprocess runs, CSV reports
//! - **`error`**: input-loading error types
//!
//! # References
//!
//! - Potts & Kovalyov (2000), "Scheduling with batching: A review"
//! - Brucker (2007), "Scheduling Algorithms", Ch. 8 (Batching Problems)

pub mod error;
pub mod harness;
pub mod models;
pub mod validation;

pub use error::{Error, Result};
pub use models::{Batch, Problem, Solution, Task};
pub use validation::{
    evaluate, simulate, validate, ValidationError, ValidationErrorKind, ValidationResult,
    INFEASIBLE,
};
