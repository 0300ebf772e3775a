//! In-memory analytics over employee records.
//!
//! - [`Employee`] and the fixed sample roster ([`sample_employees`], [`sample_teams`]).
//! - [`EmployeePipeline`]: filtering, mapping, sorting, deduplication, grouping,
//!   partitioning and reductions, all borrowing from the input slice.
//! - [`DepartmentSummary`]: the per-department report.
//! - [`parallel`]: sequential, shuffled and parallel sums of squares.
//! - [`load_employees`]: validated loading from any `ItemReader`.
//!
//! Queries over an empty slice never panic: maxima and averages come back as
//! `None`, department summaries fall back to `0.0` and `"None"`.

pub mod employee;
pub mod load;
pub mod parallel;
pub mod pipeline;
pub mod summary;

mod exercises;

pub use employee::{Employee, SalaryBand, sample_employees, sample_teams};
pub use load::{EmployeeValidator, load_employees};
pub use parallel::{
    SumComparison, compare_sums, parallel_sum_of_squares, sum_of_squares,
    sum_of_squares_shuffled,
};
pub use pipeline::{AgePartition, EmployeePipeline, flatten_teams};
pub use summary::{DepartmentSummary, NO_TOP_EARNER};
