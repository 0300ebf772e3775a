//! JSON output for reports.
//!
//! [`json_writer::JsonItemWriter`] serializes items with `serde_json` and writes them as one
//! JSON array, compact or pretty-printed.
//!
//! # Example
//!
//! ```
//! use employee_analytics::analytics::{DepartmentSummary, EmployeePipeline, sample_employees};
//! use employee_analytics::core::item::ItemWriter;
//! use employee_analytics::item::json::JsonItemWriterBuilder;
//!
//! let employees = sample_employees();
//! let report = EmployeePipeline::new(&employees).department_report();
//!
//! let writer = JsonItemWriterBuilder::new()
//!     .pretty_formatter(true)
//!     .from_writer(Vec::new());
//!
//! let writer_ref = &writer as &dyn ItemWriter<DepartmentSummary>;
//! writer_ref.open().unwrap();
//! writer_ref.write(&report).unwrap();
//! writer_ref.close().unwrap();
//!
//! let json = String::from_utf8(writer.into_inner().unwrap()).unwrap();
//! assert!(json.contains("\"top_earner\": \"Grace\""));
//! ```

pub mod json_writer;

pub use json_writer::{JsonItemWriter, JsonItemWriterBuilder};
