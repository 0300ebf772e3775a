//! CSV support for loading rosters and exporting reports.
//!
//! - [`csv_reader::CsvItemReader`] deserializes rows (for example `name,department,salary,age`)
//!   into any `DeserializeOwned` type, one row per `read`.
//! - [`csv_writer::CsvItemWriter`] serializes items, such as department summaries, as CSV rows.
//!
//! Both are configured through builders and use the `csv` crate with Serde.

pub mod csv_reader;
pub mod csv_writer;

pub use csv_reader::{CsvItemReader, CsvItemReaderBuilder};
pub use csv_writer::{CsvItemWriter, CsvItemWriterBuilder};
