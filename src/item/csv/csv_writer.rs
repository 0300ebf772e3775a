use std::{
    cell::RefCell,
    fs::File,
    io::{self, Write},
    path::Path,
    result,
};

use csv::{Writer, WriterBuilder};
use serde::Serialize;

use crate::{
    core::item::{ItemWriter, ItemWriterResult},
    error::AnalyticsError,
};

pub struct CsvItemWriter<T: Write> {
    wrapper: RefCell<Writer<T>>,
}

impl<T: Write, R: Serialize> ItemWriter<R> for CsvItemWriter<T> {
    fn write(&self, items: &[R]) -> ItemWriterResult {
        let mut wrapper = self.wrapper.borrow_mut();
        for item in items {
            wrapper
                .serialize(item)
                .map_err(|error| AnalyticsError::ItemWriter(error.to_string()))?;
        }
        Ok(())
    }

    /// Flush the contents of the internal buffer to the underlying writer.
    ///
    /// Note that this also flushes the underlying writer.
    fn flush(&self) -> ItemWriterResult {
        let result = self.wrapper.borrow_mut().flush();
        match result {
            Ok(()) => Ok(()),
            Err(error) => Err(AnalyticsError::ItemWriter(error.to_string())),
        }
    }
}

impl<T: Write> CsvItemWriter<T> {
    pub fn into_inner(self) -> result::Result<T, AnalyticsError> {
        let result = self.wrapper.into_inner().into_inner();
        match result {
            Ok(record) => Ok(record),
            Err(error) => Err(AnalyticsError::ItemWriter(error.to_string())),
        }
    }
}

#[derive(Default)]
pub struct CsvItemWriterBuilder {
    delimiter: u8,
    has_headers: bool,
}

impl CsvItemWriterBuilder {
    pub fn new() -> CsvItemWriterBuilder {
        CsvItemWriterBuilder {
            delimiter: b',',
            has_headers: false,
        }
    }

    pub fn delimiter(mut self, delimiter: u8) -> CsvItemWriterBuilder {
        self.delimiter = delimiter;
        self
    }

    /// Write a header row derived from the struct's field names.
    pub fn has_headers(mut self, yes: bool) -> CsvItemWriterBuilder {
        self.has_headers = yes;
        self
    }

    pub fn from_path<R: AsRef<Path>>(
        self,
        path: R,
    ) -> result::Result<CsvItemWriter<File>, AnalyticsError> {
        let wtr = WriterBuilder::new()
            .flexible(false)
            .delimiter(self.delimiter)
            .has_headers(self.has_headers)
            .from_path(path)
            .map_err(|error| AnalyticsError::ItemWriter(error.to_string()))?;

        Ok(CsvItemWriter {
            wrapper: RefCell::new(wtr),
        })
    }

    /// Builds a writer over any `io::Write` sink.
    ///
    /// # Example
    ///
    /// ```
    /// # use std::error::Error;
    /// # use employee_analytics::{item::csv::csv_writer::CsvItemWriterBuilder, core::item::ItemWriter};
    /// #[derive(serde::Serialize)]
    /// struct Row<'a> {
    ///     department: &'a str,
    ///     #[serde(rename = "headcount")]
    ///     employee_count: usize,
    /// }
    ///
    /// # fn main() { example().unwrap(); }
    /// fn example() -> Result<(), Box<dyn Error>> {
    ///     let wtr = CsvItemWriterBuilder::new()
    ///         .has_headers(true)
    ///         .from_writer(vec![]);
    ///
    ///     wtr.write(&[
    ///         Row { department: "Engineering", employee_count: 4 },
    ///         Row { department: "HR", employee_count: 2 },
    ///     ])?;
    ///
    ///     let data = String::from_utf8(wtr.into_inner()?)?;
    ///     assert_eq!(data, "\
    /// department,headcount
    /// Engineering,4
    /// HR,2
    /// ");
    ///     Ok(())
    /// }
    /// ```
    pub fn from_writer<W: io::Write>(self, wtr: W) -> CsvItemWriter<W> {
        let wtr = WriterBuilder::new()
            .flexible(false)
            .delimiter(self.delimiter)
            .has_headers(self.has_headers)
            .from_writer(wtr);

        CsvItemWriter {
            wrapper: RefCell::new(wtr),
        }
    }
}
