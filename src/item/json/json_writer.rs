use std::{
    cell::{Cell, RefCell},
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use serde::Serialize;

use crate::{
    core::item::{ItemWriter, ItemWriterResult},
    error::AnalyticsError,
};

/// Writes items as the elements of one JSON array.
///
/// `open` writes the opening bracket, `write` appends items separated by
/// commas and `close` writes the closing bracket.
pub struct JsonItemWriter<W: Write> {
    stream: RefCell<BufWriter<W>>,
    use_pretty_formatter: bool,
    is_first_item: Cell<bool>,
}

impl<W: Write> JsonItemWriter<W> {
    fn write_bytes(&self, bytes: &[u8]) -> ItemWriterResult {
        let result = self.stream.borrow_mut().write_all(bytes);

        match result {
            Ok(()) => Ok(()),
            Err(error) => Err(AnalyticsError::ItemWriter(error.to_string())),
        }
    }

    /// Flushes and returns the underlying sink.
    pub fn into_inner(self) -> Result<W, AnalyticsError> {
        self.stream
            .into_inner()
            .into_inner()
            .map_err(|error| AnalyticsError::ItemWriter(error.to_string()))
    }
}

impl<W: Write, R: Serialize> ItemWriter<R> for JsonItemWriter<W> {
    fn write(&self, items: &[R]) -> ItemWriterResult {
        for item in items {
            let json = if self.use_pretty_formatter {
                serde_json::to_string_pretty(item)
            } else {
                serde_json::to_string(item)
            }
            .map_err(|error| AnalyticsError::ItemWriter(error.to_string()))?;

            if self.is_first_item.get() {
                self.is_first_item.set(false);
            } else if self.use_pretty_formatter {
                self.write_bytes(b",\n")?;
            } else {
                self.write_bytes(b",")?;
            }

            self.write_bytes(json.as_bytes())?;
        }

        Ok(())
    }

    fn flush(&self) -> ItemWriterResult {
        let result = self.stream.borrow_mut().flush();

        match result {
            Ok(()) => Ok(()),
            Err(error) => Err(AnalyticsError::ItemWriter(error.to_string())),
        }
    }

    fn open(&self) -> ItemWriterResult {
        self.is_first_item.set(true);

        if self.use_pretty_formatter {
            self.write_bytes(b"[\n")
        } else {
            self.write_bytes(b"[")
        }
    }

    fn close(&self) -> ItemWriterResult {
        if self.use_pretty_formatter {
            self.write_bytes(b"\n]\n")?;
        } else {
            self.write_bytes(b"]\n")?;
        }

        ItemWriter::<R>::flush(self)
    }
}

#[derive(Default)]
pub struct JsonItemWriterBuilder {
    pretty_formatter: bool,
}

impl JsonItemWriterBuilder {
    pub fn new() -> JsonItemWriterBuilder {
        JsonItemWriterBuilder {
            pretty_formatter: false,
        }
    }

    pub fn pretty_formatter(mut self, yes: bool) -> JsonItemWriterBuilder {
        self.pretty_formatter = yes;
        self
    }

    /// Creates (or truncates) the file at `path` and writes into it.
    pub fn from_path<P: AsRef<Path>>(self, path: P) -> Result<JsonItemWriter<File>, AnalyticsError> {
        let file =
            File::create(path).map_err(|error| AnalyticsError::ItemWriter(error.to_string()))?;

        Ok(self.from_writer(file))
    }

    pub fn from_writer<W: Write>(self, wtr: W) -> JsonItemWriter<W> {
        JsonItemWriter {
            stream: RefCell::new(BufWriter::new(wtr)),
            use_pretty_formatter: self.pretty_formatter,
            is_first_item: Cell::new(true),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{error::Error, fs};

    use crate::{
        analytics::{DepartmentSummary, EmployeePipeline, sample_employees},
        core::item::ItemWriter,
    };

    use super::JsonItemWriterBuilder;

    #[test]
    fn compact_array_of_summaries() -> Result<(), Box<dyn Error>> {
        let employees = sample_employees();
        let report = EmployeePipeline::new(&employees).department_report();

        let writer = JsonItemWriterBuilder::new().from_writer(Vec::new());
        let writer_ref = &writer as &dyn ItemWriter<DepartmentSummary>;
        writer_ref.open()?;
        writer_ref.write(&report[..1])?;
        writer_ref.write(&report[1..2])?;
        writer_ref.close()?;

        let text = String::from_utf8(writer.into_inner()?)?;
        assert_eq!(
            text,
            concat!(
                r#"[{"department":"Engineering","employee_count":4,"average_salary":78750.0,"average_age":33.75,"top_earner":"Grace"},"#,
                r#"{"department":"HR","employee_count":2,"average_salary":51000.0,"average_age":28.0,"top_earner":"Henry"}]"#,
                "\n"
            )
        );

        Ok(())
    }

    #[test]
    fn empty_array_when_nothing_is_written() -> Result<(), Box<dyn Error>> {
        let writer = JsonItemWriterBuilder::new()
            .pretty_formatter(true)
            .from_writer(Vec::new());
        let writer_ref = &writer as &dyn ItemWriter<DepartmentSummary>;
        writer_ref.open()?;
        writer_ref.close()?;

        let text = String::from_utf8(writer.into_inner()?)?;
        assert_eq!(text, "[\n\n]\n");

        Ok(())
    }

    #[test]
    fn pretty_file_is_valid_json() -> Result<(), Box<dyn Error>> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("report.json");
        let employees = sample_employees();
        let report = EmployeePipeline::new(&employees).department_report();

        let writer = JsonItemWriterBuilder::new()
            .pretty_formatter(true)
            .from_path(&path)?;
        let writer_ref = &writer as &dyn ItemWriter<DepartmentSummary>;
        writer_ref.open()?;
        writer_ref.write(&report)?;
        writer_ref.close()?;

        let parsed: Vec<DepartmentSummary> = serde_json::from_str(&fs::read_to_string(&path)?)?;
        assert_eq!(parsed, report);

        Ok(())
    }
}
