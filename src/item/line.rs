use std::{
    cell::RefCell,
    fmt::Display,
    io::{self, Stdout, Write},
};

use crate::{
    core::item::{ItemWriter, ItemWriterResult},
    error::AnalyticsError,
};

/// Writes each item on its own line using its `Display` form.
///
/// This is the sink of the console report: pass `io::stdout()` to print, or a
/// `Vec<u8>` to capture the output.
///
/// # Examples
///
/// ```
/// use employee_analytics::core::item::ItemWriter;
/// use employee_analytics::item::line::LineItemWriter;
///
/// let writer = LineItemWriter::new(Vec::new());
/// writer.write(&["Engineering: 4 employees", "HR: 2 employees"]).unwrap();
///
/// let text = String::from_utf8(writer.into_inner()).unwrap();
/// assert_eq!(text, "Engineering: 4 employees\nHR: 2 employees\n");
/// ```
pub struct LineItemWriter<W: Write> {
    stream: RefCell<W>,
}

impl<W: Write> LineItemWriter<W> {
    pub fn new(stream: W) -> Self {
        Self {
            stream: RefCell::new(stream),
        }
    }

    pub fn into_inner(self) -> W {
        self.stream.into_inner()
    }
}

impl LineItemWriter<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write, T: Display> ItemWriter<T> for LineItemWriter<W> {
    fn write(&self, items: &[T]) -> ItemWriterResult {
        let mut stream = self.stream.borrow_mut();
        for item in items {
            writeln!(stream, "{}", item).map_err(|e| AnalyticsError::ItemWriter(e.to_string()))?;
        }
        Ok(())
    }

    fn flush(&self) -> ItemWriterResult {
        self.stream
            .borrow_mut()
            .flush()
            .map_err(|e| AnalyticsError::ItemWriter(e.to_string()))
    }
}
