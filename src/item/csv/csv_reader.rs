use csv::{Reader, ReaderBuilder, StringRecord, StringRecordsIntoIter, Terminator, Trim};
use serde::de::DeserializeOwned;
use std::{cell::RefCell, fs::File, io::Read, path::Path};

use crate::{
    core::item::{ItemReader, ItemReaderResult},
    error::AnalyticsError,
};

/// A CSV item reader that implements the `ItemReader` trait.
///
/// Deserializes CSV rows into Rust structs one at a time, so a roster can be
/// streamed from a file without loading it whole.
///
/// # Examples
///
/// ```
/// use employee_analytics::analytics::Employee;
/// use employee_analytics::core::item::ItemReader;
/// use employee_analytics::item::csv::csv_reader::CsvItemReaderBuilder;
///
/// let data = "\
/// name,department,salary,age
/// Alice,Engineering,75000,28
/// Bob,Engineering,65000,32
/// ";
///
/// let reader = CsvItemReaderBuilder::new()
///     .has_headers(true)
///     .from_reader(data.as_bytes());
///
/// let alice: Employee = reader.read().unwrap().unwrap();
/// assert_eq!(alice.name(), "Alice");
/// assert_eq!(alice.salary(), 75000.0);
///
/// let bob: Employee = reader.read().unwrap().unwrap();
/// assert_eq!(bob.age(), 32);
///
/// assert!(ItemReader::<Employee>::read(&reader).unwrap().is_none());
/// ```
pub struct CsvItemReader<R> {
    /// `RefCell` so `read(&self)` can advance the iterator.
    records: RefCell<StringRecordsIntoIter<R>>,
    /// Column names fields are matched against; `None` matches by position.
    headers: Result<Option<StringRecord>, String>,
}

impl<R: Read, T: DeserializeOwned> ItemReader<T> for CsvItemReader<R> {
    /// Reads and deserializes the next row.
    ///
    /// # Returns
    /// - `Ok(Some(record))` if a record is successfully read
    /// - `Ok(None)` if there are no more records to read
    /// - `Err(AnalyticsError::ItemReader(error))` if the row is malformed or does not deserialize
    fn read(&self) -> ItemReaderResult<T> {
        let headers = self
            .headers
            .as_ref()
            .map_err(|error| AnalyticsError::ItemReader(error.clone()))?;

        if let Some(result) = self.records.borrow_mut().next() {
            match result {
                Ok(string_record) => {
                    let result: Result<T, _> = string_record.deserialize(headers.as_ref());

                    match result {
                        Ok(record) => Ok(Some(record)),
                        Err(error) => Err(AnalyticsError::ItemReader(error.to_string())),
                    }
                }
                Err(error) => Err(AnalyticsError::ItemReader(error.to_string())),
            }
        } else {
            Ok(None)
        }
    }
}

/// A builder for configuring CSV item reading.
///
/// # Default Configuration
///
/// - Delimiter: comma (,)
/// - Terminator: CRLF
/// - Headers: disabled
/// - Trimming: all fields trimmed
#[derive(Default)]
pub struct CsvItemReaderBuilder {
    delimiter: u8,
    terminator: Terminator,
    has_headers: bool,
}

impl CsvItemReaderBuilder {
    pub fn new() -> Self {
        Self {
            delimiter: b',',
            terminator: Terminator::CRLF,
            has_headers: false,
        }
    }

    /// Sets the field delimiter.
    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets the line terminator. `Terminator::CRLF` also accepts bare `\n`.
    pub fn terminator(mut self, terminator: Terminator) -> Self {
        self.terminator = terminator;
        self
    }

    /// When enabled, the first row holds column names and is matched against
    /// the struct's field names during deserialization, so columns may come in
    /// any order. Otherwise fields are filled by position.
    pub fn has_headers(mut self, yes: bool) -> Self {
        self.has_headers = yes;
        self
    }

    /// Creates a `CsvItemReader` over any `Read` source.
    pub fn from_reader<R: Read>(self, rdr: R) -> CsvItemReader<R> {
        let mut rdr = ReaderBuilder::new()
            .trim(Trim::All)
            .delimiter(self.delimiter)
            .terminator(self.terminator)
            .has_headers(self.has_headers)
            .flexible(false)
            .from_reader(rdr);

        // An unreadable header row surfaces on every read.
        let headers = read_headers(&mut rdr, self.has_headers);

        CsvItemReader {
            records: RefCell::new(rdr.into_records()),
            headers,
        }
    }

    /// Creates a `CsvItemReader` over a file.
    ///
    /// # Errors
    /// `AnalyticsError::ItemReader` when the file cannot be opened.
    pub fn from_path<P: AsRef<Path>>(self, path: P) -> Result<CsvItemReader<File>, AnalyticsError> {
        let mut rdr = ReaderBuilder::new()
            .trim(Trim::All)
            .delimiter(self.delimiter)
            .terminator(self.terminator)
            .has_headers(self.has_headers)
            .flexible(false)
            .from_path(path)
            .map_err(|e| AnalyticsError::ItemReader(e.to_string()))?;

        let headers =
            read_headers(&mut rdr, self.has_headers).map_err(AnalyticsError::ItemReader)?;

        Ok(CsvItemReader {
            records: RefCell::new(rdr.into_records()),
            headers: Ok(headers),
        })
    }
}

fn read_headers<R: Read>(
    rdr: &mut Reader<R>,
    has_headers: bool,
) -> Result<Option<StringRecord>, String> {
    if !has_headers {
        return Ok(None);
    }
    rdr.headers()
        .map(|headers| Some(headers.clone()))
        .map_err(|e| e.to_string())
}
