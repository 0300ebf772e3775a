/// In-memory item reader and writer, used to load rosters and collect results.
pub mod memory;

/// Line-oriented writer backing the console report.
pub mod line;

#[cfg(feature = "logger")]
/// This module provides a logger item writer, useful for debugging loaded records.
pub mod logger;

#[cfg(feature = "csv")]
/// This module provides a CSV item reader and writer implementation.
pub mod csv;

#[cfg(feature = "json")]
/// This module provides a JSON item writer implementation.
pub mod json;
