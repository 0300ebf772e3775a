use std::marker::PhantomData;

use crate::error::AnalyticsError;

/// Result of a read: `Ok(Some(item))` for an item, `Ok(None)` once the source is exhausted.
pub type ItemReaderResult<I> = Result<Option<I>, AnalyticsError>;

/// Result of processing a single item.
pub type ItemProcessorResult<O> = Result<O, AnalyticsError>;

/// Result of writing a batch of items.
pub type ItemWriterResult = Result<(), AnalyticsError>;

/// Retrieves input items one at a time.
///
/// Readers are driven through `&self`, so implementations keep their cursor
/// in a `Cell` or `RefCell`.
pub trait ItemReader<I> {
    /// Reads the next item, or `Ok(None)` when there is nothing left to read.
    fn read(&self) -> ItemReaderResult<I>;
}

/// Turns an input item into an output item.
///
/// Returning an error rejects the item; the step counts it as a processing
/// error and applies its skip limit.
pub trait ItemProcessor<I, O> {
    fn process(&self, item: &I) -> ItemProcessorResult<O>;
}

/// Receives processed items, one chunk at a time.
pub trait ItemWriter<O> {
    /// Writes a chunk of items.
    fn write(&self, items: &[O]) -> ItemWriterResult;

    /// Flushes anything buffered by the writer.
    fn flush(&self) -> ItemWriterResult {
        Ok(())
    }

    /// Called once before the first chunk.
    fn open(&self) -> ItemWriterResult {
        Ok(())
    }

    /// Called once after the last chunk.
    fn close(&self) -> ItemWriterResult {
        Ok(())
    }
}

/// Processor that hands every item through unchanged.
pub struct PassThroughProcessor<T> {
    _phantom: PhantomData<T>,
}

impl<T: Clone> ItemProcessor<T, T> for PassThroughProcessor<T> {
    fn process(&self, item: &T) -> ItemProcessorResult<T> {
        Ok(item.clone())
    }
}

impl<T> PassThroughProcessor<T> {
    pub fn new() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }
}

impl<T> Default for PassThroughProcessor<T> {
    fn default() -> Self {
        Self::new()
    }
}
