use std::cell::{Cell, RefCell};

use crate::core::item::{ItemReader, ItemReaderResult, ItemWriter, ItemWriterResult};

/// Reads items from an owned vector, in order.
///
/// # Examples
///
/// ```
/// use employee_analytics::core::item::ItemReader;
/// use employee_analytics::item::memory::InMemoryItemReader;
///
/// let reader = InMemoryItemReader::new(vec!["Engineering", "HR"]);
///
/// assert_eq!(reader.read().unwrap(), Some("Engineering"));
/// assert_eq!(reader.read().unwrap(), Some("HR"));
/// assert_eq!(reader.read().unwrap(), None);
/// ```
pub struct InMemoryItemReader<T> {
    items: Vec<T>,
    cursor: Cell<usize>,
}

impl<T> InMemoryItemReader<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            cursor: Cell::new(0),
        }
    }
}

impl<T: Clone> ItemReader<T> for InMemoryItemReader<T> {
    fn read(&self) -> ItemReaderResult<T> {
        let index = self.cursor.get();
        let item = self.items.get(index).cloned();
        if item.is_some() {
            self.cursor.set(index + 1);
        }
        Ok(item)
    }
}

/// Collects every written item into a vector.
pub struct InMemoryItemWriter<T> {
    items: RefCell<Vec<T>>,
}

impl<T> Default for InMemoryItemWriter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> InMemoryItemWriter<T> {
    pub fn new() -> Self {
        Self {
            items: RefCell::new(Vec::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }

    /// Consumes the writer and returns the collected items.
    pub fn into_items(self) -> Vec<T> {
        self.items.into_inner()
    }
}

impl<T: Clone> ItemWriter<T> for InMemoryItemWriter<T> {
    fn write(&self, items: &[T]) -> ItemWriterResult {
        self.items.borrow_mut().extend_from_slice(items);
        Ok(())
    }
}
