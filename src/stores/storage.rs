//! Defines the storage trait that the transaction store persists through.

use crate::Error;

/// A single durable, string-keyed record.
///
/// The record is read once when a store is created and overwritten as a whole
/// on every change.
pub trait Storage {
    /// Read the record, or `None` if nothing has been saved yet.
    fn load(&self) -> Result<Option<String>, Error>;

    /// Replace the record with `value`.
    fn save(&mut self, value: &str) -> Result<(), Error>;
}

/// Keeps the record in memory, nothing survives the process.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    value: Option<String>,
}

impl MemoryStorage {
    /// Create an empty storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a storage that already holds `value`.
    pub fn with_value(value: &str) -> Self {
        Self {
            value: Some(value.to_owned()),
        }
    }

    /// The currently saved value.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

impl Storage for MemoryStorage {
    fn load(&self) -> Result<Option<String>, Error> {
        Ok(self.value.clone())
    }

    fn save(&mut self, value: &str) -> Result<(), Error> {
        self.value = Some(value.to_owned());
        Ok(())
    }
}
