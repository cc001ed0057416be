//! Durable key/value storage seam.
//!
//! SYSTEM CONTEXT
//! ==============
//! The theme controller persists through [`ThemeStore`] so it never touches
//! `localStorage` directly. The browser layer supplies the real store; tests
//! and headless hosts use [`MemoryStore`], which can also be told to fail.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("storage unavailable")]
    Unavailable,
    #[error("storage {op} failed for key {key:?}: {reason}")]
    Rejected { op: &'static str, key: String, reason: String },
}

/// Origin-scoped, synchronous string store.
pub trait ThemeStore {
    /// Read the value under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store refuses the write.
    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-memory store with switchable failure modes.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    fail_reads: bool,
    fail_writes: bool,
    writes: usize,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one entry.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.entries.insert(key.to_owned(), value.to_owned());
        store
    }

    /// Make every subsequent read fail.
    #[must_use]
    pub fn failing_reads(mut self) -> Self {
        self.fail_reads = true;
        self
    }

    /// Make every subsequent write fail.
    #[must_use]
    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Number of successful writes so far.
    #[must_use]
    pub fn write_count(&self) -> usize {
        self.writes
    }
}

impl ThemeStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        if self.fail_reads {
            return Err(StoreError::Unavailable);
        }
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.fail_writes {
            return Err(StoreError::Rejected { op: "write", key: key.to_owned(), reason: "quota exceeded".to_owned() });
        }
        self.entries.insert(key.to_owned(), value.to_owned());
        self.writes += 1;
        Ok(())
    }
}
