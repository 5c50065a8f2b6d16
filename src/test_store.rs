//! In-memory key-value store used by the persistence tests.
//!
//! Reads and writes can each be made to fail, standing in for a
//! `localStorage` that is disabled or over quota.

use std::collections::HashMap;

use crate::storage::{KeyValueStore, StorageError};

#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    items: HashMap<String, String>,
    reject_reads: bool,
    reject_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed `key` with a raw value.
    pub fn with_item(mut self, key: &str, value: &str) -> Self {
        self.items.insert(key.to_owned(), value.to_owned());
        self
    }

    /// Make every subsequent `get_item` fail.
    pub fn set_reject_reads(&mut self, reject: bool) {
        self.reject_reads = reject;
    }

    /// Make every subsequent `set_item` fail.
    pub fn set_reject_writes(&mut self, reject: bool) {
        self.reject_writes = reject;
    }

    pub fn item(&self, key: &str) -> Option<&str> {
        self.items.get(key).map(String::as_str)
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.reject_reads {
            return Err(StorageError::Read("access denied".into()));
        }
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.reject_writes {
            return Err(StorageError::Write("quota exceeded".into()));
        }
        self.items.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
