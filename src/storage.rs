//! Persistence for the likes map.
//!
//! [`KeyValueStore`] is the raw string store (`localStorage` in the browser,
//! an in-memory map in tests). [`LikeStore`] layers the JSON encoding of the
//! whole [`LikeMap`] under one namespaced key on top of it. Both surfaces
//! return `Result`; deciding that a failure is only worth a warning is the
//! caller's job.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use crate::likes::LikeMap;

/// Errors from reading or writing persisted likes.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("storage read failed: {0}")]
    Read(String),
    #[error("storage write failed: {0}")]
    Write(String),
    #[error("invalid likes JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// String key-value store with `localStorage` semantics.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// The likes map persisted as one JSON value under a fixed key.
#[derive(Debug)]
pub struct LikeStore<S> {
    backend: S,
    key: String,
}

impl<S: KeyValueStore> LikeStore<S> {
    pub fn new(backend: S, key: impl Into<String>) -> Self {
        Self { backend, key: key.into() }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut S {
        &mut self.backend
    }

    #[must_use]
    pub fn into_backend(self) -> S {
        self.backend
    }

    /// Read the stored map.
    ///
    /// A missing entry, a blank string, and a JSON `null` all load as an
    /// empty map.
    ///
    /// # Errors
    ///
    /// Fails when the backend cannot be read or the value is not a valid map.
    pub fn load(&self) -> Result<LikeMap, StorageError> {
        let Some(raw) = self.backend.get_item(&self.key)? else {
            return Ok(LikeMap::new());
        };
        if raw.trim().is_empty() {
            return Ok(LikeMap::new());
        }
        let map: Option<LikeMap> = serde_json::from_str(&raw)?;
        Ok(map.unwrap_or_default())
    }

    /// Serialize and write the whole map.
    ///
    /// # Errors
    ///
    /// Fails when the backend rejects the write.
    pub fn save(&mut self, map: &LikeMap) -> Result<(), StorageError> {
        let raw = serde_json::to_string(map)?;
        self.backend.set_item(&self.key, &raw)
    }
}
