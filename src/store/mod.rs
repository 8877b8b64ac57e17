//! Persisted completion set
//!
//! Maps a flow's identity key to whether the user has completed it. The flow core
//! only sees the [`CompletionStore`] trait, so tests run against
//! [`InMemoryCompletionStore`] or a mock and hosts plug in [`JsonFileCompletionStore`].

mod file;
mod memory;

pub use file::JsonFileCompletionStore;
pub use memory::InMemoryCompletionStore;

use thiserror::Error;

#[cfg(test)]
use mockall::automock;

/// Errors that can occur while reading or writing the completion set
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Version mismatch: expected {expected}, found {found}")]
    VersionMismatch { expected: String, found: String },
}

/// Key to completed-flag storage
///
/// Writes are synchronous and expected to be fast local operations.
#[cfg_attr(test, automock)]
pub trait CompletionStore {
    /// Whether the flow with this key was completed; absent keys read as `false`
    fn get(&self, key: &str) -> Result<bool, StoreError>;

    fn set(&mut self, key: &str, completed: bool) -> Result<(), StoreError>;

    /// Forget the key entirely
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

impl<T: CompletionStore + ?Sized> CompletionStore for Box<T> {
    fn get(&self, key: &str) -> Result<bool, StoreError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, completed: bool) -> Result<(), StoreError> {
        (**self).set(key, completed)
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }
}
