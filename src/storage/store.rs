use async_trait::async_trait;

use crate::types::errors::StorageError;

/// Persistent, string-keyed text store.
///
/// All implementations must satisfy these invariants:
/// - A single flat namespace: no key hierarchy, no scanning.
/// - `get` returns `Ok(None)` for a key that was never written.
/// - `set` replaces the previous value wholesale.
/// - No built-in locking: callers performing read-modify-write get no
///   isolation from interleaved writers.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`.
    ///
    /// Returns `Ok(None)` if the key does not exist.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}
