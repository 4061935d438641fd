use std::fmt;

// === StorageError ===

/// Errors related to the backing store and the serialization codec.
#[derive(Debug)]
pub enum StorageError {
    /// The backing store failed to read a key.
    ReadFailed(String),
    /// The backing store failed to persist a key.
    WriteFailed(String),
    /// Failed to serialize or deserialize a stored collection.
    Serialization(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::ReadFailed(msg) => write!(f, "Store read failed: {}", msg),
            StorageError::WriteFailed(msg) => write!(f, "Store write failed: {}", msg),
            StorageError::Serialization(msg) => {
                write!(f, "Collection serialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for StorageError {}

// === CategoryError ===

/// Errors related to category repository operations.
#[derive(Debug)]
pub enum CategoryError {
    /// A category with the same name already exists (exact match).
    AlreadyExists(String),
    /// A storage operation failed while reading or persisting categories.
    StoreError(String),
}

impl fmt::Display for CategoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryError::AlreadyExists(name) => {
                write!(f, "Category already exists: {}", name)
            }
            CategoryError::StoreError(msg) => write!(f, "Category store error: {}", msg),
        }
    }
}

impl std::error::Error for CategoryError {}
