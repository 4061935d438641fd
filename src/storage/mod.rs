//! Linkshelf storage layer.
//!
//! Provides the key-value backing store contract and the serialization
//! codec used by the repositories.
//!
//! # Usage
//!
//! ```no_run
//! use std::sync::Arc;
//! use linkshelf::storage::{FileStore, KeyValueStore, MemoryStore};
//!
//! // A persistent store rooted at the platform data directory
//! let store: Arc<dyn KeyValueStore> = Arc::new(FileStore::open_default());
//!
//! // Or an in-memory store for testing
//! let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
//! ```

pub mod codec;
pub mod file;
pub mod memory;
pub mod store;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use store::KeyValueStore;
