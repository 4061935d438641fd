//! Category Repository for Linkshelf.
//!
//! Implements `CategoryRepositoryTrait` — CRUD for category labels plus the
//! cross-checks against the link collection that keep the two consistent:
//! deleting a category rewrites every referencing link to the fallback
//! category before the label is removed.
//!
//! Category comparison is exact-match (case-sensitive) throughout. Any
//! case-insensitive duplicate policy belongs to the caller.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use crate::repositories::link_repository::{LinkRepository, LinkRepositoryTrait};
use crate::storage::codec::{self, CATEGORIES_KEY};
use crate::storage::store::KeyValueStore;
use crate::types::errors::{CategoryError, StorageError};

/// Links referencing a deleted category are reassigned to this category.
/// It is expected to exist in the collection already; the repository does
/// not create it.
pub const FALLBACK_CATEGORY: &str = "Otros";

/// Trait defining category repository operations.
#[async_trait]
pub trait CategoryRepositoryTrait {
    /// All category names in storage order. Empty on read failure.
    async fn list(&self) -> Vec<String>;
    /// Appends a new category. Fails with `AlreadyExists` if the exact name
    /// is already present.
    async fn add(&self, name: &str) -> Result<(), CategoryError>;
    /// Cascading delete: rewrites every link referencing `name` to
    /// [`FALLBACK_CATEGORY`], then removes `name` from the collection.
    /// Deleting an absent name completes without error.
    async fn delete(&self, name: &str) -> Result<(), CategoryError>;
    /// Whether any link currently references `name`.
    async fn is_in_use(&self, name: &str) -> bool;
    /// Link count for every name in the authoritative category list.
    /// Categories referenced by links but absent from the list are not
    /// included.
    async fn counts_by_category(&self) -> HashMap<String, usize>;
}

/// Category repository backed by a key-value store.
///
/// Shares the store with an internal [`LinkRepository`] so the cascading
/// delete and the count queries see the same link collection the caller's
/// link repository does.
pub struct CategoryRepository {
    store: Arc<dyn KeyValueStore>,
    links: LinkRepository,
}

impl CategoryRepository {
    /// Creates a new `CategoryRepository` using the provided backing store.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        let links = LinkRepository::new(Arc::clone(&store));
        Self { store, links }
    }

    /// Loads the full category collection, substituting the empty
    /// collection on read or decode failure.
    async fn load_all(&self) -> Vec<String> {
        match self.store.get(CATEGORIES_KEY).await {
            Ok(Some(raw)) => match codec::decode_categories(&raw) {
                Ok(categories) => categories,
                Err(e) => {
                    warn!("discarding undecodable category collection: {}", e);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("failed to read categories from store: {}", e);
                Vec::new()
            }
        }
    }

    /// Persists the full category collection.
    async fn save_all(&self, categories: &[String]) -> Result<(), StorageError> {
        let raw = codec::encode_categories(categories)?;
        self.store.set(CATEGORIES_KEY, &raw).await
    }
}

#[async_trait]
impl CategoryRepositoryTrait for CategoryRepository {
    async fn list(&self) -> Vec<String> {
        self.load_all().await
    }

    async fn add(&self, name: &str) -> Result<(), CategoryError> {
        let mut categories = self.load_all().await;

        if categories.iter().any(|c| c == name) {
            return Err(CategoryError::AlreadyExists(name.to_string()));
        }

        categories.push(name.to_string());
        self.save_all(&categories)
            .await
            .map_err(|e| CategoryError::StoreError(e.to_string()))
    }

    /// The two persist steps are not transactional: if the link rewrite
    /// lands but the category removal fails, links are left correctly
    /// reassigned while the deleted category stays listed.
    async fn delete(&self, name: &str) -> Result<(), CategoryError> {
        let mut categories = self.load_all().await;
        categories.retain(|c| c != name);

        let links = self.links.list().await;
        if links.iter().any(|l| l.category == name) {
            let reassigned: Vec<_> = links
                .into_iter()
                .map(|mut link| {
                    if link.category == name {
                        link.category = FALLBACK_CATEGORY.to_string();
                    }
                    link
                })
                .collect();

            self.links
                .save_all(&reassigned)
                .await
                .map_err(|e| CategoryError::StoreError(e.to_string()))?;
        }

        self.save_all(&categories)
            .await
            .map_err(|e| CategoryError::StoreError(e.to_string()))
    }

    async fn is_in_use(&self, name: &str) -> bool {
        self.links.list().await.iter().any(|l| l.category == name)
    }

    async fn counts_by_category(&self) -> HashMap<String, usize> {
        let links = self.links.list().await;
        self.load_all()
            .await
            .into_iter()
            .map(|category| {
                let count = links.iter().filter(|l| l.category == category).count();
                (category, count)
            })
            .collect()
    }
}
