//! Link Repository for Linkshelf.
//!
//! Implements `LinkRepositoryTrait` — CRUD and derived queries for link
//! records, backed by a [`KeyValueStore`].
//!
//! Every operation loads the entire collection, works on it in memory, and
//! (for mutations) writes the entire collection back. Read paths fail soft:
//! a store or decode failure yields an empty collection so callers always
//! have something to render. Write failures propagate.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use async_trait::async_trait;
use tracing::warn;
use uuid::Uuid;

use crate::storage::codec::{self, LINKS_KEY};
use crate::storage::store::KeyValueStore;
use crate::types::errors::StorageError;
use crate::types::link::{Link, NewLink};

/// Conventional limit for [`LinkRepositoryTrait::recent`].
pub const DEFAULT_RECENT_LIMIT: usize = 10;

/// Trait defining link repository operations.
#[async_trait]
pub trait LinkRepositoryTrait {
    /// All links, insertion order as stored. Empty on read failure.
    async fn list(&self) -> Vec<Link>;
    /// Assigns a fresh id and creation timestamp, appends, persists, and
    /// returns the created record.
    async fn add(&self, draft: NewLink) -> Result<Link, StorageError>;
    /// Replaces the stored record whose id matches; no-op if none does.
    async fn update(&self, link: Link) -> Result<(), StorageError>;
    /// Removes the record with the given id; no-op if absent.
    async fn delete(&self, id: &str) -> Result<(), StorageError>;
    /// Links ordered by creation time descending, truncated to `limit`.
    /// Ties keep storage order.
    async fn recent(&self, limit: usize) -> Vec<Link>;
    /// The featured subset, in storage order.
    async fn featured(&self) -> Vec<Link>;
    /// Links whose category exactly equals `category`.
    async fn by_category(&self, category: &str) -> Vec<Link>;
    /// Distinct category values actually present across links. This is a
    /// view over link data and can diverge from the category repository's
    /// authoritative list.
    async fn unique_categories_in_use(&self) -> HashSet<String>;
}

/// Link repository backed by a key-value store.
pub struct LinkRepository {
    store: Arc<dyn KeyValueStore>,
}

impl LinkRepository {
    /// Creates a new `LinkRepository` using the provided backing store.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Returns the current UNIX timestamp in milliseconds.
    fn now_millis() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as i64
    }

    /// Loads the full link collection, substituting the empty collection on
    /// read or decode failure.
    pub(crate) async fn load_all(&self) -> Vec<Link> {
        match self.store.get(LINKS_KEY).await {
            Ok(Some(raw)) => match codec::decode_links(&raw) {
                Ok(links) => links,
                Err(e) => {
                    warn!("discarding undecodable link collection: {}", e);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("failed to read links from store: {}", e);
                Vec::new()
            }
        }
    }

    /// Persists the full link collection.
    pub(crate) async fn save_all(&self, links: &[Link]) -> Result<(), StorageError> {
        let raw = codec::encode_links(links)?;
        self.store.set(LINKS_KEY, &raw).await
    }
}

#[async_trait]
impl LinkRepositoryTrait for LinkRepository {
    async fn list(&self) -> Vec<Link> {
        self.load_all().await
    }

    async fn add(&self, draft: NewLink) -> Result<Link, StorageError> {
        let mut links = self.load_all().await;

        let link = Link {
            id: Uuid::new_v4().to_string(),
            title: draft.title,
            url: draft.url,
            category: draft.category,
            is_featured: draft.is_featured,
            created_at: Self::now_millis(),
            icon: draft.icon,
        };

        links.push(link.clone());
        self.save_all(&links).await?;
        Ok(link)
    }

    async fn update(&self, link: Link) -> Result<(), StorageError> {
        let mut links = self.load_all().await;
        if let Some(slot) = links.iter_mut().find(|l| l.id == link.id) {
            *slot = link;
        }
        self.save_all(&links).await
    }

    async fn delete(&self, id: &str) -> Result<(), StorageError> {
        let mut links = self.load_all().await;
        links.retain(|l| l.id != id);
        self.save_all(&links).await
    }

    async fn recent(&self, limit: usize) -> Vec<Link> {
        let mut links = self.load_all().await;
        // Stable sort: equal timestamps keep storage order
        links.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        links.truncate(limit);
        links
    }

    async fn featured(&self) -> Vec<Link> {
        self.load_all()
            .await
            .into_iter()
            .filter(|l| l.is_featured)
            .collect()
    }

    async fn by_category(&self, category: &str) -> Vec<Link> {
        self.load_all()
            .await
            .into_iter()
            .filter(|l| l.category == category)
            .collect()
    }

    async fn unique_categories_in_use(&self) -> HashSet<String> {
        self.load_all()
            .await
            .into_iter()
            .map(|l| l.category)
            .collect()
    }
}
