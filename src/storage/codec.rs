// Linkshelf serialization codec
// Converts the link and category collections to/from the JSON text stored
// in the backing store, and defines the two fixed store keys.

use crate::types::errors::StorageError;
use crate::types::link::Link;

/// Store key holding the serialized link collection.
pub const LINKS_KEY: &str = "links";

/// Store key holding the serialized category collection.
pub const CATEGORIES_KEY: &str = "categories";

/// Serializes the link collection as a JSON array.
pub fn encode_links(links: &[Link]) -> Result<String, StorageError> {
    serde_json::to_string(links)
        .map_err(|e| StorageError::Serialization(format!("Failed to serialize links: {}", e)))
}

/// Deserializes a link collection from its stored JSON text.
pub fn decode_links(raw: &str) -> Result<Vec<Link>, StorageError> {
    serde_json::from_str(raw)
        .map_err(|e| StorageError::Serialization(format!("Failed to parse links: {}", e)))
}

/// Serializes the category name collection as a JSON array.
pub fn encode_categories(categories: &[String]) -> Result<String, StorageError> {
    serde_json::to_string(categories).map_err(|e| {
        StorageError::Serialization(format!("Failed to serialize categories: {}", e))
    })
}

/// Deserializes a category name collection from its stored JSON text.
pub fn decode_categories(raw: &str) -> Result<Vec<String>, StorageError> {
    serde_json::from_str(raw)
        .map_err(|e| StorageError::Serialization(format!("Failed to parse categories: {}", e)))
}
