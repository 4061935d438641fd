use serde::{Deserialize, Serialize};

/// Represents a saved link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    pub id: String,
    pub title: String,
    pub url: String,
    /// Free-text category label. Not foreign-key checked against the
    /// category collection; reconciled only when a category is deleted.
    pub category: String,
    pub is_featured: bool,
    /// Milliseconds since the UNIX epoch, captured once at creation.
    pub created_at: i64,
    #[serde(flatten)]
    pub icon: LinkIcon,
}

/// How a link's icon is rendered.
///
/// Serialized as an `iconType`/`iconValue` field pair on the link record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "iconType", content = "iconValue", rename_all = "lowercase")]
pub enum LinkIcon {
    /// Literal initials text, e.g. `"GH"`.
    Initials(String),
    /// A local image reference.
    Gallery(String),
    /// A remote image URL.
    Url(String),
}

/// Draft accepted by `LinkRepository::add`. The repository assigns
/// `id` and `created_at`.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub title: String,
    pub url: String,
    pub category: String,
    pub is_featured: bool,
    pub icon: LinkIcon,
}
