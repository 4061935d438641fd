//! Linkshelf — storage core for a personal bookmark organizer.
//!
//! This library crate owns the persistence and consistency layer: link
//! records, category labels, the referential consistency between them, and
//! the derived views (recent, featured, by-category, per-category counts).
//! The presentation layer is an external caller and is not part of this
//! crate.

pub mod platform;
pub mod repositories;
pub mod storage;
pub mod types;
