//! Derived validation-relevance metadata.
//!
//! This module owns the heart of the crate: [`MetadataCache`] runs the
//! recursive, cycle-aware derivation that decides which properties of a type
//! a validation walker must visit, and memoizes the result per type for the
//! lifetime of the process. [`PropertyMetadata`] is the immutable per-property
//! record those results are made of.

pub mod cache;
pub mod record;

// Re-export commonly used types
pub use cache::{CacheStats, MetadataCache, SharedMetadataCache};
pub use record::{PropertyMetadata, TypeMetadata};
