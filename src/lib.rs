//! # Sieva - Type-Graph Relevance Analysis for Validation
//!
//! Sieva decides, for any structural type, which of its properties are worth
//! visiting during validation — and caches the answer. A validation walker
//! backed by Sieva skips every subtree of an object graph that cannot
//! possibly contain a constraint violation, instead of touching every
//! property of every object it encounters.
//!
//! ## Features
//!
//! - **Cycle-aware derivation**: terminates on self-referential and
//!   mutually-referential type graphs
//! - **Per-type memoization**: each type is analyzed at most once per
//!   process, safely under concurrent first requests
//! - **Order-stable results**: metadata lists follow property declaration
//!   order
//! - **Pluggable introspection**: the analysis is decoupled from any
//!   reflection mechanism through the `TypeIntrospector` trait
//! - **Enumeration support**: container properties are analyzed through
//!   their element type
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use sieva::prelude::*;
//! use std::sync::Arc;
//!
//! struct Customer {
//!     name: String,
//!     orders: Vec<Order>,
//! }
//!
//! struct Order {
//!     total: i64,
//! }
//!
//! // Describe the type graph
//! let mut registry = SchemaRegistry::new();
//! registry.register(
//!     TypeDescriptor::of::<Customer>()
//!         .property(PropertyDescriptor::new("name", |c: &Customer| &c.name).constrained())
//!         .property(PropertyDescriptor::new("orders", |c: &Customer| &c.orders)),
//! )?;
//! registry.register(TypeDescriptor::enumeration::<Vec<Order>, Order>())?;
//! registry.register(
//!     TypeDescriptor::of::<Order>()
//!         .property(PropertyDescriptor::new("total", |o: &Order| &o.total).constrained()),
//! )?;
//!
//! // Derive and cache relevance metadata
//! let cache = MetadataCache::new(Arc::new(registry));
//! for record in cache.get_of::<Customer>().iter() {
//!     if record.has_constraint() {
//!         // apply constraint checks to record.value(&instance)
//!     }
//!     if record.recurse() {
//!         // descend into the value, or into each element when
//!         // record.is_enumerable()
//!     }
//! }
//! ```
//!
//! ## Architecture
//!
//! The library is organized into three modules:
//!
//! - [`core`]: type identity handles and error types
//! - [`introspect`]: the type-graph introspection capability, the schema
//!   registry, and descriptive schema snapshots
//! - [`metadata`]: the metadata cache, its derivation algorithm, and the
//!   immutable property metadata records it produces
//!
//! ## Custom Introspectors
//!
//! The bundled [`SchemaRegistry`](introspect::SchemaRegistry) describes types
//! through explicit registration. Any other source of type structure — a
//! derive macro, generated code, a schema file — can drive the cache by
//! implementing [`TypeIntrospector`](introspect::TypeIntrospector):
//!
//! ```rust,ignore
//! use sieva::prelude::*;
//!
//! struct GeneratedSchema {
//!     // tables produced at build time
//! }
//!
//! impl TypeIntrospector for GeneratedSchema {
//!     fn properties(&self, ty: TypeKey) -> &[PropertyDescriptor] {
//!         self.lookup(ty).map_or(&[], |entry| &entry.properties)
//!     }
//!
//!     fn element_type(&self, ty: TypeKey) -> Option<TypeKey> {
//!         self.lookup(ty).and_then(|entry| entry.element)
//!     }
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod core;
pub mod introspect;
pub mod metadata;

/// Prelude module for convenient imports.
///
/// Import everything commonly needed with:
/// ```rust,ignore
/// use sieva::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use crate::core::error::{SchemaError, SchemaResult, SievaError, SievaResult};
    pub use crate::core::key::TypeKey;

    // Introspection
    pub use crate::introspect::descriptor::{Accessor, PropertyDescriptor, TypeDescriptor};
    pub use crate::introspect::registry::{SchemaRegistry, TypeIntrospector};
    pub use crate::introspect::serialization::{
        SerializedProperty, SerializedSchema, SerializedType,
    };

    // Metadata
    pub use crate::metadata::cache::{CacheStats, MetadataCache, SharedMetadataCache};
    pub use crate::metadata::record::{PropertyMetadata, TypeMetadata};
}

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
