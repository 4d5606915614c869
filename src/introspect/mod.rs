//! Type-graph introspection.
//!
//! The metadata cache is decoupled from any specific reflection mechanism
//! through the [`TypeIntrospector`] capability: "enumerate the properties of
//! a type" and "get the enumeration element type of a type, if any". The
//! bundled [`SchemaRegistry`] implements the capability over explicitly
//! registered type descriptions, which also makes synthetic type-graph
//! fixtures ordinary registry values.

pub mod descriptor;
pub mod registry;
pub mod serialization;

// Re-export commonly used types
pub use descriptor::{Accessor, PropertyDescriptor, TypeDescriptor};
pub use registry::{SchemaRegistry, TypeIntrospector};
pub use serialization::{SerializedProperty, SerializedSchema, SerializedType};
