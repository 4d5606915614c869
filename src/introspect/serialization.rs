//! Schema snapshots for diagnostics and tooling.
//!
//! A snapshot is a descriptive mirror of a registry: type and property names
//! plus their flags. Accessors and [`TypeKey`]s do not survive serialization,
//! so a deserialized snapshot documents a schema rather than reconstructing
//! one.
//!
//! [`TypeKey`]: crate::core::key::TypeKey

use crate::introspect::registry::SchemaRegistry;
use serde::{Deserialize, Serialize};

/// Serializable representation of one property.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SerializedProperty {
    /// Property name
    pub name: String,
    /// Declared property type name
    pub ty: String,
    /// Whether the property carries a validation constraint
    pub constrained: bool,
    /// Whether the property is indexed
    pub indexed: bool,
}

/// Serializable representation of one type description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SerializedType {
    /// Type name
    pub name: String,
    /// Element type name, for container types
    pub element: Option<String>,
    /// Declared properties, in declaration order
    pub properties: Vec<SerializedProperty>,
}

/// Serializable representation of a complete registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SerializedSchema {
    /// Snapshot format version
    pub version: String,
    /// All registered types, in registration order
    pub types: Vec<SerializedType>,
}

impl SerializedSchema {
    /// Current snapshot format version.
    pub const VERSION: &'static str = "1.0.0";

    /// Create a new empty snapshot.
    pub fn new() -> Self {
        Self {
            version: Self::VERSION.to_string(),
            types: Vec::new(),
        }
    }

    /// Serialize to JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Serialize to compact JSON (no whitespace).
    pub fn to_json_compact(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserialize from JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl Default for SerializedSchema {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&SchemaRegistry> for SerializedSchema {
    fn from(registry: &SchemaRegistry) -> Self {
        let types = registry
            .descriptors()
            .map(|descriptor| SerializedType {
                name: descriptor.key().name().to_string(),
                element: descriptor.element_type().map(|e| e.name().to_string()),
                properties: descriptor
                    .properties()
                    .iter()
                    .map(|property| SerializedProperty {
                        name: property.name().to_string(),
                        ty: property.property_type().name().to_string(),
                        constrained: property.is_constrained(),
                        indexed: property.is_indexed(),
                    })
                    .collect(),
            })
            .collect();

        Self {
            version: Self::VERSION.to_string(),
            types,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::key::TypeKey;
    use crate::introspect::descriptor::{PropertyDescriptor, TypeDescriptor};

    struct Shipment {
        address: String,
    }

    #[test]
    fn test_snapshot_mirrors_registry() {
        let mut registry = SchemaRegistry::new();
        registry
            .register(
                TypeDescriptor::of::<Shipment>().property(
                    PropertyDescriptor::new("address", |s: &Shipment| &s.address).constrained(),
                ),
            )
            .unwrap();
        registry
            .register(TypeDescriptor::enumeration::<Vec<Shipment>, Shipment>())
            .unwrap();

        let snapshot = registry.snapshot();
        assert_eq!(snapshot.version, SerializedSchema::VERSION);
        assert_eq!(snapshot.types.len(), 2);

        let shipment = &snapshot.types[0];
        assert!(shipment.name.contains("Shipment"));
        assert_eq!(shipment.properties.len(), 1);
        assert!(shipment.properties[0].constrained);

        let container = &snapshot.types[1];
        assert!(container.element.as_deref().unwrap().contains("Shipment"));
    }

    #[test]
    fn test_json_round_trip() {
        let mut registry = SchemaRegistry::new();
        registry
            .register(
                TypeDescriptor::of::<Shipment>()
                    .property(PropertyDescriptor::opaque("address", TypeKey::of::<String>())),
            )
            .unwrap();

        let json = registry.snapshot().to_json().unwrap();
        assert!(json.contains("address"));

        let restored = SerializedSchema::from_json(&json).unwrap();
        assert_eq!(restored.types.len(), 1);
        assert_eq!(restored.types[0].properties[0].name, "address");
    }
}
