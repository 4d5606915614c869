//! Schema registry: the bundled [`TypeIntrospector`] implementation.

use crate::core::error::{SchemaError, SchemaResult};
use crate::core::key::TypeKey;
use crate::introspect::descriptor::{PropertyDescriptor, TypeDescriptor};
use crate::introspect::serialization::SerializedSchema;
use indexmap::IndexMap;
use std::collections::HashSet;

/// Capability for walking a type graph.
///
/// The metadata cache sees types only through this trait: the ordered list of
/// a type's declared properties, and the element type of a type that
/// enumerates nested values. Implementations must treat type handles they
/// cannot describe as leaves (no properties, no element type) or surface
/// their own failure; the cache does not catch or reinterpret either.
///
/// Returned properties must be in declaration order and may include indexed
/// properties — the cache skips those itself.
pub trait TypeIntrospector: Send + Sync {
    /// The declared properties of `ty`, in declaration order.
    fn properties(&self, ty: TypeKey) -> &[PropertyDescriptor];

    /// The element type of `ty`, if `ty` enumerates nested values.
    fn element_type(&self, ty: TypeKey) -> Option<TypeKey>;
}

/// Registry of type descriptions.
///
/// Types are registered up front, before the registry is shared with a
/// metadata cache; type structure is assumed static for the lifetime of the
/// process. Types never registered — primitives, foreign types — are leaves.
///
/// Iteration follows registration order.
pub struct SchemaRegistry {
    types: IndexMap<TypeKey, TypeDescriptor>,
}

impl SchemaRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            types: IndexMap::new(),
        }
    }

    /// Register a type description.
    ///
    /// Rejects a second registration for the same type and duplicate property
    /// names within the description, leaving the registry unchanged.
    pub fn register(&mut self, descriptor: TypeDescriptor) -> SchemaResult<()> {
        let key = descriptor.key();
        if self.types.contains_key(&key) {
            return Err(SchemaError::DuplicateType(key.name()));
        }

        let mut seen = HashSet::new();
        for property in descriptor.properties() {
            if !seen.insert(property.name()) {
                return Err(SchemaError::DuplicateProperty {
                    ty: key.name(),
                    property: property.name().to_string(),
                });
            }
        }

        self.types.insert(key, descriptor);
        Ok(())
    }

    /// Get the description of a registered type.
    pub fn descriptor(&self, ty: TypeKey) -> Option<&TypeDescriptor> {
        self.types.get(&ty)
    }

    /// Check whether a type is registered.
    pub fn contains(&self, ty: TypeKey) -> bool {
        self.types.contains_key(&ty)
    }

    /// All registered type keys, in registration order.
    pub fn type_keys(&self) -> impl Iterator<Item = TypeKey> + '_ {
        self.types.keys().copied()
    }

    /// All registered descriptors, in registration order.
    pub fn descriptors(&self) -> impl Iterator<Item = &TypeDescriptor> {
        self.types.values()
    }

    /// Number of registered types.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Descriptive snapshot of the registry for diagnostics and tooling.
    pub fn snapshot(&self) -> SerializedSchema {
        SerializedSchema::from(self)
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeIntrospector for SchemaRegistry {
    fn properties(&self, ty: TypeKey) -> &[PropertyDescriptor] {
        self.types.get(&ty).map_or(&[], |d| d.properties())
    }

    fn element_type(&self, ty: TypeKey) -> Option<TypeKey> {
        self.types.get(&ty).and_then(|d| d.element_type())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Customer {
        name: String,
    }
    struct Order;

    fn customer_descriptor() -> TypeDescriptor {
        TypeDescriptor::of::<Customer>()
            .property(PropertyDescriptor::new("name", |c: &Customer| &c.name).constrained())
    }

    #[test]
    fn test_register_and_lookup() {
        let mut registry = SchemaRegistry::new();
        registry.register(customer_descriptor()).unwrap();

        assert!(registry.contains(TypeKey::of::<Customer>()));
        assert_eq!(registry.len(), 1);

        let descriptor = registry.descriptor(TypeKey::of::<Customer>()).unwrap();
        assert_eq!(descriptor.properties().len(), 1);
    }

    #[test]
    fn test_duplicate_type_rejected() {
        let mut registry = SchemaRegistry::new();
        registry.register(customer_descriptor()).unwrap();

        let err = registry.register(customer_descriptor()).unwrap_err();
        assert!(matches!(err, SchemaError::DuplicateType(_)));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_duplicate_property_rejected() {
        let mut registry = SchemaRegistry::new();
        let descriptor = TypeDescriptor::of::<Order>()
            .property(PropertyDescriptor::opaque("id", TypeKey::of::<u64>()))
            .property(PropertyDescriptor::opaque("id", TypeKey::of::<String>()));

        let err = registry.register(descriptor).unwrap_err();
        assert!(matches!(err, SchemaError::DuplicateProperty { .. }));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_introspector_unknown_type_is_leaf() {
        let registry = SchemaRegistry::new();
        assert!(registry.properties(TypeKey::of::<String>()).is_empty());
        assert!(registry.element_type(TypeKey::of::<String>()).is_none());
    }

    #[test]
    fn test_introspector_element_type() {
        let mut registry = SchemaRegistry::new();
        registry
            .register(TypeDescriptor::enumeration::<Vec<Customer>, Customer>())
            .unwrap();

        assert_eq!(
            registry.element_type(TypeKey::of::<Vec<Customer>>()),
            Some(TypeKey::of::<Customer>())
        );
    }

    #[test]
    fn test_properties_in_declaration_order() {
        let mut registry = SchemaRegistry::new();
        registry
            .register(
                TypeDescriptor::of::<Order>()
                    .property(PropertyDescriptor::opaque("id", TypeKey::of::<u64>()))
                    .property(PropertyDescriptor::opaque("customer", TypeKey::of::<Customer>()))
                    .property(PropertyDescriptor::opaque("memo", TypeKey::of::<String>())),
            )
            .unwrap();

        let names: Vec<_> = registry
            .properties(TypeKey::of::<Order>())
            .iter()
            .map(|p| p.name())
            .collect();
        assert_eq!(names, ["id", "customer", "memo"]);
    }
}
