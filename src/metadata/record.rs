//! Property metadata records.

use crate::core::key::TypeKey;
use crate::introspect::descriptor::PropertyDescriptor;
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Relevance metadata for one retained property.
///
/// Records are constructed during derivation and never mutated after being
/// published in a type's metadata list. A property is retained because it
/// carries a validation constraint directly, because descending into its
/// value (or each element of an enumerable value) leads to validation-relevant
/// nested data, or both.
#[derive(Clone)]
pub struct PropertyMetadata {
    property: PropertyDescriptor,
    has_constraint: bool,
    recurse: bool,
    element: Option<TypeKey>,
}

impl PropertyMetadata {
    pub(crate) fn new(
        property: PropertyDescriptor,
        has_constraint: bool,
        recurse: bool,
        element: Option<TypeKey>,
    ) -> Self {
        Self {
            property,
            has_constraint,
            recurse,
            element,
        }
    }

    /// The underlying property descriptor.
    pub fn descriptor(&self) -> &PropertyDescriptor {
        &self.property
    }

    /// The property name.
    pub fn name(&self) -> &str {
        self.property.name()
    }

    /// The declared property type.
    pub fn property_type(&self) -> TypeKey {
        self.property.property_type()
    }

    /// Whether the property itself carries a validation constraint.
    pub fn has_constraint(&self) -> bool {
        self.has_constraint
    }

    /// Whether a walker must descend into the property's value (or each
    /// element of an enumerable value).
    pub fn recurse(&self) -> bool {
        self.recurse
    }

    /// The element type, if the property enumerates nested values worth
    /// descending into.
    pub fn element_type(&self) -> Option<TypeKey> {
        self.element
    }

    /// Whether the property is an enumeration of a nested type.
    pub fn is_enumerable(&self) -> bool {
        self.element.is_some()
    }

    /// Read the property's current value off an instance of its declaring
    /// type, through the bound accessor.
    pub fn value<'a>(&self, instance: &'a dyn Any) -> Option<&'a dyn Any> {
        self.property.value(instance)
    }
}

impl fmt::Debug for PropertyMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyMetadata")
            .field("name", &self.property.name())
            .field("ty", &self.property.property_type())
            .field("has_constraint", &self.has_constraint)
            .field("recurse", &self.recurse)
            .field("element", &self.element)
            .finish()
    }
}

/// Ordered, immutable metadata list for one type, shared between the cache
/// and its callers.
pub type TypeMetadata = Arc<[PropertyMetadata]>;
