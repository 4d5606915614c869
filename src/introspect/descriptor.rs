//! Property and type descriptors.
//!
//! Descriptors are the raw material of relevance analysis: a
//! [`PropertyDescriptor`] names one property, carries its declared type, the
//! opaque "has a validation constraint" flag, and a bound accessor that reads
//! the property's current value off an instance. A [`TypeDescriptor`] bundles
//! a type's ordered property list together with its enumeration element type,
//! if the type is a container of nested values.

use crate::core::key::TypeKey;
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Bound accessor reading a property value off an instance.
///
/// The instance is expected to be of the property's declaring type; any other
/// instance (or an unset optional value) yields `None`.
pub type Accessor = Arc<dyn for<'a> Fn(&'a dyn Any) -> Option<&'a dyn Any> + Send + Sync>;

fn accessor_from(
    read: impl for<'a> Fn(&'a dyn Any) -> Option<&'a dyn Any> + Send + Sync + 'static,
) -> Accessor {
    Arc::new(read)
}

/// Description of a single property of a structural type.
///
/// Construction follows the builder style: start from [`new`](Self::new),
/// [`optional`](Self::optional), or [`opaque`](Self::opaque), then chain
/// [`constrained`](Self::constrained) / [`indexed`](Self::indexed) as needed.
#[derive(Clone)]
pub struct PropertyDescriptor {
    name: String,
    ty: TypeKey,
    constrained: bool,
    indexed: bool,
    accessor: Accessor,
}

impl PropertyDescriptor {
    /// Describe a property backed by a plain field getter.
    ///
    /// `T` is the declaring type, `P` the declared property type.
    pub fn new<T: 'static, P: 'static>(name: impl Into<String>, get: fn(&T) -> &P) -> Self {
        Self {
            name: name.into(),
            ty: TypeKey::of::<P>(),
            constrained: false,
            indexed: false,
            accessor: accessor_from(move |instance| {
                instance.downcast_ref::<T>().map(|target| get(target) as &dyn Any)
            }),
        }
    }

    /// Describe a property whose value may be absent.
    ///
    /// The declared property type is `P`, not the wrapping `Option`; an unset
    /// value reads as `None`.
    pub fn optional<T: 'static, P: 'static>(
        name: impl Into<String>,
        get: fn(&T) -> Option<&P>,
    ) -> Self {
        Self {
            name: name.into(),
            ty: TypeKey::of::<P>(),
            constrained: false,
            indexed: false,
            accessor: accessor_from(move |instance| {
                instance
                    .downcast_ref::<T>()
                    .and_then(|target| get(target).map(|value| value as &dyn Any))
            }),
        }
    }

    /// Describe a property without a value accessor.
    ///
    /// Useful for schema-only analysis and type-graph fixtures where no
    /// instances are ever read; the accessor always yields `None`.
    pub fn opaque(name: impl Into<String>, ty: TypeKey) -> Self {
        Self {
            name: name.into(),
            ty,
            constrained: false,
            indexed: false,
            accessor: accessor_from(|_| None),
        }
    }

    /// Describe a property with a custom accessor.
    pub fn with_accessor(name: impl Into<String>, ty: TypeKey, accessor: Accessor) -> Self {
        Self {
            name: name.into(),
            ty,
            constrained: false,
            indexed: false,
            accessor,
        }
    }

    /// Mark the property as carrying a validation constraint.
    pub fn constrained(mut self) -> Self {
        self.constrained = true;
        self
    }

    /// Mark the property as indexed.
    ///
    /// Indexed properties take index parameters and have no single
    /// addressable value; the metadata cache skips them entirely.
    pub fn indexed(mut self) -> Self {
        self.indexed = true;
        self
    }

    /// The property name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared property type.
    pub fn property_type(&self) -> TypeKey {
        self.ty
    }

    /// Whether the property carries a validation constraint.
    pub fn is_constrained(&self) -> bool {
        self.constrained
    }

    /// Whether the property is indexed.
    pub fn is_indexed(&self) -> bool {
        self.indexed
    }

    /// Read the property's current value off an instance.
    pub fn value<'a>(&self, instance: &'a dyn Any) -> Option<&'a dyn Any> {
        (self.accessor)(instance)
    }

    /// The bound accessor itself.
    pub fn accessor(&self) -> &Accessor {
        &self.accessor
    }
}

impl fmt::Debug for PropertyDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyDescriptor")
            .field("name", &self.name)
            .field("ty", &self.ty)
            .field("constrained", &self.constrained)
            .field("indexed", &self.indexed)
            .finish()
    }
}

/// Description of one structural type: its ordered properties and, for
/// container types, the element type it enumerates.
#[derive(Debug, Clone)]
pub struct TypeDescriptor {
    ty: TypeKey,
    element: Option<TypeKey>,
    properties: Vec<PropertyDescriptor>,
}

impl TypeDescriptor {
    /// Start describing a type.
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            ty: TypeKey::of::<T>(),
            element: None,
            properties: Vec::new(),
        }
    }

    /// Describe a container type `C` that enumerates elements of type `E`.
    pub fn enumeration<C: ?Sized + 'static, E: ?Sized + 'static>() -> Self {
        Self {
            ty: TypeKey::of::<C>(),
            element: Some(TypeKey::of::<E>()),
            properties: Vec::new(),
        }
    }

    /// Set the enumeration element type.
    pub fn element<E: ?Sized + 'static>(mut self) -> Self {
        self.element = Some(TypeKey::of::<E>());
        self
    }

    /// Append a property. Declaration order is preserved and is the order
    /// derived metadata is reported in.
    pub fn property(mut self, property: PropertyDescriptor) -> Self {
        self.properties.push(property);
        self
    }

    /// The described type.
    pub fn key(&self) -> TypeKey {
        self.ty
    }

    /// The enumeration element type, if the type is a container.
    pub fn element_type(&self) -> Option<TypeKey> {
        self.element
    }

    /// The declared properties, in declaration order.
    pub fn properties(&self) -> &[PropertyDescriptor] {
        &self.properties
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Invoice {
        number: String,
        total: i64,
        memo: Option<String>,
    }

    fn invoice() -> Invoice {
        Invoice {
            number: "INV-7".to_string(),
            total: 1200,
            memo: None,
        }
    }

    #[test]
    fn test_accessor_reads_field() {
        let descriptor = PropertyDescriptor::new("number", |i: &Invoice| &i.number);
        let instance = invoice();

        let value = descriptor.value(&instance).unwrap();
        assert_eq!(value.downcast_ref::<String>().unwrap(), "INV-7");
        assert_eq!(descriptor.property_type(), TypeKey::of::<String>());
    }

    #[test]
    fn test_optional_accessor() {
        let descriptor = PropertyDescriptor::optional("memo", |i: &Invoice| i.memo.as_ref());

        let unset = invoice();
        assert!(descriptor.value(&unset).is_none());

        let set = Invoice {
            memo: Some("rush order".to_string()),
            ..invoice()
        };
        let value = descriptor.value(&set).unwrap();
        assert_eq!(value.downcast_ref::<String>().unwrap(), "rush order");
    }

    #[test]
    fn test_accessor_rejects_foreign_instance() {
        let descriptor = PropertyDescriptor::new("total", |i: &Invoice| &i.total);
        let not_an_invoice = "just a string".to_string();
        assert!(descriptor.value(&not_an_invoice).is_none());
    }

    #[test]
    fn test_builder_flags() {
        let descriptor = PropertyDescriptor::opaque("items", TypeKey::of::<Vec<i64>>())
            .constrained()
            .indexed();
        assert!(descriptor.is_constrained());
        assert!(descriptor.is_indexed());
    }

    #[test]
    fn test_enumeration_descriptor() {
        let descriptor = TypeDescriptor::enumeration::<Vec<Invoice>, Invoice>();
        assert_eq!(descriptor.key(), TypeKey::of::<Vec<Invoice>>());
        assert_eq!(descriptor.element_type(), Some(TypeKey::of::<Invoice>()));
        assert!(descriptor.properties().is_empty());
    }

    #[test]
    fn test_declaration_order_preserved() {
        let descriptor = TypeDescriptor::of::<Invoice>()
            .property(PropertyDescriptor::new("number", |i: &Invoice| &i.number))
            .property(PropertyDescriptor::new("total", |i: &Invoice| &i.total));

        let names: Vec<_> = descriptor.properties().iter().map(|p| p.name()).collect();
        assert_eq!(names, ["number", "total"]);
    }
}
