//! Type identity handles.
//!
//! A [`TypeKey`] uniquely identifies a structural type. It is the only thing
//! the metadata cache knows about a type: a hashable, comparable handle used
//! as a cache key and for cycle detection. The core never instantiates the
//! type behind a key.

use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Unique identity of a structural type.
///
/// Wraps [`std::any::TypeId`] together with the static type name. Identity
/// (equality and hashing) is decided by the `TypeId` alone; the name is
/// carried for display and logging.
#[derive(Clone, Copy)]
pub struct TypeKey {
    id: TypeId,
    name: &'static str,
}

impl TypeKey {
    /// Get the key for a type.
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// The full type name, as reported by the compiler.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The underlying [`TypeId`].
    pub fn id(&self) -> TypeId {
        self.id
    }
}

impl PartialEq for TypeKey {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeKey {}

impl Hash for TypeKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TypeKey").field(&self.name).finish()
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
