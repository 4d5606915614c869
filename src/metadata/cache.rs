//! The metadata cache and its derivation algorithm.
//!
//! For each requested type the cache derives, once, the ordered list of
//! properties a validation walker must visit, recursing through the type's
//! whole property graph. Derivation is depth-first with a traversal-local
//! cycle guard, so it terminates on self-referential and mutually-referential
//! type graphs, and results are memoized per type for the lifetime of the
//! process.

use crate::core::key::TypeKey;
use crate::introspect::registry::TypeIntrospector;
use crate::metadata::record::{PropertyMetadata, TypeMetadata};
use log::{debug, trace};
use parking_lot::{Mutex, RwLock};
use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// Cache statistics.
#[derive(Debug, Clone, Default)]
pub struct CacheStats {
    /// Number of lookups answered from the published map.
    pub hits: u64,
    /// Number of lookups that triggered a derivation.
    pub misses: u64,
    /// Number of type entries published so far.
    pub types_published: u64,
}

impl CacheStats {
    /// Calculate hit ratio.
    pub fn hit_ratio(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            return 0.0;
        }
        self.hits as f64 / total as f64
    }
}

/// Process-wide cache of derived type metadata.
///
/// The cache is an explicitly owned value: construct one over a
/// [`TypeIntrospector`] at application start, share it via
/// [`SharedMetadataCache`], and drop it at process end. Entries are created
/// lazily on first request and never evicted; type structure is assumed
/// static for the lifetime of the process.
///
/// Safe to call from any number of threads. Two concurrent first-time
/// requests for the same type may both run the derivation, but only the
/// first result is published and an entry, once published, never changes.
pub struct MetadataCache {
    introspector: Arc<dyn TypeIntrospector>,
    entries: RwLock<HashMap<TypeKey, TypeMetadata>>,
    stats: Mutex<CacheStats>,
}

impl MetadataCache {
    /// Create a new cache over an introspection capability.
    pub fn new(introspector: Arc<dyn TypeIntrospector>) -> Self {
        Self {
            introspector,
            entries: RwLock::new(HashMap::new()),
            stats: Mutex::new(CacheStats::default()),
        }
    }

    /// Get the metadata list for a type, deriving it on first request.
    ///
    /// The returned list contains one record per retained property, in
    /// declaration order (modulo pruned entries). A walker applies constraint
    /// checks where [`PropertyMetadata::has_constraint`] is set and descends
    /// into values (or each element, for enumerable properties) where
    /// [`PropertyMetadata::recurse`] is set.
    pub fn get(&self, ty: TypeKey) -> TypeMetadata {
        if let Some(found) = self.entries.read().get(&ty) {
            self.stats.lock().hits += 1;
            return found.clone();
        }
        self.stats.lock().misses += 1;

        let mut in_flight = HashSet::new();
        self.derive(ty, &mut in_flight);

        self.entries
            .read()
            .get(&ty)
            .cloned()
            .expect("a root derivation always publishes the requested type")
    }

    /// Get the metadata list for a statically known type.
    pub fn get_of<T: ?Sized + 'static>(&self) -> TypeMetadata {
        self.get(TypeKey::of::<T>())
    }

    /// Check whether a type's metadata has been published.
    pub fn contains(&self, ty: TypeKey) -> bool {
        self.entries.read().contains_key(&ty)
    }

    /// Number of published type entries.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Check if nothing has been derived yet.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Get cache statistics.
    pub fn stats(&self) -> CacheStats {
        self.stats.lock().clone()
    }

    /// Depth-first derivation of one type's metadata.
    ///
    /// `in_flight` is the cycle guard: the set of types currently being
    /// derived on this recursion path. It is local to one top-level [`get`]
    /// call and never shared across threads.
    ///
    /// [`get`]: Self::get
    fn derive(&self, ty: TypeKey, in_flight: &mut HashSet<TypeKey>) {
        if self.entries.read().contains_key(&ty) {
            return;
        }
        if !in_flight.insert(ty) {
            // Mid-derivation on this recursion path. This type contributes
            // nothing to the caller that encountered the cycle; its own
            // entry is completed further up the stack.
            return;
        }
        trace!("deriving property metadata for {}", ty);

        let mut retained: Vec<PropertyMetadata> = Vec::new();
        let mut deferred_self_reference = false;
        let mut retained_other = false;

        for property in self.introspector.properties(ty) {
            if property.is_indexed() {
                // Indexers carry no single addressable value.
                continue;
            }

            let element = self.introspector.element_type(property.property_type());
            if let Some(element) = element {
                self.derive(element, in_flight);
            }

            // A property of the very type being derived cannot be settled
            // before that type's own result exists. Record it provisionally;
            // the pruning pass below decides its fate.
            if property.property_type() == ty {
                retained.push(PropertyMetadata::new(
                    property.clone(),
                    property.is_constrained(),
                    true,
                    element,
                ));
                deferred_self_reference = true;
                continue;
            }

            self.derive(property.property_type(), in_flight);
            let nested = self.has_retained(property.property_type());
            let element_nested = element.map_or(false, |e| self.has_retained(e));
            let recurse = nested || element_nested;

            if recurse || property.is_constrained() {
                retained.push(PropertyMetadata::new(
                    property.clone(),
                    property.is_constrained(),
                    recurse,
                    if element_nested { element } else { None },
                ));
                retained_other = true;
            }
        }

        // Pruning pass: a self-reference is kept only if the type is
        // otherwise validation-relevant — through another retained property
        // or through the self-reference's own enumerated elements.
        if deferred_self_reference {
            retained.retain(|candidate| {
                let element_nested = candidate
                    .element_type()
                    .map_or(false, |e| self.has_retained(e));
                candidate.property_type() != ty || retained_other || element_nested
            });
        }

        debug!("publishing {} retained properties for {}", retained.len(), ty);
        let inserted = match self.entries.write().entry(ty) {
            Entry::Vacant(slot) => {
                slot.insert(retained.into());
                true
            }
            // Lost a publish race; the first result stands.
            Entry::Occupied(_) => false,
        };
        if inserted {
            self.stats.lock().types_published += 1;
        }

        in_flight.remove(&ty);
    }

    fn has_retained(&self, ty: TypeKey) -> bool {
        self.entries.read().get(&ty).map_or(false, |list| !list.is_empty())
    }
}

/// A shared metadata cache wrapped in Arc.
pub type SharedMetadataCache = Arc<MetadataCache>;
