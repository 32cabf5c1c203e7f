use anyhow::Result;
use fray_data::Id;
use hashbrown::HashMap;

use crate::error::not_found_error;

/// A lookup table for one kind of resource, keyed by [`Id`].
///
/// All resources are registered up front when the [`Dex`][`crate::dex::Dex`] is constructed, so
/// lookups never allocate.
#[derive(Debug)]
pub struct ResourceMap<T> {
    kind: &'static str,
    resources: HashMap<Id, T>,
}

impl<T> ResourceMap<T> {
    /// Creates an empty map for resources of the given kind.
    ///
    /// The kind appears in lookup errors, such as `move tackle not found`.
    pub fn new(kind: &'static str) -> Self {
        Self {
            kind,
            resources: HashMap::new(),
        }
    }

    /// Registers a resource, replacing any previous resource with the same id.
    pub fn register(&mut self, id: Id, resource: T) {
        self.resources.insert(id, resource);
    }

    /// Looks up a resource by id.
    ///
    /// Fails with a [`NotFoundError`][`crate::error::NotFoundError`] if no such resource is
    /// registered.
    pub fn get(&self, id: &Id) -> Result<&T> {
        self.resources
            .get(id)
            .ok_or_else(|| not_found_error(format!("{} {id}", self.kind)))
    }

    /// Checks if a resource with the given id is registered.
    pub fn contains(&self, id: &Id) -> bool {
        self.resources.contains_key(id)
    }

    /// Iterates over all registered resources, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&Id, &T)> {
        self.resources.iter()
    }

    /// The number of registered resources.
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    /// Checks if the map has no resources.
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}
