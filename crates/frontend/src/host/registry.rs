//! Registry of live widget instances keyed by the host's mount handle.

/// Identifier assigned to every mounted instance; never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InstanceId(u64);

struct Entry<H, R> {
    handle: H,
    id: InstanceId,
    resource: R,
}

/// Explicit handle → resource mapping with insert-on-mount / remove-on-unmount.
///
/// Handles only need `PartialEq` (DOM elements compare by identity), so
/// lookups are linear; a page hosts a handful of instances at most.
pub struct InstanceRegistry<H, R> {
    entries: Vec<Entry<H, R>>,
    next_id: u64,
}

impl<H: PartialEq, R> Default for InstanceRegistry<H, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: PartialEq, R> InstanceRegistry<H, R> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
        }
    }

    /// Reserve the id of the next instance before its resource exists.
    pub fn allocate_id(&mut self) -> InstanceId {
        let id = InstanceId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Register `resource` for `handle`. A previous entry for the same handle
    /// is replaced and returned so the caller can release it.
    pub fn insert(&mut self, handle: H, id: InstanceId, resource: R) -> Option<R> {
        let previous = self.remove(&handle);
        self.entries.push(Entry {
            handle,
            id,
            resource,
        });
        previous
    }

    pub fn id_of(&self, handle: &H) -> Option<InstanceId> {
        self.entries.iter().find(|e| e.handle == *handle).map(|e| e.id)
    }

    pub fn get(&self, handle: &H) -> Option<&R> {
        self.entries
            .iter()
            .find(|e| e.handle == *handle)
            .map(|e| &e.resource)
    }

    pub fn get_mut(&mut self, handle: &H) -> Option<&mut R> {
        self.entries
            .iter_mut()
            .find(|e| e.handle == *handle)
            .map(|e| &mut e.resource)
    }

    pub fn get_by_id(&self, id: InstanceId) -> Option<&R> {
        self.entries
            .iter()
            .find(|e| e.id == id)
            .map(|e| &e.resource)
    }

    pub fn remove(&mut self, handle: &H) -> Option<R> {
        let index = self.entries.iter().position(|e| e.handle == *handle)?;
        Some(self.entries.swap_remove(index).resource)
    }

    /// Remove by id, so a stale teardown cannot release a newer instance
    /// mounted on the same handle.
    pub fn remove_by_id(&mut self, id: InstanceId) -> Option<R> {
        let index = self.entries.iter().position(|e| e.id == id)?;
        Some(self.entries.swap_remove(index).resource)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
