use shared::Child;

use super::memory::MemoryStore;

/// Repository for the children catalog
#[derive(Clone)]
pub struct ChildStore {
    store: MemoryStore,
}

impl ChildStore {
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }

    /// Insert a newly created child.
    ///
    /// Identifiers are generator-assigned, so collision is a design-time
    /// invariant rather than a runtime check.
    pub fn insert(&self, child: Child) {
        self.store.write().children.push(child);
    }

    pub fn get(&self, child_id: &str) -> Option<Child> {
        self.store
            .read()
            .children
            .iter()
            .find(|c| c.id == child_id)
            .cloned()
    }

    pub fn contains(&self, child_id: &str) -> bool {
        self.store.read().children.iter().any(|c| c.id == child_id)
    }

    /// All children ordered by name for consistent display
    pub fn list(&self) -> Vec<Child> {
        let mut children = self.store.read().children.clone();
        children.sort_by(|a, b| a.name.cmp(&b.name));
        children
    }

    /// Replace the stored child carrying the same ID.
    /// Returns false when no such child exists.
    pub fn update(&self, child: &Child) -> bool {
        let mut inner = self.store.write();
        match inner.children.iter_mut().find(|c| c.id == child.id) {
            Some(slot) => {
                *slot = child.clone();
                true
            }
            None => false,
        }
    }

    /// Remove a child by ID. Returns false when no such child exists.
    pub fn delete(&self, child_id: &str) -> bool {
        let mut inner = self.store.write();
        let before = inner.children.len();
        inner.children.retain(|c| c.id != child_id);
        inner.children.len() < before
    }
}
