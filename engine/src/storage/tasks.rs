use shared::Task;

use super::memory::MemoryStore;

/// Repository for the tasks catalog
#[derive(Clone)]
pub struct TaskStore {
    store: MemoryStore,
}

impl TaskStore {
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }

    pub fn insert(&self, task: Task) {
        self.store.write().tasks.push(task);
    }

    pub fn get(&self, task_id: &str) -> Option<Task> {
        self.store
            .read()
            .tasks
            .iter()
            .find(|t| t.id == task_id)
            .cloned()
    }

    /// Tasks owned by one child, in insertion order
    pub fn list_for(&self, child_id: &str) -> Vec<Task> {
        self.store
            .read()
            .tasks
            .iter()
            .filter(|t| t.child_id == child_id)
            .cloned()
            .collect()
    }

    /// Number of completed tasks owned by one child
    pub fn completed_count_for(&self, child_id: &str) -> u32 {
        self.store
            .read()
            .tasks
            .iter()
            .filter(|t| t.child_id == child_id && t.completed)
            .count() as u32
    }

    /// Replace the stored task carrying the same ID.
    /// Returns false when no such task exists.
    pub fn update(&self, task: &Task) -> bool {
        let mut inner = self.store.write();
        match inner.tasks.iter_mut().find(|t| t.id == task.id) {
            Some(slot) => {
                *slot = task.clone();
                true
            }
            None => false,
        }
    }

    /// Remove every task owned by the child; used by cascading deletion.
    /// Returns the number of tasks removed.
    pub fn delete_for_child(&self, child_id: &str) -> usize {
        let mut inner = self.store.write();
        let before = inner.tasks.len();
        inner.tasks.retain(|t| t.child_id != child_id);
        before - inner.tasks.len()
    }
}
