use shared::Transaction;

use super::memory::MemoryStore;

/// Append-only record of monetary movements.
///
/// There is deliberately no update and no single-entry delete on this type:
/// financial history is immutable once written. `purge_for` exists only to
/// serve cascading child deletion.
#[derive(Clone)]
pub struct Ledger {
    store: MemoryStore,
}

impl Ledger {
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }

    /// Append a well-formed entry. Always succeeds.
    pub fn append(&self, entry: Transaction) {
        self.store.write().transactions.push(entry);
    }

    /// Entries owned by one child, in insertion order.
    /// Callers sort by recency for display.
    pub fn entries_for(&self, child_id: &str) -> Vec<Transaction> {
        self.store
            .read()
            .transactions
            .iter()
            .filter(|t| t.child_id == child_id)
            .cloned()
            .collect()
    }

    /// Remove every entry owned by the child; used by cascading deletion.
    /// Returns the number of entries removed.
    pub fn purge_for(&self, child_id: &str) -> usize {
        let mut inner = self.store.write();
        let before = inner.transactions.len();
        inner.transactions.retain(|t| t.child_id != child_id);
        before - inner.transactions.len()
    }

    /// Total number of entries across all children
    pub fn len(&self) -> usize {
        self.store.read().transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::TransactionKind;

    fn test_entry(id: &str, child_id: &str, amount: f64) -> Transaction {
        Transaction {
            id: id.to_string(),
            child_id: child_id.to_string(),
            kind: if amount < 0.0 {
                TransactionKind::Expense
            } else {
                TransactionKind::Allowance
            },
            amount,
            description: "Weekly allowance".to_string(),
            date: "2025-01-10T10:00:00+00:00".to_string(),
            points_converted: None,
        }
    }

    #[test]
    fn test_append_preserves_entries_verbatim() {
        let ledger = Ledger::new(MemoryStore::new());

        let first = test_entry("transaction::income::1", "child::1", 20.0);
        let second = test_entry("transaction::expense::2", "child::1", -5.0);
        ledger.append(first.clone());
        ledger.append(second.clone());

        // What was written is exactly what comes back, in insertion order,
        // no matter how many times it is read.
        assert_eq!(ledger.entries_for("child::1"), vec![first.clone(), second.clone()]);
        assert_eq!(ledger.entries_for("child::1"), vec![first, second]);
    }

    #[test]
    fn test_entries_for_partitions_by_child() {
        let ledger = Ledger::new(MemoryStore::new());
        ledger.append(test_entry("transaction::income::1", "child::1", 20.0));
        ledger.append(test_entry("transaction::income::2", "child::2", 15.0));

        assert_eq!(ledger.entries_for("child::1").len(), 1);
        assert_eq!(ledger.entries_for("child::2").len(), 1);
        assert!(ledger.entries_for("child::3").is_empty());
    }

    #[test]
    fn test_purge_for_removes_only_that_child() {
        let ledger = Ledger::new(MemoryStore::new());
        ledger.append(test_entry("transaction::income::1", "child::1", 20.0));
        ledger.append(test_entry("transaction::income::2", "child::2", 15.0));
        ledger.append(test_entry("transaction::expense::3", "child::1", -5.0));

        assert_eq!(ledger.purge_for("child::1"), 2);
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.entries_for("child::2").len(), 1);
        assert!(ledger.entries_for("child::1").is_empty());
    }
}
