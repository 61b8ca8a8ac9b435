use log::info;

use crate::domain::errors::DomainError;
use crate::storage::{ChildStore, Ledger, MemoryStore};
use shared::{PaginationInfo, Transaction, TransactionListRequest, TransactionListResponse};

/// Default page size when the caller does not provide one
const DEFAULT_LIMIT: u32 = 20;
/// Hard ceiling on page size
const MAX_LIMIT: u32 = 100;

/// Service for reading a child's ledger history
#[derive(Clone)]
pub struct TransactionService {
    children: ChildStore,
    ledger: Ledger,
}

impl TransactionService {
    /// Create a new TransactionService
    pub fn new(store: MemoryStore) -> Self {
        Self {
            children: ChildStore::new(store.clone()),
            ledger: Ledger::new(store),
        }
    }

    /// List a child's ledger entries, most recent first, with cursor
    /// pagination
    pub fn list_transactions(
        &self,
        child_id: &str,
        request: TransactionListRequest,
    ) -> Result<TransactionListResponse, DomainError> {
        info!("Listing transactions for child {}: {:?}", child_id, request);

        if !self.children.contains(child_id) {
            return Err(DomainError::not_found("Child", child_id));
        }

        let limit = request.limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;

        let mut transactions = self.ledger.entries_for(child_id);
        // RFC 3339 timestamps with a fixed offset compare correctly as strings
        transactions.sort_by(|a, b| b.date.cmp(&a.date));

        if let Some(after) = &request.after {
            transactions = self.apply_cursor_filter(transactions, after)?;
        }

        let has_more = transactions.len() > limit;
        transactions.truncate(limit);

        let next_cursor = if has_more {
            transactions.last().map(|t| t.id.clone())
        } else {
            None
        };

        info!(
            "Returning {} transactions for child {} (has_more: {})",
            transactions.len(),
            child_id,
            has_more
        );

        Ok(TransactionListResponse {
            transactions,
            pagination: PaginationInfo {
                has_more,
                next_cursor,
            },
        })
    }

    /// Drop everything up to and including the cursor entry
    fn apply_cursor_filter(
        &self,
        transactions: Vec<Transaction>,
        after: &str,
    ) -> Result<Vec<Transaction>, DomainError> {
        let position = transactions
            .iter()
            .position(|t| t.id == after)
            .ok_or_else(|| DomainError::not_found("Transaction", after))?;

        Ok(transactions.into_iter().skip(position + 1).collect())
    }
}
