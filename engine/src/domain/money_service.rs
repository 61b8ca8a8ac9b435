//! Money movement service for the chore tracker.
//!
//! Handles the three ways money changes hands outside of allowance payday:
//! converting points into money, recording what a child spent, and manual
//! parent adjustments. Every accepted operation writes the updated child
//! back to the catalog and appends exactly one ledger entry; a rejected
//! operation leaves both untouched.

use chrono::Utc;
use log::info;

use crate::domain::economy;
use crate::domain::errors::DomainError;
use crate::storage::{ChildStore, Ledger, MemoryStore};
use shared::{
    AdjustBalanceRequest, AdjustBalanceResponse, AdjustmentDirection, ConvertPointsRequest,
    ConvertPointsResponse, SpendMoneyRequest, SpendMoneyResponse,
};

/// Service for points conversion, spending and manual adjustments
#[derive(Clone)]
pub struct MoneyService {
    children: ChildStore,
    ledger: Ledger,
}

impl MoneyService {
    /// Create a new MoneyService
    pub fn new(store: MemoryStore) -> Self {
        Self {
            children: ChildStore::new(store.clone()),
            ledger: Ledger::new(store),
        }
    }

    /// Convert part of a child's points into money at the configured rate
    pub fn convert_points(
        &self,
        child_id: &str,
        request: ConvertPointsRequest,
    ) -> Result<ConvertPointsResponse, DomainError> {
        info!(
            "Converting {} points for child {}",
            request.points, child_id
        );

        let child = self
            .children
            .get(child_id)
            .ok_or_else(|| DomainError::not_found("Child", child_id))?;

        let outcome = economy::convert_points(&child, request.points, Utc::now())?;

        self.children.update(&outcome.child);
        self.ledger.append(outcome.entry.clone());

        info!(
            "Converted {} points into {:.2} for {}",
            request.points, outcome.entry.amount, outcome.child.name
        );

        Ok(ConvertPointsResponse {
            success_message: format!(
                "Converted {} points into {:.2}!",
                request.points, outcome.entry.amount
            ),
            child: outcome.child,
            transaction: outcome.entry,
        })
    }

    /// Record money a child spent out of their balance
    pub fn spend_money(
        &self,
        child_id: &str,
        request: SpendMoneyRequest,
    ) -> Result<SpendMoneyResponse, DomainError> {
        info!("Recording {:.2} spent by child {}", request.amount, child_id);

        let child = self
            .children
            .get(child_id)
            .ok_or_else(|| DomainError::not_found("Child", child_id))?;

        let outcome =
            economy::record_expenditure(&child, request.amount, &request.description, Utc::now())?;

        self.children.update(&outcome.child);
        self.ledger.append(outcome.entry.clone());

        info!(
            "Recorded expense of {:.2} for {}, balance now {:.2}",
            request.amount, outcome.child.name, outcome.child.allowance
        );

        Ok(SpendMoneyResponse {
            success_message: format!("💰 {:.2} recorded!", request.amount),
            child: outcome.child,
            transaction: outcome.entry,
        })
    }

    /// Apply a manual credit or debit to a child's balance.
    /// Debits clamp the balance at zero rather than failing.
    pub fn adjust_balance(
        &self,
        child_id: &str,
        request: AdjustBalanceRequest,
    ) -> Result<AdjustBalanceResponse, DomainError> {
        info!(
            "Adjusting balance for child {}: {:.2} {:?}",
            child_id, request.amount, request.direction
        );

        let child = self
            .children
            .get(child_id)
            .ok_or_else(|| DomainError::not_found("Child", child_id))?;

        let outcome = economy::adjust_balance(
            &child,
            request.amount,
            request.direction,
            request.description.as_deref(),
            Utc::now(),
        )?;

        self.children.update(&outcome.child);
        self.ledger.append(outcome.entry.clone());

        let success_message = match request.direction {
            AdjustmentDirection::Credit => "Balance added!".to_string(),
            AdjustmentDirection::Debit => "Balance removed!".to_string(),
        };

        info!(
            "Adjusted balance for {}: {:.2}, balance now {:.2}",
            outcome.child.name, outcome.entry.amount, outcome.child.allowance
        );

        Ok(AdjustBalanceResponse {
            child: outcome.child,
            transaction: outcome.entry,
            success_message,
        })
    }
}
