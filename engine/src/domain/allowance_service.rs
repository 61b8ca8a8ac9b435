use chrono::Utc;
use log::{info, warn};

use crate::domain::economy;
use crate::domain::errors::DomainError;
use crate::storage::{ChildStore, Ledger, MemoryStore};
use shared::{
    AllowanceFrequency, AllowanceSettings, AllowanceSettingsResponse, PayAllowanceResponse,
    UpdateAllowanceSettingsRequest,
};

/// Service for managing allowance settings and manual payouts
#[derive(Clone)]
pub struct AllowanceService {
    children: ChildStore,
    ledger: Ledger,
}

impl AllowanceService {
    /// Create a new AllowanceService
    pub fn new(store: MemoryStore) -> Self {
        Self {
            children: ChildStore::new(store.clone()),
            ledger: Ledger::new(store),
        }
    }

    /// Get allowance settings for a child
    pub fn get_settings(&self, child_id: &str) -> Result<AllowanceSettings, DomainError> {
        let child = self
            .children
            .get(child_id)
            .ok_or_else(|| DomainError::not_found("Child", child_id))?;

        Ok(child.allowance_settings)
    }

    /// Replace allowance settings for a child
    pub fn update_settings(
        &self,
        child_id: &str,
        request: UpdateAllowanceSettingsRequest,
    ) -> Result<AllowanceSettingsResponse, DomainError> {
        info!("Updating allowance settings for child: {}", child_id);

        let settings = AllowanceSettings {
            frequency: request.frequency,
            amount: request.amount,
            day_of_week: request.day_of_week,
            day_of_month: request.day_of_month,
            points_to_money_rate: request.points_to_money_rate,
        };

        validate_settings(&settings)?;

        let mut child = self
            .children
            .get(child_id)
            .ok_or_else(|| DomainError::not_found("Child", child_id))?;

        child.allowance_settings = settings;
        child.updated_at = Utc::now().to_rfc3339();

        self.children.update(&child);

        info!(
            "Updated allowance settings for child {}: {:.2} {} on {}",
            child_id,
            child.allowance_settings.amount,
            child.allowance_settings.frequency.label(),
            child.allowance_settings.day_name()
        );

        Ok(AllowanceSettingsResponse {
            child,
            success_message: "Allowance settings updated successfully".to_string(),
        })
    }

    /// Pay the configured allowance to a child. Always an explicit trigger;
    /// nothing pays on a schedule.
    pub fn pay_allowance(&self, child_id: &str) -> Result<PayAllowanceResponse, DomainError> {
        info!("Paying allowance to child: {}", child_id);

        let child = self
            .children
            .get(child_id)
            .ok_or_else(|| DomainError::not_found("Child", child_id))?;

        if child.allowance_settings.amount == 0.0 {
            warn!("Allowance amount for child {} is zero", child_id);
        }

        let outcome = economy::pay_allowance(&child, Utc::now());

        self.children.update(&outcome.child);
        self.ledger.append(outcome.entry.clone());

        info!(
            "Paid {:.2} allowance to {}",
            outcome.entry.amount, outcome.child.name
        );

        Ok(PayAllowanceResponse {
            success_message: format!(
                "{:.2} allowance paid to {}!",
                outcome.entry.amount, outcome.child.name
            ),
            child: outcome.child,
            transaction: outcome.entry,
        })
    }
}

/// Validate allowance settings wherever they enter the system.
///
/// The conversion rate is only ever checked here: conversion itself divides
/// without re-validating.
pub(crate) fn validate_settings(settings: &AllowanceSettings) -> Result<(), DomainError> {
    if !(settings.points_to_money_rate > 0.0) {
        return Err(DomainError::invalid(
            "Points-to-money rate must be greater than zero",
        ));
    }

    if settings.amount < 0.0 {
        return Err(DomainError::invalid("Allowance amount cannot be negative"));
    }

    if settings.amount > 1_000_000.0 {
        return Err(DomainError::invalid("Allowance amount is too large"));
    }

    match settings.frequency {
        AllowanceFrequency::Weekly => match settings.day_of_week {
            Some(day) if AllowanceSettings::is_valid_day_of_week(day) => Ok(()),
            Some(day) => Err(DomainError::invalid(format!(
                "Invalid day of week: {}. Must be 0-6 (Sunday-Saturday)",
                day
            ))),
            None => Err(DomainError::invalid(
                "Weekly allowance requires a day of week",
            )),
        },
        AllowanceFrequency::Monthly => match settings.day_of_month {
            Some(day) if AllowanceSettings::is_valid_day_of_month(day) => Ok(()),
            Some(day) => Err(DomainError::invalid(format!(
                "Invalid day of month: {}. Must be 1-31",
                day
            ))),
            None => Err(DomainError::invalid(
                "Monthly allowance requires a day of month",
            )),
        },
    }
}
