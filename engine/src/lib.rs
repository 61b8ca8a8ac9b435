//! # Chore Tracker Engine
//!
//! Contains all non-UI logic for the family chore-and-allowance tracker.
//!
//! This crate is the orchestration layer that brings together:
//! - **Domain**: Business rules for points, levels, allowances and the ledger
//! - **Storage**: The in-memory stores holding the family's state
//!
//! The engine is UI-agnostic: a desktop shell, a TUI or a test harness can
//! drive it without modification. All state lives in transient memory and is
//! lost on process termination.
//!
//! ## Architecture
//!
//! ```text
//! UI Layer (dialogs, forms)
//!     ↓
//! Domain Layer (services, economy rules)
//!     ↓
//! Storage Layer (in-memory stores)
//! ```

pub mod domain;
pub mod storage;

use crate::domain::{
    AllowanceService, ChildService, MoneyService, RewardService, StatisticsService, TaskService,
    TransactionService,
};
use crate::storage::MemoryStore;
use log::info;

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub child_service: ChildService,
    pub task_service: TaskService,
    pub reward_service: RewardService,
    pub allowance_service: AllowanceService,
    pub money_service: MoneyService,
    pub transaction_service: TransactionService,
    pub statistics_service: StatisticsService,
}

/// Initialize the engine with all required services over one shared store
pub fn initialize_engine() -> AppState {
    info!("Setting up in-memory store");
    let store = MemoryStore::new();

    info!("Setting up domain services");
    AppState {
        child_service: ChildService::new(store.clone()),
        task_service: TaskService::new(store.clone()),
        reward_service: RewardService::new(store.clone()),
        allowance_service: AllowanceService::new(store.clone()),
        money_service: MoneyService::new(store.clone()),
        transaction_service: TransactionService::new(store.clone()),
        statistics_service: StatisticsService::new(store),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{
        AllowanceFrequency, AllowanceSettings, ConvertPointsRequest, CreateChildRequest,
        CreateTaskRequest, TaskCategory, TaskFrequency, TransactionListRequest,
    };
    use std::thread::sleep;
    use std::time::Duration;

    #[test]
    fn test_full_allowance_cycle() {
        let app = initialize_engine();

        let child = app
            .child_service
            .create_child(CreateChildRequest {
                name: "Ana".to_string(),
                age: 8,
                avatar: "👧".to_string(),
                color: "#FF6B9D".to_string(),
                allowance_settings: AllowanceSettings {
                    frequency: AllowanceFrequency::Weekly,
                    amount: 20.0,
                    day_of_week: Some(0),
                    day_of_month: None,
                    points_to_money_rate: 10.0,
                },
            })
            .expect("Failed to create child")
            .child;

        // Earn points by completing a chore
        let task_id = app
            .task_service
            .create_task(CreateTaskRequest {
                child_id: child.id.clone(),
                title: "Do homework".to_string(),
                description: "Math and reading".to_string(),
                category: TaskCategory::Study,
                points: 50,
                frequency: TaskFrequency::Daily,
                due_date: None,
            })
            .expect("Failed to create task")
            .task
            .id;
        let completion = app
            .task_service
            .complete_task(&task_id)
            .expect("Failed to complete task");
        assert_eq!(completion.child.points, 50);

        sleep(Duration::from_millis(2));

        // Turn the points into money and pay an allowance on top
        let conversion = app
            .money_service
            .convert_points(&child.id, ConvertPointsRequest { points: 50 })
            .expect("Failed to convert points");
        assert_eq!(conversion.child.allowance, 5.0);

        sleep(Duration::from_millis(2));

        let payment = app
            .allowance_service
            .pay_allowance(&child.id)
            .expect("Failed to pay allowance");
        assert_eq!(payment.child.allowance, 25.0);

        // Both movements are on the ledger, most recent first
        let history = app
            .transaction_service
            .list_transactions(&child.id, TransactionListRequest::default())
            .expect("Failed to list transactions");
        assert_eq!(history.transactions.len(), 2);
        assert_eq!(history.transactions[0].amount, 20.0);
        assert_eq!(history.transactions[1].points_converted, Some(50));

        let summary = app
            .statistics_service
            .spending_summary(&child.id)
            .expect("Failed to summarize");
        assert_eq!(summary.income, 25.0);
        assert_eq!(summary.savings, 25.0);
    }
}
