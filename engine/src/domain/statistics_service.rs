//! Summary statistics over the ledger and task history.
//!
//! Backs the parent dashboard cards: how much came in and went out over the
//! last month, and which achievements a child has unlocked so far.

use chrono::{Duration, Utc};
use log::info;

use crate::domain::economy;
use crate::domain::errors::DomainError;
use crate::storage::{ChildStore, Ledger, MemoryStore, TaskStore};
use shared::{AchievementListResponse, SpendingSummary};

/// Days of ledger history a spending summary covers
const SUMMARY_WINDOW_DAYS: u32 = 30;

/// Service for spending summaries and achievement progress
#[derive(Clone)]
pub struct StatisticsService {
    children: ChildStore,
    tasks: TaskStore,
    ledger: Ledger,
}

impl StatisticsService {
    /// Create a new StatisticsService
    pub fn new(store: MemoryStore) -> Self {
        Self {
            children: ChildStore::new(store.clone()),
            tasks: TaskStore::new(store.clone()),
            ledger: Ledger::new(store),
        }
    }

    /// Income and spending for one child over the trailing 30 days.
    /// Savings is the child's current balance.
    pub fn spending_summary(&self, child_id: &str) -> Result<SpendingSummary, DomainError> {
        let child = self
            .children
            .get(child_id)
            .ok_or_else(|| DomainError::not_found("Child", child_id))?;

        let cutoff = (Utc::now() - Duration::days(i64::from(SUMMARY_WINDOW_DAYS))).to_rfc3339();

        let mut income = 0.0;
        let mut expenses = 0.0;
        for entry in self.ledger.entries_for(child_id) {
            if entry.date < cutoff {
                continue;
            }
            if entry.amount > 0.0 {
                income += entry.amount;
            } else {
                expenses += -entry.amount;
            }
        }

        info!(
            "Spending summary for {}: income {:.2}, expenses {:.2}",
            child_id, income, expenses
        );

        Ok(SpendingSummary {
            child_id: child.id,
            window_days: SUMMARY_WINDOW_DAYS,
            income,
            expenses,
            savings: child.allowance,
        })
    }

    /// Achievement progress for one child, derived from their completed-task
    /// count
    pub fn list_achievements(
        &self,
        child_id: &str,
    ) -> Result<AchievementListResponse, DomainError> {
        if !self.children.contains(child_id) {
            return Err(DomainError::not_found("Child", child_id));
        }

        let completed_tasks = self.tasks.completed_count_for(child_id);
        let achievements = economy::achievements_for(completed_tasks);

        info!(
            "Child {} has {} completed tasks, {} achievements unlocked",
            child_id,
            completed_tasks,
            achievements.iter().filter(|a| a.unlocked).count()
        );

        Ok(AchievementListResponse {
            achievements,
            completed_tasks,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::allowance_service::AllowanceService;
    use crate::domain::child_service::ChildService;
    use crate::domain::money_service::MoneyService;
    use crate::domain::task_service::TaskService;
    use shared::{
        AllowanceFrequency, AllowanceSettings, CreateChildRequest, CreateTaskRequest,
        SpendMoneyRequest, TaskCategory, TaskFrequency, Transaction, TransactionKind,
    };
    use std::thread::sleep;
    use std::time::Duration as StdDuration;

    struct Fixture {
        statistics: StatisticsService,
        children: ChildService,
        tasks: TaskService,
        allowance: AllowanceService,
        money: MoneyService,
        store: MemoryStore,
    }

    fn setup_test() -> Fixture {
        let store = MemoryStore::new();
        Fixture {
            statistics: StatisticsService::new(store.clone()),
            children: ChildService::new(store.clone()),
            tasks: TaskService::new(store.clone()),
            allowance: AllowanceService::new(store.clone()),
            money: MoneyService::new(store.clone()),
            store,
        }
    }

    fn create_child(fixture: &Fixture) -> String {
        fixture
            .children
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
            .child
            .id
    }

    #[test]
    fn test_spending_summary() {
        let fixture = setup_test();
        let child_id = create_child(&fixture);

        fixture
            .allowance
            .pay_allowance(&child_id)
            .expect("Failed to pay allowance");
        sleep(StdDuration::from_millis(2));
        fixture
            .money
            .spend_money(
                &child_id,
                SpendMoneyRequest {
                    amount: 8.0,
                    description: "Comic book".to_string(),
                },
            )
            .expect("Failed to spend");

        let summary = fixture
            .statistics
            .spending_summary(&child_id)
            .expect("Failed to summarize");

        assert_eq!(summary.window_days, 30);
        assert_eq!(summary.income, 20.0);
        assert_eq!(summary.expenses, 8.0);
        assert_eq!(summary.savings, 12.0);
    }

    #[test]
    fn test_spending_summary_ignores_old_entries() {
        let fixture = setup_test();
        let child_id = create_child(&fixture);

        // An allowance paid long ago falls outside the window
        let old_date = (Utc::now() - Duration::days(45)).to_rfc3339();
        Ledger::new(fixture.store.clone()).append(Transaction {
            id: Transaction::generate_id(20.0, 0),
            child_id: child_id.clone(),
            kind: TransactionKind::Allowance,
            amount: 20.0,
            description: "Weekly allowance".to_string(),
            date: old_date,
            points_converted: None,
        });

        fixture
            .allowance
            .pay_allowance(&child_id)
            .expect("Failed to pay allowance");

        let summary = fixture
            .statistics
            .spending_summary(&child_id)
            .expect("Failed to summarize");

        assert_eq!(summary.income, 20.0);
        assert_eq!(summary.expenses, 0.0);
    }

    #[test]
    fn test_spending_summary_unknown_child() {
        let fixture = setup_test();

        assert!(matches!(
            fixture.statistics.spending_summary("child::nonexistent"),
            Err(DomainError::NotFound { .. })
        ));
    }

    #[test]
    fn test_list_achievements_progress() {
        let fixture = setup_test();
        let child_id = create_child(&fixture);

        let response = fixture
            .statistics
            .list_achievements(&child_id)
            .expect("Failed to list achievements");
        assert_eq!(response.completed_tasks, 0);
        assert!(response.achievements.iter().all(|a| !a.unlocked));

        // Complete one task: the first achievement unlocks
        let task_id = fixture
            .tasks
            .create_task(CreateTaskRequest {
                child_id: child_id.clone(),
                title: "Make the bed".to_string(),
                description: "Right after waking up".to_string(),
                category: TaskCategory::Chores,
                points: 15,
                frequency: TaskFrequency::Daily,
                due_date: None,
            })
            .expect("Failed to create task")
            .task
            .id;
        fixture
            .tasks
            .complete_task(&task_id)
            .expect("Failed to complete task");

        let response = fixture
            .statistics
            .list_achievements(&child_id)
            .expect("Failed to list achievements");
        assert_eq!(response.completed_tasks, 1);
        assert!(response.achievements[0].unlocked);
        assert!(!response.achievements[1].unlocked);
        assert_eq!(response.achievements[1].progress, 1);
    }
}
