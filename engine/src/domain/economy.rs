//! Pure economy rules for the chore tracker.
//!
//! Every function here takes entity snapshots plus user input and returns
//! new snapshots (and, where money moves, the ledger entry recording it).
//! Nothing is mutated in place and no store is touched: the services own
//! the write-back, which keeps these rules unit-testable in isolation.

use chrono::{DateTime, Utc};

use crate::domain::errors::DomainError;
use shared::{
    Achievement, AchievementStatus, AdjustmentDirection, AllowanceFrequency, Child, Reward, Task,
    Transaction, TransactionKind,
};

/// Experience points required to advance one level
pub const XP_PER_LEVEL: u32 = 100;

/// Level reached at a given cumulative experience total
pub fn level_for_xp(xp: u32) -> u32 {
    xp / XP_PER_LEVEL + 1
}

/// Outcome of applying a task completion to its owning child
#[derive(Debug, Clone)]
pub struct TaskCompletion {
    pub child: Child,
    pub task: Task,
    /// True iff the awarded points pushed the child past a level boundary
    pub leveled_up: bool,
}

/// Award a task's points to its owning child and mark the task completed.
///
/// Returns `None` when the task is already completed: completion is one-way,
/// and a second attempt is a no-op the caller reports rather than an error.
pub fn apply_task_completion(child: &Child, task: &Task, now: DateTime<Utc>) -> Option<TaskCompletion> {
    if task.completed {
        return None;
    }

    let mut updated = child.clone();
    updated.points += task.points;
    updated.xp += task.points;
    let new_level = level_for_xp(updated.xp);
    let leveled_up = new_level > updated.level;
    updated.level = new_level;

    let mut completed = task.clone();
    completed.completed = true;
    completed.completed_date = Some(now.to_rfc3339());

    Some(TaskCompletion {
        child: updated,
        task: completed,
        leveled_up,
    })
}

/// Outcome of converting points into money
#[derive(Debug, Clone)]
pub struct PointsConversion {
    pub child: Child,
    pub entry: Transaction,
}

/// Convert part of a child's points balance into money at the configured
/// rate. The division is exact; the display layer rounds for presentation.
///
/// The rate itself is validated where settings enter the system, not here.
pub fn convert_points(
    child: &Child,
    points: u32,
    now: DateTime<Utc>,
) -> Result<PointsConversion, DomainError> {
    if points == 0 {
        return Err(DomainError::invalid(
            "Points to convert must be greater than zero",
        ));
    }
    if points > child.points {
        return Err(DomainError::InsufficientPoints {
            required: points,
            available: child.points,
        });
    }

    let money = f64::from(points) / child.allowance_settings.points_to_money_rate;

    let mut updated = child.clone();
    updated.points -= points;
    updated.allowance += money;

    let entry = new_entry(
        &child.id,
        TransactionKind::PointsConversion,
        money,
        "Converted points to money".to_string(),
        Some(points),
        now,
    );

    Ok(PointsConversion {
        child: updated,
        entry,
    })
}

/// Outcome of recording money a child spent
#[derive(Debug, Clone)]
pub struct Expenditure {
    pub child: Child,
    pub entry: Transaction,
}

/// Record money spent by the child. The ledger entry carries the negated
/// amount; the balance must cover the expense in full.
pub fn record_expenditure(
    child: &Child,
    amount: f64,
    description: &str,
    now: DateTime<Utc>,
) -> Result<Expenditure, DomainError> {
    if amount <= 0.0 {
        return Err(DomainError::invalid(
            "Expense amount must be greater than zero",
        ));
    }
    if amount > child.allowance {
        return Err(DomainError::InsufficientBalance {
            required: amount,
            available: child.allowance,
        });
    }

    let mut updated = child.clone();
    updated.allowance -= amount;

    let description = if description.trim().is_empty() {
        "Spending".to_string()
    } else {
        description.trim().to_string()
    };

    let entry = new_entry(
        &child.id,
        TransactionKind::Expense,
        -amount,
        description,
        None,
        now,
    );

    Ok(Expenditure {
        child: updated,
        entry,
    })
}

/// Outcome of a manual balance adjustment
#[derive(Debug, Clone)]
pub struct Adjustment {
    pub child: Child,
    pub entry: Transaction,
}

/// Apply a manual credit or debit to a child's balance.
///
/// A debit larger than the balance clamps the balance at zero rather than
/// failing; the ledger entry still records the full requested delta.
pub fn adjust_balance(
    child: &Child,
    amount: f64,
    direction: AdjustmentDirection,
    description: Option<&str>,
    now: DateTime<Utc>,
) -> Result<Adjustment, DomainError> {
    if amount <= 0.0 {
        return Err(DomainError::invalid(
            "Adjustment amount must be greater than zero",
        ));
    }

    let (kind, delta, fallback) = match direction {
        AdjustmentDirection::Credit => (TransactionKind::ManualCredit, amount, "Manual credit"),
        AdjustmentDirection::Debit => (TransactionKind::ManualDebit, -amount, "Manual debit"),
    };

    let mut updated = child.clone();
    updated.allowance = (updated.allowance + delta).max(0.0);

    let description = description
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(String::from)
        .unwrap_or_else(|| fallback.to_string());

    let entry = new_entry(&child.id, kind, delta, description, None, now);

    Ok(Adjustment {
        child: updated,
        entry,
    })
}

/// Outcome of paying out an allowance
#[derive(Debug, Clone)]
pub struct AllowancePayment {
    pub child: Child,
    pub entry: Transaction,
}

/// Pay the configured allowance amount into the child's balance.
///
/// Always an explicit action: the scheduling-day fields in the settings are
/// metadata only and nothing pays automatically.
pub fn pay_allowance(child: &Child, now: DateTime<Utc>) -> AllowancePayment {
    let amount = child.allowance_settings.amount;

    let mut updated = child.clone();
    updated.allowance += amount;

    let description = match child.allowance_settings.frequency {
        AllowanceFrequency::Weekly => "Weekly allowance",
        AllowanceFrequency::Monthly => "Monthly allowance",
    };

    let entry = new_entry(
        &child.id,
        TransactionKind::Allowance,
        amount,
        description.to_string(),
        None,
        now,
    );

    AllowancePayment {
        child: updated,
        entry,
    }
}

/// Deduct a reward's cost from the child's points balance.
///
/// Redemption affects points only: the reward is untouched and no ledger
/// entry is produced, since no money moves.
pub fn redeem_reward(child: &Child, reward: &Reward) -> Result<Child, DomainError> {
    if reward.points_cost > child.points {
        return Err(DomainError::InsufficientPoints {
            required: reward.points_cost,
            available: child.points,
        });
    }

    let mut updated = child.clone();
    updated.points -= reward.points_cost;
    Ok(updated)
}

/// The fixed achievement ladder
pub fn achievement_catalog() -> Vec<Achievement> {
    vec![
        Achievement {
            id: "achievement::1".to_string(),
            title: "First Task".to_string(),
            description: "Complete your first task".to_string(),
            icon: "🎯".to_string(),
            requirement: 1,
        },
        Achievement {
            id: "achievement::2".to_string(),
            title: "Super Student".to_string(),
            description: "Complete 5 tasks".to_string(),
            icon: "🎓".to_string(),
            requirement: 5,
        },
        Achievement {
            id: "achievement::3".to_string(),
            title: "Routine Hero".to_string(),
            description: "Complete 7 tasks".to_string(),
            icon: "🦸".to_string(),
            requirement: 7,
        },
        Achievement {
            id: "achievement::4".to_string(),
            title: "Cleaning Master".to_string(),
            description: "Complete 10 tasks".to_string(),
            icon: "✨".to_string(),
            requirement: 10,
        },
    ]
}

/// Achievement progress for a child who has completed the given number of
/// tasks. Unlocks compare against the total completed count.
pub fn achievements_for(completed_tasks: u32) -> Vec<AchievementStatus> {
    achievement_catalog()
        .into_iter()
        .map(|achievement| {
            let unlocked = completed_tasks >= achievement.requirement;
            let progress = completed_tasks.min(achievement.requirement);
            AchievementStatus {
                achievement,
                unlocked,
                progress,
            }
        })
        .collect()
}

fn new_entry(
    child_id: &str,
    kind: TransactionKind,
    amount: f64,
    description: String,
    points_converted: Option<u32>,
    now: DateTime<Utc>,
) -> Transaction {
    Transaction {
        id: Transaction::generate_id(amount, now.timestamp_millis() as u64),
        child_id: child_id.to_string(),
        kind,
        amount,
        description,
        date: now.to_rfc3339(),
        points_converted,
    }
}
