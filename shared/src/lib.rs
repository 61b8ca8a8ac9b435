use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents a child in the chore tracking system
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Child {
    pub id: String,
    pub name: String,
    /// Age in whole years
    pub age: u8,
    /// Emoji shown next to the child's name
    pub avatar: String,
    /// Accent color (hex) used when rendering the child's cards
    pub color: String,
    /// Derived from xp; always `xp / 100 + 1`
    pub level: u32,
    /// Cumulative experience points; never decreases
    pub xp: u32,
    /// Spendable points balance
    pub points: u32,
    /// Monetary balance
    pub allowance: f64,
    pub allowance_settings: AllowanceSettings,
    pub created_at: String, // RFC 3339 timestamp
    pub updated_at: String, // RFC 3339 timestamp
}

/// How often an allowance is paid out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AllowanceFrequency {
    Weekly,
    Monthly,
}

impl AllowanceFrequency {
    /// Lowercase label for messages and logs
    pub fn label(&self) -> &'static str {
        match self {
            AllowanceFrequency::Weekly => "weekly",
            AllowanceFrequency::Monthly => "monthly",
        }
    }
}

/// Per-child allowance configuration.
///
/// The scheduling-day fields are descriptive metadata: no scheduler consumes
/// them, and allowance payment is always an explicit action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllowanceSettings {
    pub frequency: AllowanceFrequency,
    /// Amount paid per period; must not be negative
    pub amount: f64,
    /// 0 = Sunday, 1 = Monday, ..., 6 = Saturday; set for weekly allowances
    pub day_of_week: Option<u8>,
    /// 1-31; set for monthly allowances
    pub day_of_month: Option<u8>,
    /// Points per unit of money (e.g. 10 points = 1.00); must be > 0
    pub points_to_money_rate: f64,
}

impl AllowanceSettings {
    /// Get the day name for the configured day of week
    pub fn day_name(&self) -> &'static str {
        match self.day_of_week {
            Some(0) => "Sunday",
            Some(1) => "Monday",
            Some(2) => "Tuesday",
            Some(3) => "Wednesday",
            Some(4) => "Thursday",
            Some(5) => "Friday",
            Some(6) => "Saturday",
            _ => "Unscheduled",
        }
    }

    /// Validate day of week value
    pub fn is_valid_day_of_week(day: u8) -> bool {
        day <= 6
    }

    /// Validate day of month value
    pub fn is_valid_day_of_month(day: u8) -> bool {
        (1..=31).contains(&day)
    }
}

impl Child {
    /// Generate a child ID based on timestamp
    pub fn generate_id(epoch_millis: u64) -> String {
        format!("child::{}", epoch_millis)
    }

    /// Parse a child ID to extract the timestamp
    pub fn parse_id(id: &str) -> Result<u64, ChildIdError> {
        let parts: Vec<&str> = id.split("::").collect();
        if parts.len() != 2 || parts[0] != "child" {
            return Err(ChildIdError::InvalidFormat);
        }

        parts[1].parse::<u64>().map_err(|_| ChildIdError::InvalidTimestamp)
    }

    /// Extract timestamp from child ID
    pub fn extract_timestamp(&self) -> Result<u64, ChildIdError> {
        Self::parse_id(&self.id)
    }

    /// Experience accumulated within the current level (0-99)
    pub fn xp_into_level(&self) -> u32 {
        self.xp % 100
    }

    /// Monetary value of the current points balance at the configured rate
    pub fn points_value(&self) -> f64 {
        f64::from(self.points) / self.allowance_settings.points_to_money_rate
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ChildIdError {
    InvalidFormat,
    InvalidTimestamp,
}

impl fmt::Display for ChildIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChildIdError::InvalidFormat => write!(f, "Invalid child ID format"),
            ChildIdError::InvalidTimestamp => write!(f, "Invalid timestamp in child ID"),
        }
    }
}

impl std::error::Error for ChildIdError {}

/// The five fixed task categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskCategory {
    Hygiene,
    Study,
    Behavior,
    Leisure,
    Chores,
}

/// How often a task recurs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskFrequency {
    Daily,
    Weekly,
    Custom,
}

/// A chore assigned to a single child.
///
/// Completion is one-way: once a task is completed it is never reopened.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    /// ID of the child this task belongs to
    pub child_id: String,
    pub title: String,
    pub description: String,
    pub category: TaskCategory,
    /// Points awarded on completion; always > 0
    pub points: u32,
    pub frequency: TaskFrequency,
    pub completed: bool,
    /// RFC 3339 timestamp; set iff completed
    pub completed_date: Option<String>,
    /// Optional deadline shown by the display layer
    pub due_date: Option<String>,
}

impl Task {
    /// Generate a task ID based on timestamp
    pub fn generate_id(epoch_millis: u64) -> String {
        format!("task::{}", epoch_millis)
    }
}

/// A reward children can redeem with points.
///
/// Rewards are independent of any child; redemption does not mutate them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reward {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Points deducted on redemption; always > 0
    pub points_cost: u32,
    pub icon: String,
    /// Free-text category
    pub category: String,
}

impl Reward {
    /// Generate a reward ID based on timestamp
    pub fn generate_id(epoch_millis: u64) -> String {
        format!("reward::{}", epoch_millis)
    }
}

/// Kind of monetary movement recorded in the ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionKind {
    /// Periodic allowance payment
    Allowance,
    /// Manual balance addition by a parent
    ManualCredit,
    /// Manual balance removal by a parent
    ManualDebit,
    /// Money spent by the child
    Expense,
    /// Points converted into money
    PointsConversion,
}

/// Transaction ID in format: "transaction::<income|expense>::epoch_millis"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    /// ID of the child this transaction belongs to
    pub child_id: String,
    pub kind: TransactionKind,
    /// Signed amount: positive for money in, negative for money out
    pub amount: f64,
    pub description: String,
    /// RFC 3339 timestamp
    pub date: String,
    /// Points spent in a conversion; present iff kind is PointsConversion
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points_converted: Option<u32>,
}

impl Transaction {
    /// Generate transaction ID from amount and timestamp
    pub fn generate_id(amount: f64, epoch_millis: u64) -> String {
        let transaction_type = if amount < 0.0 { "expense" } else { "income" };
        format!("transaction::{}::{}", transaction_type, epoch_millis)
    }

    /// Parse transaction ID to extract components
    pub fn parse_id(id: &str) -> Result<(String, u64), TransactionIdError> {
        let parts: Vec<&str> = id.split("::").collect();
        if parts.len() != 3 || parts[0] != "transaction" {
            return Err(TransactionIdError::InvalidFormat);
        }

        let transaction_type = parts[1];
        if transaction_type != "income" && transaction_type != "expense" {
            return Err(TransactionIdError::InvalidType);
        }

        let epoch_millis = parts[2]
            .parse::<u64>()
            .map_err(|_| TransactionIdError::InvalidTimestamp)?;

        Ok((transaction_type.to_string(), epoch_millis))
    }

    /// Extract epoch timestamp from transaction ID for sorting
    pub fn extract_timestamp(&self) -> Result<u64, TransactionIdError> {
        Self::parse_id(&self.id).map(|(_, timestamp)| timestamp)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TransactionIdError {
    InvalidFormat,
    InvalidType,
    InvalidTimestamp,
}

impl fmt::Display for TransactionIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionIdError::InvalidFormat => write!(f, "Invalid transaction ID format"),
            TransactionIdError::InvalidType => write!(f, "Invalid transaction type"),
            TransactionIdError::InvalidTimestamp => write!(f, "Invalid timestamp in transaction ID"),
        }
    }
}

impl std::error::Error for TransactionIdError {}

/// A milestone unlocked by completing tasks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    /// Completed-task count needed to unlock
    pub requirement: u32,
}

/// An achievement together with the child's progress toward it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AchievementStatus {
    pub achievement: Achievement,
    pub unlocked: bool,
    /// Completed tasks counted toward the requirement, capped at it
    pub progress: u32,
}

/// Direction of a manual balance adjustment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdjustmentDirection {
    Credit,
    Debit,
}

/// Request for creating a new child
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateChildRequest {
    pub name: String,
    pub age: u8,
    pub avatar: String,
    pub color: String,
    pub allowance_settings: AllowanceSettings,
}

/// Request for updating an existing child's display attributes
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UpdateChildRequest {
    pub name: Option<String>,
    pub age: Option<u8>,
    pub avatar: Option<String>,
    pub color: Option<String>,
}

/// Response after creating or updating a child
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChildResponse {
    pub child: Child,
    pub success_message: String,
}

/// Response containing a list of children
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChildListResponse {
    pub children: Vec<Child>,
}

/// Response after deleting a child and everything referencing it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeleteChildResponse {
    pub removed_tasks: usize,
    pub removed_transactions: usize,
    pub success_message: String,
}

/// Request for creating a new task
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateTaskRequest {
    pub child_id: String,
    pub title: String,
    pub description: String,
    pub category: TaskCategory,
    pub points: u32,
    pub frequency: TaskFrequency,
    pub due_date: Option<String>,
}

/// Response after creating a task
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaskResponse {
    pub task: Task,
    pub success_message: String,
}

/// Response containing a child's tasks
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaskListResponse {
    pub tasks: Vec<Task>,
}

/// Response after completing (approving) a task
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompleteTaskResponse {
    pub child: Child,
    pub task: Task,
    /// True iff the awarded points pushed the child past a level boundary
    pub leveled_up: bool,
    pub success_message: String,
}

/// Request for creating a new reward
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateRewardRequest {
    pub title: String,
    pub description: String,
    pub points_cost: u32,
    pub icon: String,
    pub category: String,
}

/// Request for updating an existing reward
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UpdateRewardRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub points_cost: Option<u32>,
    pub icon: Option<String>,
    pub category: Option<String>,
}

/// Response after creating or updating a reward
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RewardResponse {
    pub reward: Reward,
    pub success_message: String,
}

/// Response containing all rewards
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RewardListResponse {
    pub rewards: Vec<Reward>,
}

/// Response after redeeming a reward.
///
/// Redemption affects points only; the reward itself is untouched and no
/// ledger entry is written.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RedeemRewardResponse {
    pub child: Child,
    pub reward: Reward,
    pub success_message: String,
}

/// Request for replacing a child's allowance settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UpdateAllowanceSettingsRequest {
    pub frequency: AllowanceFrequency,
    pub amount: f64,
    pub day_of_week: Option<u8>,
    pub day_of_month: Option<u8>,
    pub points_to_money_rate: f64,
}

/// Response after updating allowance settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AllowanceSettingsResponse {
    pub child: Child,
    pub success_message: String,
}

/// Response after manually paying out an allowance
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayAllowanceResponse {
    pub child: Child,
    pub transaction: Transaction,
    pub success_message: String,
}

/// Request for converting points into money
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConvertPointsRequest {
    pub points: u32,
}

/// Response after converting points into money
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConvertPointsResponse {
    pub child: Child,
    pub transaction: Transaction,
    pub success_message: String,
}

/// Request for recording money spent by a child
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SpendMoneyRequest {
    /// User provides a positive amount; the ledger entry is negated
    pub amount: f64,
    pub description: String,
}

/// Response after recording an expenditure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SpendMoneyResponse {
    pub child: Child,
    pub transaction: Transaction,
    pub success_message: String,
}

/// Request for a manual balance adjustment
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdjustBalanceRequest {
    /// Positive magnitude; the direction supplies the sign
    pub amount: f64,
    pub direction: AdjustmentDirection,
    pub description: Option<String>,
}

/// Response after a manual balance adjustment
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdjustBalanceResponse {
    pub child: Child,
    pub transaction: Transaction,
    pub success_message: String,
}

/// Request for listing a child's ledger entries
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct TransactionListRequest {
    /// Cursor for pagination - transaction ID to start after
    pub after: Option<String>,
    /// Maximum number of transactions to return
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaginationInfo {
    pub has_more: bool,
    pub next_cursor: Option<String>,
}

/// Response containing a page of ledger entries, most recent first
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransactionListResponse {
    pub transactions: Vec<Transaction>,
    pub pagination: PaginationInfo,
}

/// Income and spending over the trailing summary window
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SpendingSummary {
    pub child_id: String,
    /// Length of the trailing window in days
    pub window_days: u32,
    /// Sum of positive ledger amounts inside the window
    pub income: f64,
    /// Absolute sum of negative ledger amounts inside the window
    pub expenses: f64,
    /// Current allowance balance
    pub savings: f64,
}

/// Response containing a child's achievement progress
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AchievementListResponse {
    pub achievements: Vec<AchievementStatus>,
    pub completed_tasks: u32,
}
