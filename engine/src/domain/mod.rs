//! # Domain Module
//!
//! Contains all business logic for the chore-and-allowance tracker.
//!
//! This module encapsulates the rules that define how chores earn points,
//! how points become money, and how allowances are paid and spent. It
//! operates independently of any UI framework and of how state is stored.
//!
//! ## Module Organization
//!
//! - **economy**: Pure rules over entity snapshots (levels, conversions,
//!   adjustments, redemptions)
//! - **child_service**: Child catalog CRUD and cascading deletion
//! - **task_service**: Task creation and the one-way completion transition
//! - **reward_service**: Reward catalog CRUD and redemption
//! - **allowance_service**: Allowance settings and manual payout
//! - **money_service**: Point conversion, spending, manual adjustments
//! - **transaction_service**: Ledger listing with cursor pagination
//! - **statistics_service**: Trailing spending summaries and achievements
//!
//! ## Business Rules
//!
//! - A child's level is always `xp / 100 + 1`
//! - Task completion is one-way; completing twice is a reported no-op
//! - A rejected operation leaves every store unchanged
//! - Ledger entries are never edited after insertion
//! - Manual debits clamp the balance at zero instead of failing
//!
//! ## Design Principles
//!
//! - **Pure Rules**: Economy functions take snapshots and return new ones;
//!   services perform the write-back
//! - **Single Responsibility**: Each service has a focused purpose
//! - **Recoverable Errors**: Every failure maps to a [`DomainError`] the
//!   caller surfaces as a transient notice

pub mod allowance_service;
pub mod child_service;
pub mod economy;
pub mod errors;
pub mod money_service;
pub mod reward_service;
pub mod statistics_service;
pub mod task_service;
pub mod transaction_service;

pub use allowance_service::*;
pub use child_service::*;
pub use economy::*;
pub use errors::*;
pub use money_service::*;
pub use reward_service::*;
pub use statistics_service::*;
pub use task_service::*;
pub use transaction_service::*;
