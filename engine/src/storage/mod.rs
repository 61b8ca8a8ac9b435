//! # Storage Module
//!
//! Holds all tracker state for the lifetime of the process.
//!
//! There is no persistence layer by design: every collection lives in
//! transient memory behind one shared [`MemoryStore`] handle, and everything
//! is gone when the process exits. The module keeps the repository pattern
//! anyway so the domain layer talks to focused store types instead of raw
//! collections.
//!
//! ## Key Responsibilities
//!
//! - **State Ownership**: One place owning children, tasks, rewards and the ledger
//! - **Repository Pattern**: Focused store types for each collection
//! - **Stable Ordering**: Insertion order is preserved for stable display
//! - **Cascade Support**: Bulk removal of a child's dependent records

pub mod children;
pub mod ledger;
pub mod memory;
pub mod rewards;
pub mod tasks;

// Re-export the main types that other modules need
pub use children::ChildStore;
pub use ledger::Ledger;
pub use memory::MemoryStore;
pub use rewards::RewardStore;
pub use tasks::TaskStore;
