//! spendquest-core
//!
//! Business logic and services for SpendQuest: the check-in/streak rules,
//! badge unlocks, expense aggregation, and the persistence contract they
//! depend on. Depends on spendquest-domain. No UI, no storage backend.

pub mod checkin_service;
pub mod error;
pub mod expense_service;
pub mod format;
pub mod identity;
pub mod progression;
pub mod recurring_service;
pub mod store;
pub mod summary_service;
pub mod time;

pub use checkin_service::*;
pub use error::CoreError;
pub use expense_service::*;
pub use format::*;
pub use identity::*;
pub use progression::*;
pub use recurring_service::*;
pub use store::*;
pub use summary_service::*;
pub use time::*;
