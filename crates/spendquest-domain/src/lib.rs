//! spendquest-domain
//!
//! Pure domain models (Expense, CheckIn, UserStats, Badge, RecurringExpense).
//! No I/O, no storage. Only data types and core enums.

pub mod checkin;
pub mod expense;
pub mod stats;

pub use checkin::*;
pub use expense::*;
pub use stats::*;
