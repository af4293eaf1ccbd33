//! Storage seam and typed persistence for the four stored collections.
//!
//! The core decides *what* is stored under *which* key and when; the actual
//! byte store is an external collaborator behind [`KeyValueStore`]. Every
//! collection is a whole-document read-modify-write: read the entire
//! collection, mutate in memory, write the entire collection back.

use std::sync::Arc;

use serde::{de::DeserializeOwned, Serialize};
use tracing::warn;

use spendquest_domain::{CheckIn, Expense, RecurringExpense, UserStats};

use crate::CoreError;

/// Keys for the four persisted collections.
pub mod keys {
    pub const EXPENSES: &str = "expenses";
    pub const CHECK_INS: &str = "checkIns";
    pub const USER_STATS: &str = "userStats";
    pub const RECURRING_EXPENSES: &str = "recurringExpenses";
}

/// Abstraction over key-value backends holding one JSON document per key.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, CoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), CoreError>;
}

/// Typed whole-document reads and writes over a [`KeyValueStore`].
///
/// Reads never fail: an absent, unreadable, or malformed document falls back
/// to the collection's empty default (with a warning), so a corrupt store
/// can never crash a caller. Writes propagate failure; the previously
/// persisted document stays intact when a write is rejected.
#[derive(Clone)]
pub struct PersistenceGateway {
    store: Arc<dyn KeyValueStore>,
}

impl PersistenceGateway {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn load_expenses(&self) -> Vec<Expense> {
        self.load_or_default(keys::EXPENSES)
    }

    pub fn save_expenses(&self, expenses: &[Expense]) -> Result<(), CoreError> {
        self.save(keys::EXPENSES, &expenses)
    }

    pub fn load_check_ins(&self) -> Vec<CheckIn> {
        self.load_or_default(keys::CHECK_INS)
    }

    pub fn save_check_ins(&self, check_ins: &[CheckIn]) -> Result<(), CoreError> {
        self.save(keys::CHECK_INS, &check_ins)
    }

    pub fn load_user_stats(&self) -> UserStats {
        self.load_or_default(keys::USER_STATS)
    }

    pub fn save_user_stats(&self, stats: &UserStats) -> Result<(), CoreError> {
        self.save(keys::USER_STATS, stats)
    }

    pub fn load_recurring(&self) -> Vec<RecurringExpense> {
        self.load_or_default(keys::RECURRING_EXPENSES)
    }

    pub fn save_recurring(&self, entries: &[RecurringExpense]) -> Result<(), CoreError> {
        self.save(keys::RECURRING_EXPENSES, &entries)
    }

    fn load_or_default<T>(&self, key: &str) -> T
    where
        T: DeserializeOwned + Default,
    {
        let raw = match self.store.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return T::default(),
            Err(err) => {
                warn!(key, %err, "store read failed, falling back to empty collection");
                return T::default();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(err) => {
                warn!(key, %err, "stored document is malformed, falling back to empty collection");
                T::default()
            }
        }
    }

    fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<(), CoreError> {
        let json = serde_json::to_string(value).map_err(|err| CoreError::Serde(err.to_string()))?;
        self.store.set(key, &json)
    }
}
