//! Recurring bill templates: registration and due-date bookkeeping.

use chrono::NaiveDate;

use spendquest_domain::RecurringExpense;

use crate::{store::PersistenceGateway, CoreError};

pub struct RecurringService;

impl RecurringService {
    /// Validates and stores a new recurring bill.
    pub fn add(
        gateway: &PersistenceGateway,
        recurring: RecurringExpense,
    ) -> Result<Vec<RecurringExpense>, CoreError> {
        Self::validate(&recurring)?;
        let mut entries = gateway.load_recurring();
        entries.push(recurring);
        gateway.save_recurring(&entries)?;
        Ok(entries)
    }

    pub fn all(gateway: &PersistenceGateway) -> Vec<RecurringExpense> {
        gateway.load_recurring()
    }

    pub fn active(entries: &[RecurringExpense]) -> Vec<RecurringExpense> {
        entries.iter().filter(|r| r.is_active).cloned().collect()
    }

    /// Active entries due on or before `date`.
    pub fn due_on(entries: &[RecurringExpense], date: NaiveDate) -> Vec<RecurringExpense> {
        entries
            .iter()
            .filter(|r| r.is_active && r.next_due <= date)
            .cloned()
            .collect()
    }

    /// Rolls the entry's next due date forward one frequency step.
    pub fn advance_due(
        gateway: &PersistenceGateway,
        id: &str,
    ) -> Result<Vec<RecurringExpense>, CoreError> {
        let mut entries = gateway.load_recurring();
        let Some(entry) = entries.iter_mut().find(|r| r.id == id) else {
            return Err(CoreError::NotFound(format!("recurring expense {id}")));
        };
        entry.next_due = entry.frequency.next_after(entry.next_due);
        gateway.save_recurring(&entries)?;
        Ok(entries)
    }

    pub fn set_active(
        gateway: &PersistenceGateway,
        id: &str,
        active: bool,
    ) -> Result<Vec<RecurringExpense>, CoreError> {
        let mut entries = gateway.load_recurring();
        let Some(entry) = entries.iter_mut().find(|r| r.id == id) else {
            return Err(CoreError::NotFound(format!("recurring expense {id}")));
        };
        entry.is_active = active;
        gateway.save_recurring(&entries)?;
        Ok(entries)
    }

    fn validate(recurring: &RecurringExpense) -> Result<(), CoreError> {
        if recurring.name.trim().is_empty() {
            return Err(CoreError::Validation(
                "recurring expense name must not be empty".into(),
            ));
        }
        if !recurring.amount.is_finite() || recurring.amount < 0.0 {
            return Err(CoreError::Validation(
                "recurring expense amount must be a non-negative number".into(),
            ));
        }
        if recurring.category.trim().is_empty() {
            return Err(CoreError::Validation(
                "recurring expense category must not be empty".into(),
            ));
        }
        Ok(())
    }
}
