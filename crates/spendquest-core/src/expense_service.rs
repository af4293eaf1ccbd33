//! Append-only expense ledger: filtering, aggregation, persistence.

use chrono::NaiveDate;

use spendquest_domain::Expense;

use crate::{store::PersistenceGateway, CoreError};

/// Operations over the persisted expense collection. Records are immutable
/// once appended; `update` and `delete` are the only explicit exceptions,
/// both keyed by id.
pub struct ExpenseService;

impl ExpenseService {
    /// Validates and appends a new expense, persisting the full collection.
    /// Returns the updated collection so callers need not re-read it.
    pub fn append(
        gateway: &PersistenceGateway,
        expense: Expense,
    ) -> Result<Vec<Expense>, CoreError> {
        Self::validate(&expense)?;
        let mut expenses = gateway.load_expenses();
        expenses.push(expense);
        gateway.save_expenses(&expenses)?;
        Ok(expenses)
    }

    /// Replaces the stored expense carrying the same id.
    pub fn update(
        gateway: &PersistenceGateway,
        updated: Expense,
    ) -> Result<Vec<Expense>, CoreError> {
        Self::validate(&updated)?;
        let mut expenses = gateway.load_expenses();
        let Some(slot) = expenses.iter_mut().find(|e| e.id == updated.id) else {
            return Err(CoreError::NotFound(format!("expense {}", updated.id)));
        };
        *slot = updated;
        gateway.save_expenses(&expenses)?;
        Ok(expenses)
    }

    /// Removes the expense with the given id. Removing an unknown id is a
    /// no-op that still rewrites the collection.
    pub fn delete(gateway: &PersistenceGateway, id: &str) -> Result<Vec<Expense>, CoreError> {
        let mut expenses = gateway.load_expenses();
        expenses.retain(|e| e.id != id);
        gateway.save_expenses(&expenses)?;
        Ok(expenses)
    }

    pub fn all(gateway: &PersistenceGateway) -> Vec<Expense> {
        gateway.load_expenses()
    }

    /// Expenses dated within `start..=end`, both bounds inclusive.
    pub fn by_date_range(expenses: &[Expense], start: NaiveDate, end: NaiveDate) -> Vec<Expense> {
        expenses
            .iter()
            .filter(|e| e.date >= start && e.date <= end)
            .cloned()
            .collect()
    }

    pub fn by_category(expenses: &[Expense], category: &str) -> Vec<Expense> {
        expenses
            .iter()
            .filter(|e| e.category == category)
            .cloned()
            .collect()
    }

    pub fn on_date(expenses: &[Expense], date: NaiveDate) -> Vec<Expense> {
        expenses.iter().filter(|e| e.date == date).cloned().collect()
    }

    pub fn total_of(expenses: &[Expense]) -> f64 {
        expenses.iter().map(|e| e.amount).sum()
    }

    /// Top `n` spending categories by summed amount, descending. Ties keep
    /// first-encountered order (the sort is stable over insertion order).
    pub fn top_categories(expenses: &[Expense], n: usize) -> Vec<(String, f64)> {
        let mut totals: Vec<(String, f64)> = Vec::new();
        for expense in expenses {
            match totals.iter_mut().find(|(cat, _)| cat == &expense.category) {
                Some((_, total)) => *total += expense.amount,
                None => totals.push((expense.category.clone(), expense.amount)),
            }
        }
        totals.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        totals.truncate(n);
        totals
    }

    fn validate(expense: &Expense) -> Result<(), CoreError> {
        if !expense.amount.is_finite() || expense.amount < 0.0 {
            return Err(CoreError::Validation(
                "expense amount must be a non-negative number".into(),
            ));
        }
        if expense.category.trim().is_empty() {
            return Err(CoreError::Validation(
                "expense category must not be empty".into(),
            ));
        }
        Ok(())
    }
}
