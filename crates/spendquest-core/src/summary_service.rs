//! Weekly goal aggregation and spending summaries.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use spendquest_domain::{Expense, UserStats};

use crate::{
    expense_service::ExpenseService,
    store::PersistenceGateway,
    time::{week_end, week_start},
    CoreError,
};

/// This week's spending measured against the weekly goal.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WeeklySummary {
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
    pub spent: f64,
    pub goal: f64,
    /// Amount left before the goal is reached, floored at zero.
    pub remaining: f64,
    /// Fraction of the goal consumed, clamped to 0..=1. Zero when no goal
    /// is set.
    pub progress: f64,
    pub over_budget: bool,
}

pub struct SummaryService;

impl SummaryService {
    /// Aggregates the week containing `reference` (Sunday through Saturday,
    /// both inclusive) against the stored weekly goal.
    pub fn weekly(expenses: &[Expense], stats: &UserStats, reference: NaiveDate) -> WeeklySummary {
        let start = week_start(reference);
        let end = week_end(reference);
        let spent = ExpenseService::total_of(&ExpenseService::by_date_range(expenses, start, end));
        let goal = stats.weekly_goal;
        let progress = if goal > 0.0 { (spent / goal).min(1.0) } else { 0.0 };
        WeeklySummary {
            week_start: start,
            week_end: end,
            spent,
            goal,
            remaining: (goal - spent).max(0.0),
            progress,
            over_budget: goal > 0.0 && spent > goal,
        }
    }

    /// Total spent in the calendar month containing `reference`.
    pub fn month_total(expenses: &[Expense], reference: NaiveDate) -> f64 {
        expenses
            .iter()
            .filter(|e| e.date.year() == reference.year() && e.date.month() == reference.month())
            .map(|e| e.amount)
            .sum()
    }

    /// Validates and persists a new weekly goal, returning the updated stats.
    pub fn set_weekly_goal(
        gateway: &PersistenceGateway,
        stats: &UserStats,
        goal: f64,
    ) -> Result<UserStats, CoreError> {
        if !goal.is_finite() || goal < 0.0 {
            return Err(CoreError::Validation(
                "weekly goal must be a non-negative number".into(),
            ));
        }
        let mut next = stats.clone();
        next.weekly_goal = goal;
        gateway.save_user_stats(&next)?;
        Ok(next)
    }
}
