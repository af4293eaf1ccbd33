//! Domain models for expense records and recurring bills.

use std::fmt;

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single logged expense. Immutable once appended to the ledger, except
/// through explicit update or delete by id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: String,
    pub amount: f64,
    pub category: String,
    #[serde(default)]
    pub notes: String,
    pub date: NaiveDate,
    pub is_recurring: bool,
}

impl Expense {
    pub fn new(
        amount: f64,
        category: impl Into<String>,
        notes: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            amount,
            category: category.into(),
            notes: notes.into(),
            date,
            is_recurring: false,
        }
    }

    /// Marks the expense as originating from a recurring bill.
    pub fn recurring(mut self) -> Self {
        self.is_recurring = true;
        self
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
/// Enumerates supported recurring-bill cadences.
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
}

impl Frequency {
    /// Returns the next due date after `from`. Monthly steps clamp to the
    /// target month's length (Jan 31 -> Feb 28/29).
    pub fn next_after(self, from: NaiveDate) -> NaiveDate {
        match self {
            Frequency::Daily => from + Duration::days(1),
            Frequency::Weekly => from + Duration::weeks(1),
            Frequency::Monthly => shift_month(from, 1),
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Frequency::Daily => "Daily",
            Frequency::Weekly => "Weekly",
            Frequency::Monthly => "Monthly",
        };
        f.write_str(label)
    }
}

/// A recurring bill template. Persisted alongside expenses but only the
/// bookkeeping fields (`next_due`, `is_active`) change over time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecurringExpense {
    pub id: String,
    pub name: String,
    pub amount: f64,
    pub category: String,
    pub frequency: Frequency,
    pub next_due: NaiveDate,
    pub is_active: bool,
}

impl RecurringExpense {
    pub fn new(
        name: impl Into<String>,
        amount: f64,
        category: impl Into<String>,
        frequency: Frequency,
        next_due: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            amount,
            category: category.into(),
            frequency,
            next_due,
            is_active: true,
        }
    }
}

fn shift_month(date: NaiveDate, months: i32) -> NaiveDate {
    let mut year = date.year();
    let mut month = date.month() as i32 + months;
    while month > 12 {
        month -= 12;
        year += 1;
    }
    while month < 1 {
        month += 12;
        year -= 1;
    }
    let day = date.day().min(days_in_month(year, month as u32));
    NaiveDate::from_ymd_opt(year, month as u32, day).unwrap()
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let next_month = if month == 12 { 1 } else { month + 1 };
    let next_year = if month == 12 { year + 1 } else { year };
    let first_next = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, month, 28).unwrap());
    let last_current = first_next - Duration::days(1);
    last_current.day()
}
