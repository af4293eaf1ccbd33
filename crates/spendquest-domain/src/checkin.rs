//! Domain models for daily quest check-ins.

use std::{collections::BTreeMap, fmt};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
/// Distinguishes the two daily quest slots.
#[serde(rename_all = "lowercase")]
pub enum CheckInKind {
    Morning,
    Evening,
}

impl CheckInKind {
    pub fn slug(self) -> &'static str {
        match self {
            CheckInKind::Morning => "morning",
            CheckInKind::Evening => "evening",
        }
    }
}

impl fmt::Display for CheckInKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CheckInKind::Morning => "Morning",
            CheckInKind::Evening => "Evening",
        };
        f.write_str(label)
    }
}

/// Answer recorded for one quest question. Morning quests capture amounts,
/// evening quests capture yes/no flags.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum QuestAnswer {
    Flag(bool),
    Amount(f64),
}

/// One completed (or in-progress) quest for a `(date, kind)` slot. The
/// tracker guarantees at most one record per slot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CheckIn {
    pub id: String,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: CheckInKind,
    #[serde(default)]
    pub questions: BTreeMap<String, QuestAnswer>,
    pub completed: bool,
}

impl CheckIn {
    pub fn new(date: NaiveDate, kind: CheckInKind) -> Self {
        Self {
            id: format!("{}-{}", date, kind.slug()),
            date,
            kind,
            questions: BTreeMap::new(),
            completed: false,
        }
    }

    pub fn with_questions(mut self, questions: BTreeMap<String, QuestAnswer>) -> Self {
        self.questions = questions;
        self
    }

    pub fn mark_completed(&mut self) {
        self.completed = true;
    }
}
