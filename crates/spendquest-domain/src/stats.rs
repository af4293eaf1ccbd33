//! User progression state: streaks, badges, and the weekly spending goal.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
/// Groups badges by the behavior they reward.
#[serde(rename_all = "lowercase")]
pub enum BadgeKind {
    Streak,
    Spending,
    Consistency,
}

impl fmt::Display for BadgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BadgeKind::Streak => "Streak",
            BadgeKind::Spending => "Spending",
            BadgeKind::Consistency => "Consistency",
        };
        f.write_str(label)
    }
}

/// An unlocked achievement. Badge ids are unique within a profile; the same
/// id is never awarded twice.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Badge {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub unlocked_at: DateTime<Utc>,
    #[serde(rename = "type")]
    pub kind: BadgeKind,
}

/// The singleton progression record. Zero state on first use; mutated only
/// by the progression rules and explicit goal edits, never deleted.
///
/// Invariants: `longest_streak >= current_streak`, `total_check_ins` never
/// decreases, `badges` is append-only with insertion order as unlock order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct UserStats {
    pub current_streak: u32,
    pub longest_streak: u32,
    pub total_check_ins: u32,
    pub badges: Vec<Badge>,
    pub weekly_goal: f64,
    #[serde(with = "day_key")]
    pub last_check_in_date: Option<NaiveDate>,
}

impl UserStats {
    pub fn has_badge(&self, id: &str) -> bool {
        self.badges.iter().any(|badge| badge.id == id)
    }
}

/// Stored documents encode an absent day key as the empty string, never as
/// null; this keeps round-trip fidelity with existing data.
mod day_key {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S>(value: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(date) => serializer.serialize_str(&date.format(FORMAT).to_string()),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        if raw.is_empty() {
            return Ok(None);
        }
        NaiveDate::parse_from_str(&raw, FORMAT)
            .map(Some)
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_stats_are_the_zero_state() {
        let stats = UserStats::default();

        assert_eq!(stats.current_streak, 0);
        assert_eq!(stats.longest_streak, 0);
        assert_eq!(stats.total_check_ins, 0);
        assert!(stats.badges.is_empty());
        assert_eq!(stats.weekly_goal, 0.0);
        assert_eq!(stats.last_check_in_date, None);
    }

    #[test]
    fn absent_last_check_in_serializes_as_empty_string() {
        let stats = UserStats::default();
        let json = serde_json::to_value(&stats).expect("serialize");

        assert_eq!(json["lastCheckInDate"], "");
    }

    #[test]
    fn parses_documents_written_by_earlier_versions() {
        let raw = r#"{
            "currentStreak": 2,
            "longestStreak": 5,
            "totalCheckIns": 11,
            "badges": [],
            "weeklyGoal": 150,
            "lastCheckInDate": "2024-01-02"
        }"#;
        let stats: UserStats = serde_json::from_str(raw).expect("parse");

        assert_eq!(stats.current_streak, 2);
        assert_eq!(stats.longest_streak, 5);
        assert_eq!(stats.weekly_goal, 150.0);
        assert_eq!(
            stats.last_check_in_date,
            NaiveDate::from_ymd_opt(2024, 1, 2)
        );
    }

    #[test]
    fn has_badge_matches_by_id() {
        let mut stats = UserStats::default();
        stats.badges.push(Badge {
            id: "first-week".into(),
            name: "3-Day Streak".into(),
            description: "Tracked spending for 3 days in a row".into(),
            icon: "🔥".into(),
            unlocked_at: Utc::now(),
            kind: BadgeKind::Streak,
        });

        assert!(stats.has_badge("first-week"));
        assert!(!stats.has_badge("big-saver"));
    }
}
