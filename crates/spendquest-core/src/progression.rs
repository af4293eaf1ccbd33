//! Streak continuation, the longest-streak high-water mark, and badge
//! unlocks. The transition runs once per completed check-in.

use chrono::{DateTime, NaiveDate, Utc};

use spendquest_domain::{Badge, BadgeKind, UserStats};

use crate::{
    store::PersistenceGateway,
    time::{days_between, Clock},
    CoreError,
};

/// A badge definition plus the condition that unlocks it.
struct BadgeRule {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    icon: &'static str,
    kind: BadgeKind,
    unlocks: fn(&UserStats) -> bool,
}

fn three_day_streak(stats: &UserStats) -> bool {
    // Checked at the exact crossing point; the id-presence guard below means
    // a reset-and-reclimb to 3 does not award a second copy.
    stats.current_streak == 3
}

/// Rules are evaluated against the post-transition stats, in order. Each
/// fires at most once per profile.
const BADGE_RULES: &[BadgeRule] = &[BadgeRule {
    id: "first-week",
    name: "3-Day Streak",
    description: "Tracked spending for 3 days in a row",
    icon: "🔥",
    kind: BadgeKind::Streak,
    unlocks: three_day_streak,
}];

pub struct ProgressionService;

impl ProgressionService {
    /// Applies one completed check-in to the stats snapshot.
    ///
    /// Pure: every comparison reads the pre-update snapshot, so the same
    /// inputs always produce the same output and a caller whose save failed
    /// can re-derive the result without double-counting.
    pub fn advance(stats: &UserStats, today: NaiveDate, now: DateTime<Utc>) -> UserStats {
        let mut next = stats.clone();
        next.total_check_ins += 1;

        match stats.last_check_in_date {
            // A second check-in the same day never double-increments.
            Some(last) if last == today => {}
            Some(last) if days_between(last, today) == 1 => next.current_streak += 1,
            // Gap of more than a day, never checked in, or the clock moved
            // backwards: the check-in itself counts as day one.
            _ => next.current_streak = 1,
        }

        next.longest_streak = next.longest_streak.max(next.current_streak);
        next.last_check_in_date = Some(today);

        for rule in BADGE_RULES {
            if (rule.unlocks)(&next) && !next.has_badge(rule.id) {
                next.badges.push(Badge {
                    id: rule.id.to_string(),
                    name: rule.name.to_string(),
                    description: rule.description.to_string(),
                    icon: rule.icon.to_string(),
                    unlocked_at: now,
                    kind: rule.kind,
                });
            }
        }

        next
    }

    /// Advances the stats for a completed check-in and persists the result.
    ///
    /// When the save fails the advanced value is discarded; the stored state
    /// still holds the pre-transition snapshot, so the whole operation can
    /// be re-attempted. Callers that want to retry only the save should use
    /// [`ProgressionService::advance`] plus
    /// [`PersistenceGateway::save_user_stats`] directly.
    pub fn record_check_in(
        gateway: &PersistenceGateway,
        stats: &UserStats,
        clock: &dyn Clock,
    ) -> Result<UserStats, CoreError> {
        let advanced = Self::advance(stats, clock.today(), clock.now());
        gateway.save_user_stats(&advanced)?;
        Ok(advanced)
    }
}
