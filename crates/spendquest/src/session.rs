//! A user session: the cached progression record plus the quest flows that
//! mutate it.

use std::sync::Arc;

use chrono::NaiveDate;

use spendquest_config::Config;
use spendquest_core::{
    CheckInService, Clock, CoreError, ExpenseService, IdentityProvider, PersistenceGateway,
    ProgressionService, SummaryService, SystemClock, UserProfile, WeeklySummary,
};
use spendquest_domain::{CheckIn, CheckInKind, Expense, QuestAnswer, UserStats};
use spendquest_storage_json::JsonFileStore;

/// Category applied to bills captured by the morning quest.
const BILLS_CATEGORY: &str = "Bills & Utilities";

/// One expense captured during the evening quest.
#[derive(Debug, Clone)]
pub struct QuestExpenseEntry {
    pub category: String,
    pub amount: f64,
    pub notes: String,
}

/// Owns the wiring between storage, clock, identity, and the progression
/// rules, and caches the stats snapshot shown to the user.
///
/// All mutating flows take `&mut self`, so a single owner cannot overlap
/// two transitions; a UI driving this object should still disable its
/// triggering control while a call is in flight.
pub struct Session {
    gateway: PersistenceGateway,
    clock: Arc<dyn Clock>,
    identity: Option<Arc<dyn IdentityProvider>>,
    stats: UserStats,
}

impl Session {
    /// Opens a session over the given store, reading the persisted stats
    /// (zero state when nothing is stored yet).
    pub fn open(gateway: PersistenceGateway) -> Self {
        Self::with_clock(gateway, Arc::new(SystemClock))
    }

    /// Opens a session backed by the JSON file store rooted at the
    /// configured data directory.
    pub fn from_config(config: &Config) -> Result<Self, CoreError> {
        let store = JsonFileStore::new(config.resolve_data_root())?;
        Ok(Self::open(PersistenceGateway::new(Arc::new(store))))
    }

    pub fn with_clock(gateway: PersistenceGateway, clock: Arc<dyn Clock>) -> Self {
        let stats = gateway.load_user_stats();
        Self {
            gateway,
            clock,
            identity: None,
            stats,
        }
    }

    pub fn with_identity(mut self, identity: Arc<dyn IdentityProvider>) -> Self {
        self.identity = Some(identity);
        self
    }

    /// The signed-in user, when an identity provider is attached.
    pub fn current_user(&self) -> Option<UserProfile> {
        self.identity
            .as_ref()
            .and_then(|provider| provider.current_user())
    }

    /// The stats snapshot currently presented as truth. Only successfully
    /// persisted transitions are reflected here.
    pub fn stats(&self) -> &UserStats {
        &self.stats
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn gateway(&self) -> &PersistenceGateway {
        &self.gateway
    }

    /// Completes the morning quest: records the check-in, logs each positive
    /// utility amount as a recurring bill expense, and advances the streak.
    pub fn complete_morning_quest(
        &mut self,
        utilities: &[(String, f64)],
    ) -> Result<&UserStats, CoreError> {
        let today = self.clock.today();
        let mut check_in = CheckIn::new(today, CheckInKind::Morning);
        for (label, amount) in utilities {
            check_in
                .questions
                .insert(label.clone(), QuestAnswer::Amount(*amount));
        }
        check_in.mark_completed();
        CheckInService::upsert(&self.gateway, check_in)?;

        for (label, amount) in utilities {
            if *amount > 0.0 {
                let expense =
                    Expense::new(*amount, BILLS_CATEGORY, label.clone(), today).recurring();
                ExpenseService::append(&self.gateway, expense)?;
            }
        }

        self.advance_and_persist()
    }

    /// Completes the evening quest: records the check-in, logs each positive
    /// entry as an expense, and advances the streak.
    pub fn complete_evening_quest(
        &mut self,
        entries: &[QuestExpenseEntry],
    ) -> Result<&UserStats, CoreError> {
        let today = self.clock.today();
        let mut check_in = CheckIn::new(today, CheckInKind::Evening);
        check_in.mark_completed();
        CheckInService::upsert(&self.gateway, check_in)?;

        for entry in entries {
            if entry.amount > 0.0 {
                let expense = Expense::new(
                    entry.amount,
                    entry.category.clone(),
                    entry.notes.clone(),
                    today,
                );
                ExpenseService::append(&self.gateway, expense)?;
            }
        }

        self.advance_and_persist()
    }

    /// Today's morning and evening check-ins, if recorded.
    pub fn today_check_ins(&self) -> (Option<CheckIn>, Option<CheckIn>) {
        (
            CheckInService::find_today(&self.gateway, self.clock.as_ref(), CheckInKind::Morning),
            CheckInService::find_today(&self.gateway, self.clock.as_ref(), CheckInKind::Evening),
        )
    }

    /// Validates and persists a new weekly goal, returning the updated stats.
    pub fn set_weekly_goal(&mut self, goal: f64) -> Result<&UserStats, CoreError> {
        self.stats = SummaryService::set_weekly_goal(&self.gateway, &self.stats, goal)?;
        Ok(&self.stats)
    }

    /// Aggregates the current week's spending against the weekly goal.
    pub fn weekly_summary(&self) -> WeeklySummary {
        let expenses = self.gateway.load_expenses();
        SummaryService::weekly(&expenses, &self.stats, self.clock.today())
    }

    pub fn expenses(&self) -> Vec<Expense> {
        self.gateway.load_expenses()
    }

    fn advance_and_persist(&mut self) -> Result<&UserStats, CoreError> {
        let advanced =
            ProgressionService::advance(&self.stats, self.clock.today(), self.clock.now());
        // On a failed save the cached snapshot stays at the pre-transition
        // state; re-attempting the triggering action re-derives the same
        // advanced value from that snapshot, so nothing double-counts.
        self.gateway.save_user_stats(&advanced)?;
        self.stats = advanced;
        Ok(&self.stats)
    }
}
