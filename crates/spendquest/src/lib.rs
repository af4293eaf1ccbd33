//! spendquest
//!
//! Session-level orchestration for the gamified expense tracker: wires the
//! storage gateway, clock, and identity seam behind the quest flows a UI
//! consumes.

pub mod session;

pub use session::{QuestExpenseEntry, Session};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("spendquest=info".parse().unwrap());

        fmt().with_env_filter(filter).init();
        tracing::info!("SpendQuest tracing initialized.");
    });
}
