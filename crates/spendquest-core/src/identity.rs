//! Identity seam. The core treats the signed-in user as opaque: stored
//! collections are not keyed by user id (single-profile-per-device model).

use chrono::{DateTime, Utc};

use crate::CoreError;

/// Profile data exposed by the external identity service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Abstraction over the external authentication service.
pub trait IdentityProvider: Send + Sync {
    /// The currently signed-in user, if a session exists.
    fn current_user(&self) -> Option<UserProfile>;

    fn sign_in(&self, email: &str, password: &str) -> Result<UserProfile, CoreError>;

    fn sign_up(&self, email: &str, password: &str) -> Result<UserProfile, CoreError>;

    fn sign_out(&self) -> Result<(), CoreError>;
}
