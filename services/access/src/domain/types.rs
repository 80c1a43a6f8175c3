use chrono::{DateTime, Utc};

/// Lifecycle status of an access key. `Active` is entered exactly once and
/// never left; a key past its expiry is deleted rather than given a third
/// state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyStatus {
    Pending,
    Active,
}

/// Single-use access key record as stored.
#[derive(Debug, Clone)]
pub struct AccessKey {
    pub code: String,
    pub status: KeyStatus,
    pub owner_email: Option<String>,
    pub expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Classification of a found key against one caller at one instant. Together
/// with the not-found case this is the full decision table for a check:
/// exactly one of {NotFound, Pending, ActiveForeign, ActiveExpired,
/// ActiveValid} holds per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyState {
    /// Never redeemed; this caller may attempt activation.
    Pending,
    /// Bound to a different email.
    ActiveForeign,
    /// Bound to this email but the validity window has elapsed.
    ActiveExpired,
    /// Bound to this email and still inside the validity window.
    ActiveValid,
}

impl KeyState {
    pub fn classify(key: &AccessKey, email: &str, now: DateTime<Utc>) -> Self {
        match key.status {
            KeyStatus::Pending => Self::Pending,
            KeyStatus::Active => {
                if key.owner_email.as_deref() != Some(email) {
                    Self::ActiveForeign
                } else if key.expires_at.is_none_or(|at| now >= at) {
                    // An active key without an expiry violates the record
                    // invariant; treat it as expired so it gets cleaned up.
                    Self::ActiveExpired
                } else {
                    Self::ActiveValid
                }
            }
        }
    }
}

/// Default validity window after activation, in seconds (5 minutes).
pub const DEFAULT_KEY_TTL_SECS: i64 = 300;

/// Default number of random bytes per key code (16 hex characters).
pub const DEFAULT_KEY_CODE_BYTES: usize = 8;
