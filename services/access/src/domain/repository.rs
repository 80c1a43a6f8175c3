#![allow(async_fn_in_trait)]

use chrono::{DateTime, Utc};

use crate::domain::types::AccessKey;
use crate::error::AccessServiceError;

/// Repository for access key records.
///
/// The two mutating transition methods are conditional on the record's
/// current state and report whether they took effect, so the Pending→Active
/// and Active→deleted transitions are single atomic store operations rather
/// than read-then-write sequences. Callers must never cache records between
/// calls.
pub trait AccessKeyRepository: Send + Sync {
    /// Fetch a key by code. `None` covers both never-created and
    /// already-deleted codes; no history is kept.
    async fn find(&self, code: &str) -> Result<Option<AccessKey>, AccessServiceError>;

    /// Insert a fresh pending key. A primary-key collision is an error,
    /// never an overwrite.
    async fn insert(&self, key: &AccessKey) -> Result<(), AccessServiceError>;

    /// Bind a pending key to `email` with the given expiry, conditional on
    /// it still being pending. Returns `true` iff this call performed the
    /// transition; `false` means another caller activated it first.
    async fn activate(
        &self,
        code: &str,
        email: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<bool, AccessServiceError>;

    /// Delete a key, conditional on it being owned by `owner_email`.
    /// Returns `true` iff a row was removed; `false` means it was already
    /// gone.
    async fn delete_owned(&self, code: &str, owner_email: &str)
    -> Result<bool, AccessServiceError>;
}
