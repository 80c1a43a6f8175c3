use chrono::{DateTime, Duration, Utc};

use crate::domain::repository::AccessKeyRepository;
use crate::domain::types::{AccessKey, KeyState};
use crate::error::AccessServiceError;

pub struct CheckKeyInput {
    pub code: String,
    pub email: String,
}

/// The two successful outcomes of a check. Everything else is an
/// `AccessServiceError`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutcome {
    /// First redemption: the key is now bound to this email.
    Activated { expires_at: DateTime<Utc> },
    /// Re-validation by the owner inside the validity window.
    Valid { expires_at: DateTime<Utc> },
}

pub struct CheckKeyUseCase<R: AccessKeyRepository> {
    pub keys: R,
    /// Validity window granted at activation, in seconds.
    pub ttl_secs: i64,
}

impl<R: AccessKeyRepository> CheckKeyUseCase<R> {
    /// Run one check against the key lifecycle state machine:
    ///
    /// | state          | effect                        | result            |
    /// |----------------|-------------------------------|-------------------|
    /// | NotFound       | none                          | InvalidKey        |
    /// | Pending        | conditional activate          | Activated (winner)|
    /// | ActiveForeign  | none                          | OwnershipMismatch |
    /// | ActiveExpired  | conditional delete            | KeyExpired        |
    /// | ActiveValid    | none                          | Valid             |
    ///
    /// Both transitions are conditional store operations checked by affected
    /// row count, so concurrent checks of the same code cannot double-
    /// activate or validate a key another call already deleted.
    pub async fn execute(&self, input: CheckKeyInput) -> Result<CheckOutcome, AccessServiceError> {
        if input.code.is_empty() || input.email.is_empty() {
            return Err(AccessServiceError::MissingInput);
        }

        let now = Utc::now();
        let key = self
            .keys
            .find(&input.code)
            .await?
            .ok_or(AccessServiceError::InvalidKey)?;

        match KeyState::classify(&key, &input.email, now) {
            KeyState::Pending => {
                let expires_at = now + Duration::seconds(self.ttl_secs);
                if self
                    .keys
                    .activate(&input.code, &input.email, expires_at)
                    .await?
                {
                    return Ok(CheckOutcome::Activated { expires_at });
                }
                // Lost the activation race: someone else bound the key
                // between our read and the conditional update. Re-read and
                // judge the now-active record; if it vanished meanwhile it
                // was expired and deleted, which reads as InvalidKey.
                let key = self
                    .keys
                    .find(&input.code)
                    .await?
                    .ok_or(AccessServiceError::InvalidKey)?;
                self.check_active(&key, &input.email, Utc::now()).await
            }
            _ => self.check_active(&key, &input.email, now).await,
        }
    }

    async fn check_active(
        &self,
        key: &AccessKey,
        email: &str,
        now: DateTime<Utc>,
    ) -> Result<CheckOutcome, AccessServiceError> {
        match KeyState::classify(key, email, now) {
            KeyState::Pending => {
                // Active keys never revert to pending, so a pending record
                // here means the store lost an acknowledged activation.
                Err(AccessServiceError::Internal(anyhow::anyhow!(
                    "key {} reverted to pending",
                    key.code
                )))
            }
            KeyState::ActiveForeign => Err(AccessServiceError::OwnershipMismatch),
            KeyState::ActiveExpired => {
                // Lazy expiry: first check past the window removes the row.
                // Only the call whose delete takes effect reports the
                // expiry; anyone ordered after it sees an absent key.
                if self.keys.delete_owned(&key.code, email).await? {
                    Err(AccessServiceError::KeyExpired)
                } else {
                    Err(AccessServiceError::InvalidKey)
                }
            }
            KeyState::ActiveValid => Ok(CheckOutcome::Valid {
                // Invariant: ActiveValid implies expires_at is set.
                expires_at: key.expires_at.unwrap_or(now),
            }),
        }
    }
}
