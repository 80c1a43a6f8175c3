use chrono::Utc;
use rand::RngExt;

use crate::domain::repository::AccessKeyRepository;
use crate::domain::types::{AccessKey, KeyStatus};
use crate::error::AccessServiceError;

/// Charset for key codes (lowercase hex, safe to paste anywhere).
const CHARSET: &[u8] = b"0123456789abcdef";

fn generate_code(code_bytes: usize) -> String {
    let mut rng = rand::rng();
    (0..code_bytes * 2)
        .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
        .collect()
}

pub struct CreateKeyUseCase<R: AccessKeyRepository> {
    pub keys: R,
    /// Random bytes per code; the code is twice this many hex characters.
    pub code_bytes: usize,
}

impl<R: AccessKeyRepository> CreateKeyUseCase<R> {
    /// Mint a fresh pending key and return its code. Owner and expiry stay
    /// unset until first redemption. The store's primary-key constraint
    /// turns a (vanishingly unlikely) code collision into an insert error
    /// rather than an overwrite.
    pub async fn execute(&self) -> Result<String, AccessServiceError> {
        let code = generate_code(self.code_bytes);
        let key = AccessKey {
            code: code.clone(),
            status: KeyStatus::Pending,
            owner_email: None,
            expires_at: None,
            created_at: Utc::now(),
        };
        self.keys.insert(&key).await?;
        Ok(code)
    }
}
