use sea_orm::DatabaseConnection;

use crate::infra::db::DbAccessKeyRepository;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    /// Validity window granted at activation, in seconds.
    pub key_ttl_secs: i64,
    /// Random bytes per generated key code.
    pub key_code_bytes: usize,
}

impl AppState {
    pub fn access_key_repo(&self) -> DbAccessKeyRepository {
        DbAccessKeyRepository {
            db: self.db.clone(),
        }
    }
}
