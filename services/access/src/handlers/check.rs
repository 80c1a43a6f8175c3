use axum::{Json, extract::State};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AccessServiceError;
use crate::state::AppState;
use crate::usecase::check_key::{CheckKeyInput, CheckKeyUseCase, CheckOutcome};

#[derive(Deserialize)]
pub struct CheckKeyRequest {
    // Both optional at the JSON level so an omitted field reaches the
    // usecase's own validation (400) instead of a deserialization reject.
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Serialize)]
pub struct CheckKeyResponse {
    pub valid: bool,
    pub message: &'static str,
    pub expires_at: DateTime<Utc>,
}

pub async fn check_key(
    State(state): State<AppState>,
    Json(body): Json<CheckKeyRequest>,
) -> Result<Json<CheckKeyResponse>, AccessServiceError> {
    let usecase = CheckKeyUseCase {
        keys: state.access_key_repo(),
        ttl_secs: state.key_ttl_secs,
    };

    let outcome = usecase
        .execute(CheckKeyInput {
            code: body.key.unwrap_or_default(),
            email: body.email.unwrap_or_default(),
        })
        .await?;

    let (message, expires_at) = match outcome {
        CheckOutcome::Activated { expires_at } => ("key activated", expires_at),
        CheckOutcome::Valid { expires_at } => ("key valid", expires_at),
    };

    Ok(Json(CheckKeyResponse {
        valid: true,
        message,
        expires_at,
    }))
}
