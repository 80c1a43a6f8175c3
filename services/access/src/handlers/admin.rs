use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;

use crate::error::AccessServiceError;
use crate::state::AppState;
use crate::usecase::create_key::CreateKeyUseCase;

#[derive(Serialize)]
pub struct CreateKeyResponse {
    pub key: String,
}

pub async fn create_key(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<CreateKeyResponse>), AccessServiceError> {
    let usecase = CreateKeyUseCase {
        keys: state.access_key_repo(),
        code_bytes: state.key_code_bytes,
    };
    let key = usecase.execute().await?;
    Ok((StatusCode::CREATED, Json(CreateKeyResponse { key })))
}
