//! Token issuance endpoint

use axum::{extract::State, Form, Json};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::ApiError;

/// OAuth2-style password form; `username` carries the email address
#[derive(Debug, Deserialize)]
pub struct TokenForm {
    pub username: String,
    pub password: String,
}

/// Issued access token
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

/// POST /token
///
/// Unknown email and wrong password produce the same 401 so that the
/// response does not reveal which accounts exist.
pub async fn login(
    State(state): State<AppState>,
    Form(form): Form<TokenForm>,
) -> Result<Json<TokenResponse>, ApiError> {
    debug!("Token requested");

    let user = state
        .user_service
        .authenticate(&form.username, &form.password)
        .await?
        .ok_or_else(|| ApiError::unauthorized("Incorrect email or password"))?;

    let access_token = state.token_issuer.issue(user.email())?;

    Ok(Json(TokenResponse {
        access_token,
        token_type: "Bearer".to_string(),
    }))
}
