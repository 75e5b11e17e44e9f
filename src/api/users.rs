//! User CRUD endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, MessageResponse};
use crate::domain::user::User;
use crate::infrastructure::user::UserInput;

/// Request body for creating or replacing a user
///
/// Updates replace all three fields wholesale; there is no partial update.
#[derive(Debug, Clone, Deserialize)]
pub struct UserBody {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl From<UserBody> for UserInput {
    fn from(body: UserBody) -> Self {
        Self {
            username: body.username,
            email: body.email,
            password: body.password,
        }
    }
}

/// User response (safe to expose - no password field)
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id(),
            username: user.username().to_string(),
            email: user.email().to_string(),
        }
    }
}

/// List users response
#[derive(Debug, Clone, Serialize)]
pub struct UserListResponse {
    pub users: Vec<UserResponse>,
}

/// Paging parameters for listing users
///
/// Neither is validated beyond the defaults: `limit=0` yields an empty
/// page and an offset past the end yields an empty page, not an error.
#[derive(Debug, Clone, Deserialize)]
pub struct ListUsersQuery {
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
}

fn default_limit() -> i64 {
    10
}

/// POST /users/
pub async fn create_user(
    State(state): State<AppState>,
    Json(body): Json<UserBody>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    debug!(username = %body.username, "Creating user");

    let user = state.user_service.create(body.into()).await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(&user))))
}

/// GET /users/
pub async fn list_users(
    State(state): State<AppState>,
    Query(query): Query<ListUsersQuery>,
) -> Result<Json<UserListResponse>, ApiError> {
    debug!(limit = query.limit, offset = query.offset, "Listing users");

    let users = state.user_service.list(query.limit, query.offset).await?;

    Ok(Json(UserListResponse {
        users: users.iter().map(UserResponse::from).collect(),
    }))
}

/// GET /users/{user_id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<UserResponse>, ApiError> {
    debug!(user_id, "Getting user");

    let user = state
        .user_service
        .get(user_id)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    Ok(Json(UserResponse::from(&user)))
}

/// PUT /users/{user_id}
pub async fn update_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
    Json(body): Json<UserBody>,
) -> Result<Json<UserResponse>, ApiError> {
    debug!(user_id, "Updating user");

    let user = state.user_service.update(user_id, body.into()).await?;

    Ok(Json(UserResponse::from(&user)))
}

/// DELETE /users/{user_id}
pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    debug!(user_id, "Deleting user");

    state.user_service.delete(user_id).await?;

    Ok(Json(MessageResponse::new("User deleted")))
}
