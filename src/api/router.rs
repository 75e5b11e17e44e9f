use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use super::auth;
use super::health;
use super::state::AppState;
use super::users;

/// Create the full router with application state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Root greeting
        .route("/", get(health::index))
        // Health endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::live_check))
        .route("/ready", get(health::ready_check))
        // User CRUD
        .route(
            "/users/",
            post(users::create_user).get(users::list_users),
        )
        .route(
            "/users/{user_id}",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
        // Token issuance
        .route("/token", post(auth::login))
        // Add state and middleware
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
