pub mod admin;
pub mod auth;
pub mod business;
pub mod health;
pub mod site;

use axum::Router;

use crate::state::AppState;

/// Assemble the full router with all route groups.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(health::routes())
        .merge(auth::routes())
        .merge(business::routes())
        .merge(site::routes())
        .merge(admin::routes())
        .with_state(state)
}
