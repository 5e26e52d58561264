use axum::{extract::State, routing::post, Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};

use siteforge_core::auth::{jwt, password};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use crate::store::users;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/auth/signup", post(signup))
        .route("/auth/login", post(login))
}

#[derive(Debug, Deserialize)]
struct SignupRequest {
    email: String,
    password: String,
    name: String,
    company: Option<String>,
}

async fn signup(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> ApiResult<Json<Value>> {
    if req.email.is_empty() || req.password.is_empty() || req.name.is_empty() {
        return Err(ApiError::BadRequest(
            "Email, password, and name are required".to_string(),
        ));
    }

    let password_hash = password::hash_password(&req.password)
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    let user = users::create(
        state.pool(),
        &req.email,
        &password_hash,
        &req.name,
        req.company.as_deref(),
    )
    .await
    .map_err(|err| {
        if users::is_unique_violation(&err) {
            ApiError::BadRequest("Email already registered".to_string())
        } else {
            ApiError::Database(err)
        }
    })?;

    let token = jwt::issue_token(user.id, &user.email, &state.config().jwt_secret)
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    Ok(Json(json!({ "user": user, "token": token })))
}

#[derive(Debug, Deserialize)]
struct LoginRequest {
    email: String,
    password: String,
}

async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<Value>> {
    if req.email.is_empty() || req.password.is_empty() {
        return Err(ApiError::BadRequest(
            "Email and password are required".to_string(),
        ));
    }

    let user = users::find_by_email(state.pool(), &req.email)
        .await?
        .ok_or(ApiError::InvalidCredentials)?;

    if !password::verify_password(&req.password, &user.password_hash) {
        return Err(ApiError::InvalidCredentials);
    }

    let token = jwt::issue_token(user.id, &user.email, &state.config().jwt_secret)
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    Ok(Json(json!({ "user": user, "token": token })))
}
