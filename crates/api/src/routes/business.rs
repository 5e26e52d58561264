use axum::{
    extract::{DefaultBodyLimit, Multipart, State},
    routing::{get, post},
    Json, Router,
};
use base64::Engine;
use serde_json::{json, Value};

use crate::auth::AuthUser;
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use crate::store::businesses::{self, BusinessSetup};

/// Logo uploads are capped at 5 MB.
const MAX_LOGO_BYTES: usize = 5 * 1024 * 1024;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/business/setup", post(setup))
        // Room for the 5 MB logo plus the text fields.
        .layer(DefaultBodyLimit::max(8 * 1024 * 1024))
        .route("/business/my-business", get(my_business))
}

/// Create or update the caller's business from a multipart form. The logo,
/// when present, is stored inline as a base64 data URI.
async fn setup(
    State(state): State<AppState>,
    user: AuthUser,
    mut multipart: Multipart,
) -> ApiResult<Json<Value>> {
    let mut form = BusinessSetup::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("invalid multipart body: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "logo" => {
                let content_type = field.content_type().unwrap_or_default().to_string();
                if !content_type.starts_with("image/") {
                    return Err(ApiError::BadRequest(
                        "Only image files are allowed".to_string(),
                    ));
                }
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("failed to read logo: {e}")))?;
                if bytes.len() > MAX_LOGO_BYTES {
                    return Err(ApiError::BadRequest("Logo exceeds 5MB limit".to_string()));
                }
                let encoded = base64::engine::general_purpose::STANDARD.encode(&bytes);
                form.logo_url = Some(format!("data:{content_type};base64,{encoded}"));
            }
            other => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("invalid field {other}: {e}")))?;
                let value = (!value.is_empty()).then_some(value);
                match other {
                    "businessTypeId" => form.business_type_id = value.unwrap_or_default(),
                    "businessName" => form.business_name = value.unwrap_or_default(),
                    "tagline" => form.tagline = value,
                    "description" => form.description = value,
                    "primaryColor" => form.primary_color = value,
                    "phone" => form.phone = value,
                    "email" => form.email = value,
                    "address" => form.address = value,
                    // Unknown fields are ignored, not errors.
                    _ => {}
                }
            }
        }
    }

    if form.business_type_id.is_empty() || form.business_name.is_empty() {
        return Err(ApiError::BadRequest(
            "Business type and name are required".to_string(),
        ));
    }

    let business = businesses::upsert(state.pool(), user.user_id, &form).await?;
    Ok(Json(json!({ "business": business })))
}

async fn my_business(State(state): State<AppState>, user: AuthUser) -> ApiResult<Json<Value>> {
    let business = businesses::find_by_user(state.pool(), user.user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Business not found".to_string()))?;

    Ok(Json(json!({ "business": business })))
}
