use axum::{
    extract::State,
    routing::{get, post, put},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};

use siteforge_core::content::{form, ContentDocument};

use crate::auth::AuthUser;
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use crate::store::{analytics, businesses, sites};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/admin/content", put(update_content))
        .route("/admin/content/form", get(edit_form))
        .route("/admin/dashboard", get(dashboard))
        .route("/admin/publish", post(publish))
        .route("/admin/unpublish", post(unpublish))
}

#[derive(Debug, Deserialize)]
struct UpdateContentRequest {
    content: Option<Value>,
}

/// Overwrite the content document wholesale with client-supplied JSON.
/// Deliberately no shape validation: the document is schema-on-read.
async fn update_content(
    State(state): State<AppState>,
    user: AuthUser,
    Json(req): Json<UpdateContentRequest>,
) -> ApiResult<Json<Value>> {
    let content = req
        .content
        .ok_or_else(|| ApiError::BadRequest("Content is required".to_string()))?;

    let business = businesses::find_by_user(state.pool(), user.user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Business not found".to_string()))?;

    let site = sites::update_content(state.pool(), business.id, &content)
        .await?
        .ok_or_else(|| ApiError::NotFound("Site not found".to_string()))?;

    Ok(Json(json!({ "site": site })))
}

/// Editable field descriptors per page, ready for the admin UI to bind
/// inputs to. Sections the editor does not understand expose no fields.
async fn edit_form(State(state): State<AppState>, user: AuthUser) -> ApiResult<Json<Value>> {
    let business = businesses::find_by_user(state.pool(), user.user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Business not found".to_string()))?;

    let site = sites::find_by_business(state.pool(), business.id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Site not found".to_string()))?;

    let pages = match ContentDocument::from_value(&site.content) {
        ContentDocument::MultiPage(doc) => doc
            .pages
            .iter()
            .map(|page| {
                let sections: Vec<_> = page
                    .sections
                    .iter()
                    .enumerate()
                    .map(|(idx, section)| json!(form::section_fields(section, idx)))
                    .collect();
                json!({ "slug": page.slug, "title": page.title, "sections": sections })
            })
            .collect::<Vec<_>>(),
        ContentDocument::Legacy(_) => Vec::new(),
    };

    Ok(Json(json!({ "pages": pages })))
}

/// Business, site, and headline analytics in one payload. The analytics
/// numbers are canned; real aggregation never shipped.
async fn dashboard(State(state): State<AppState>, user: AuthUser) -> ApiResult<Json<Value>> {
    let business = businesses::find_by_user(state.pool(), user.user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Business not found".to_string()))?;

    let site = sites::find_by_business(state.pool(), business.id).await?;

    Ok(Json(json!({
        "business": business,
        "site": site,
        "analytics": {
            "totalVisitors": "12,847",
            "pageViews": "48,392",
            "bounceRate": "32.1%",
            "avgDuration": "3:24"
        }
    })))
}

async fn publish(State(state): State<AppState>, user: AuthUser) -> ApiResult<Json<Value>> {
    set_published(state, user, true).await
}

async fn unpublish(State(state): State<AppState>, user: AuthUser) -> ApiResult<Json<Value>> {
    set_published(state, user, false).await
}

async fn set_published(state: AppState, user: AuthUser, published: bool) -> ApiResult<Json<Value>> {
    let business = businesses::find_by_user(state.pool(), user.user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Business not found".to_string()))?;

    let site = sites::set_published(state.pool(), business.id, published)
        .await?
        .ok_or_else(|| ApiError::NotFound("Site not found".to_string()))?;

    let event = if published { "site_published" } else { "site_unpublished" };
    analytics::record(state.pool(), business.id, event, json!({})).await;

    Ok(Json(json!({ "site": site })))
}
