use std::time::Duration;

use axum::{
    extract::State,
    response::Html,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};

use siteforge_core::business::{types, Business, BusinessType};
use siteforge_core::content::render;
use siteforge_core::generate::{self, fallback, prompt};
use siteforge_openai::{ChatClient, ChatMessage, OpenAiError};

use crate::auth::AuthUser;
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use crate::store::{analytics, businesses, sites};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/site/generate", post(generate_site))
        .route("/site/content", get(content))
        .route("/site/preview", get(preview))
}

/// Run content generation for the caller's business and persist the result.
/// Any generation failure collapses to the deterministic fallback document;
/// this endpoint only errors when the business is missing or the database
/// write fails.
async fn generate_site(State(state): State<AppState>, user: AuthUser) -> ApiResult<Json<Value>> {
    let business = businesses::find_by_user(state.pool(), user.user_id)
        .await?
        .ok_or_else(|| {
            ApiError::NotFound(
                "Business not found. Please complete business setup first.".to_string(),
            )
        })?;

    let industry = types::business_type(&business.business_type_id)
        .ok_or_else(|| ApiError::BadRequest("Invalid business type".to_string()))?;

    let images = generate_images(state.openai(), &business, industry).await;

    let model_output = match state.openai() {
        Some(client) => {
            let messages = [
                ChatMessage::system(prompt::SYSTEM_PROMPT),
                ChatMessage::user(prompt::site_prompt(&business, industry)),
            ];
            let budget = Duration::from_secs(state.config().generation_timeout_secs);
            match tokio::time::timeout(budget, client.complete(&messages, prompt::SITE_MAX_TOKENS))
                .await
            {
                Ok(result) => result,
                Err(_) => Err(OpenAiError::Timeout),
            }
        }
        None => Err(OpenAiError::Transport("no OpenAI API key configured".to_string())),
    };

    let outcome = generate::assemble(model_output, &business, industry, &images);

    let site = sites::upsert_content(state.pool(), business.id, &outcome.document).await?;

    analytics::record(
        state.pool(),
        business.id,
        "site_generated",
        json!({ "usedFallback": outcome.used_fallback }),
    )
    .await;

    let mut body = json!({ "site": site });
    if outcome.used_fallback {
        body["warning"] = json!("Generated fallback content due to API error");
    }
    Ok(Json(body))
}

/// Generate the five site images, one placeholder per failed call. Never
/// fails: with no client configured the whole set is placeholders.
async fn generate_images(
    client: Option<&ChatClient>,
    business: &Business,
    industry: &BusinessType,
) -> Vec<String> {
    let color = business.color().to_string();
    let Some(client) = client else {
        return fallback::placeholder_images(&color);
    };

    let mut images = Vec::with_capacity(5);
    for image_prompt in prompt::image_prompts(business, industry) {
        match client.generate_image(&image_prompt).await {
            Ok(url) => images.push(url),
            Err(err) => {
                tracing::warn!(business_id = %business.id, error = %err, "image generation failed, using placeholder");
                images.push(fallback::placeholder_image(&color, &business.business_name));
            }
        }
    }
    images
}

async fn content(State(state): State<AppState>, user: AuthUser) -> ApiResult<Json<Value>> {
    let (_, site) = load_site(&state, &user).await?;
    Ok(Json(json!({ "site": site })))
}

/// Server-rendered HTML of the current content document (published or not).
async fn preview(State(state): State<AppState>, user: AuthUser) -> ApiResult<Html<String>> {
    let (business, site) = load_site(&state, &user).await?;
    Ok(Html(render::render_document(
        &site.content,
        &business.business_name,
    )))
}

async fn load_site(
    state: &AppState,
    user: &AuthUser,
) -> ApiResult<(Business, siteforge_core::site::Site)> {
    let business = businesses::find_by_user(state.pool(), user.user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Business not found".to_string()))?;

    let site = sites::find_by_business(state.pool(), business.id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Site not found".to_string()))?;

    Ok((business, site))
}
