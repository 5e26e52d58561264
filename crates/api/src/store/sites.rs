use serde_json::Value;
use siteforge_core::site::Site;
use sqlx::PgPool;
use uuid::Uuid;

pub async fn find_by_business(
    pool: &PgPool,
    business_id: Uuid,
) -> Result<Option<Site>, sqlx::Error> {
    sqlx::query_as::<_, Site>("SELECT * FROM sites WHERE business_id = $1")
        .bind(business_id)
        .fetch_optional(pool)
        .await
}

/// Write the content document, creating the site row on first generation.
/// Single-statement writes; last writer wins by design.
pub async fn upsert_content(
    pool: &PgPool,
    business_id: Uuid,
    content: &Value,
) -> Result<Site, sqlx::Error> {
    let updated = sqlx::query_as::<_, Site>(
        r#"
        UPDATE sites
        SET content = $2, updated_at = NOW()
        WHERE business_id = $1
        RETURNING *
        "#,
    )
    .bind(business_id)
    .bind(content)
    .fetch_optional(pool)
    .await?;

    match updated {
        Some(site) => Ok(site),
        None => {
            sqlx::query_as::<_, Site>(
                "INSERT INTO sites (business_id, content) VALUES ($1, $2) RETURNING *",
            )
            .bind(business_id)
            .bind(content)
            .fetch_one(pool)
            .await
        }
    }
}

/// Overwrite the content document of an existing site. `None` when the
/// business has no site yet (the admin editor requires a prior generation).
pub async fn update_content(
    pool: &PgPool,
    business_id: Uuid,
    content: &Value,
) -> Result<Option<Site>, sqlx::Error> {
    sqlx::query_as::<_, Site>(
        r#"
        UPDATE sites
        SET content = $2, updated_at = NOW()
        WHERE business_id = $1
        RETURNING *
        "#,
    )
    .bind(business_id)
    .bind(content)
    .fetch_optional(pool)
    .await
}

/// Toggle the published flag; sets the published timestamp when publishing.
pub async fn set_published(
    pool: &PgPool,
    business_id: Uuid,
    published: bool,
) -> Result<Option<Site>, sqlx::Error> {
    let query = if published {
        r#"
        UPDATE sites
        SET is_published = true, published_at = NOW(), updated_at = NOW()
        WHERE business_id = $1
        RETURNING *
        "#
    } else {
        r#"
        UPDATE sites
        SET is_published = false, updated_at = NOW()
        WHERE business_id = $1
        RETURNING *
        "#
    };

    sqlx::query_as::<_, Site>(query)
        .bind(business_id)
        .fetch_optional(pool)
        .await
}
