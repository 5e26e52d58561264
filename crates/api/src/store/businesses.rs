use siteforge_core::business::{model::DEFAULT_PRIMARY_COLOR, Business};
use sqlx::PgPool;
use uuid::Uuid;

/// Fields accepted by business setup.
#[derive(Debug, Default)]
pub struct BusinessSetup {
    pub business_type_id: String,
    pub business_name: String,
    pub tagline: Option<String>,
    pub description: Option<String>,
    pub primary_color: Option<String>,
    pub logo_url: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
}

pub async fn find_by_user(pool: &PgPool, user_id: Uuid) -> Result<Option<Business>, sqlx::Error> {
    sqlx::query_as::<_, Business>("SELECT * FROM businesses WHERE user_id = $1")
        .bind(user_id)
        .fetch_optional(pool)
        .await
}

/// Create or update the caller's business. Keyed solely on the owning user,
/// which is what makes the product one-business-per-user.
pub async fn upsert(
    pool: &PgPool,
    user_id: Uuid,
    setup: &BusinessSetup,
) -> Result<Business, sqlx::Error> {
    let existing = find_by_user(pool, user_id).await?;
    let color = setup.primary_color.as_deref().unwrap_or(DEFAULT_PRIMARY_COLOR);

    if existing.is_some() {
        sqlx::query_as::<_, Business>(
            r#"
            UPDATE businesses
            SET business_type_id = $2,
                business_name = $3,
                tagline = $4,
                description = $5,
                primary_color = $6,
                logo_url = $7,
                phone = $8,
                email = $9,
                address = $10,
                updated_at = NOW()
            WHERE user_id = $1
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(&setup.business_type_id)
        .bind(&setup.business_name)
        .bind(&setup.tagline)
        .bind(&setup.description)
        .bind(color)
        .bind(&setup.logo_url)
        .bind(&setup.phone)
        .bind(&setup.email)
        .bind(&setup.address)
        .fetch_one(pool)
        .await
    } else {
        sqlx::query_as::<_, Business>(
            r#"
            INSERT INTO businesses (
                user_id, business_type_id, business_name, tagline, description,
                primary_color, logo_url, phone, email, address
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(&setup.business_type_id)
        .bind(&setup.business_name)
        .bind(&setup.tagline)
        .bind(&setup.description)
        .bind(color)
        .bind(&setup.logo_url)
        .bind(&setup.phone)
        .bind(&setup.email)
        .bind(&setup.address)
        .fetch_one(pool)
        .await
    }
}
