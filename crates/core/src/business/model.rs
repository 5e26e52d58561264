use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// Default brand color applied when setup omits one.
pub const DEFAULT_PRIMARY_COLOR: &str = "#6366F1";

/// Tenant profile: one business per account, upserted by owning user.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Business {
    pub id: Uuid,
    #[serde(skip_serializing)]
    pub user_id: Uuid,
    pub business_type_id: String,
    pub business_name: String,
    pub tagline: Option<String>,
    pub description: Option<String>,
    pub primary_color: Option<String>,
    pub logo_url: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing)]
    pub updated_at: DateTime<Utc>,
}

impl Business {
    /// Brand color with the catalogue default applied.
    pub fn color(&self) -> &str {
        self.primary_color
            .as_deref()
            .filter(|c| !c.is_empty())
            .unwrap_or(DEFAULT_PRIMARY_COLOR)
    }
}
