use serde_json::Value;
use sqlx::PgPool;
use uuid::Uuid;

/// Record a product analytics event. Failures are logged, never surfaced:
/// analytics must not break the operation that produced the event.
pub async fn record(pool: &PgPool, business_id: Uuid, event_type: &str, event_data: Value) {
    let result = sqlx::query(
        "INSERT INTO analytics (business_id, event_type, event_data) VALUES ($1, $2, $3)",
    )
    .bind(business_id)
    .bind(event_type)
    .bind(&event_data)
    .execute(pool)
    .await;

    if let Err(err) = result {
        tracing::warn!(%business_id, event_type, error = %err, "failed to record analytics event");
    }
}
