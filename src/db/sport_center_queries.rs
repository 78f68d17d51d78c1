use sqlx::PgPool;
use uuid::Uuid;

use crate::models::sport_center::{Room, SportCenter};

pub async fn list_sport_centers(pool: &PgPool) -> Result<Vec<SportCenter>, sqlx::Error> {
    sqlx::query_as::<_, SportCenter>(
        r#"
        SELECT id, name, address, phone, domain, slug, created_at
        FROM sport_centers
        ORDER BY name
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn get_sport_center(
    pool: &PgPool,
    center_id: Uuid,
) -> Result<Option<SportCenter>, sqlx::Error> {
    sqlx::query_as::<_, SportCenter>(
        r#"
        SELECT id, name, address, phone, domain, slug, created_at
        FROM sport_centers
        WHERE id = $1
        "#,
    )
    .bind(center_id)
    .fetch_optional(pool)
    .await
}

pub async fn list_rooms(pool: &PgPool, center_id: Uuid) -> Result<Vec<Room>, sqlx::Error> {
    sqlx::query_as::<_, Room>(
        r#"
        SELECT id, sport_center_id, room_number, available
        FROM rooms
        WHERE sport_center_id = $1
        ORDER BY room_number
        "#,
    )
    .bind(center_id)
    .fetch_all(pool)
    .await
}

pub async fn count_available_rooms(pool: &PgPool, center_id: Uuid) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*) FROM rooms
        WHERE sport_center_id = $1 AND available = TRUE
        "#,
    )
    .bind(center_id)
    .fetch_one(pool)
    .await
}
