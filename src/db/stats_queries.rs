use sqlx::PgPool;
use uuid::Uuid;

use crate::models::stats::UserStats;

/// Fetch a user's stats row, creating an empty one on first access.
pub async fn get_or_create_stats(pool: &PgPool, user_id: Uuid) -> Result<UserStats, sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO user_stats
            (id, user_id, games_played, games_won, games_lost, sets_won, sets_lost)
        VALUES ($1, $2, 0, 0, 0, 0, 0)
        ON CONFLICT (user_id) DO NOTHING
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .execute(pool)
    .await?;

    sqlx::query_as::<_, UserStats>(
        r#"
        SELECT id, user_id, games_played, games_won, games_lost, sets_won, sets_lost, ranking
        FROM user_stats
        WHERE user_id = $1
        "#,
    )
    .bind(user_id)
    .fetch_one(pool)
    .await
}
