use sqlx::PgPool;
use uuid::Uuid;

use crate::models::message::Message;

pub async fn insert_message(
    pool: &PgPool,
    user_id: Uuid,
    content: &str,
) -> Result<Message, sqlx::Error> {
    sqlx::query_as::<_, Message>(
        r#"
        INSERT INTO messages (id, user_id, content, is_read, created_at)
        VALUES ($1, $2, $3, FALSE, NOW())
        RETURNING id, user_id, content, is_read, created_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(content)
    .fetch_one(pool)
    .await
}

pub async fn list_messages(pool: &PgPool, user_id: Uuid) -> Result<Vec<Message>, sqlx::Error> {
    sqlx::query_as::<_, Message>(
        r#"
        SELECT id, user_id, content, is_read, created_at
        FROM messages
        WHERE user_id = $1
        ORDER BY created_at DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

pub async fn unread_count(pool: &PgPool, user_id: Uuid) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*) FROM messages
        WHERE user_id = $1 AND is_read = FALSE
        "#,
    )
    .bind(user_id)
    .fetch_one(pool)
    .await
}

pub async fn mark_message_read(
    pool: &PgPool,
    message_id: Uuid,
    user_id: Uuid,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE messages
        SET is_read = TRUE
        WHERE id = $1 AND user_id = $2
        "#,
    )
    .bind(message_id)
    .bind(user_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
