use sqlx::PgPool;
use uuid::Uuid;

use crate::db::message_queries;
use crate::models::message::{Message, MessageListResponse};

/// Stores user-facing messages when a booking event occurs. Storage and
/// listing only; delivery is someone else's problem.
#[derive(Clone)]
pub struct NotificationService {
    pool: PgPool,
}

impl NotificationService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn notify(&self, recipient_id: Uuid, text: &str) -> Result<Message, sqlx::Error> {
        let message = message_queries::insert_message(&self.pool, recipient_id, text).await?;
        tracing::debug!(recipient = %recipient_id, "Stored notification message");
        Ok(message)
    }

    pub async fn messages_for(&self, user_id: Uuid) -> Result<MessageListResponse, sqlx::Error> {
        let messages = message_queries::list_messages(&self.pool, user_id).await?;
        let unread_count = message_queries::unread_count(&self.pool, user_id).await?;
        Ok(MessageListResponse {
            messages,
            unread_count,
        })
    }

    pub async fn unread_count(&self, user_id: Uuid) -> Result<i64, sqlx::Error> {
        message_queries::unread_count(&self.pool, user_id).await
    }

    pub async fn mark_read(&self, message_id: Uuid, user_id: Uuid) -> Result<bool, sqlx::Error> {
        message_queries::mark_message_read(&self.pool, message_id, user_id).await
    }
}
