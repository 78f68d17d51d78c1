use actix_web::{web, HttpResponse};
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::middleware::auth::Claims;
use crate::models::common::ApiResponse;
use crate::services::NotificationService;

#[tracing::instrument(
    name = "List messages",
    skip(pool, claims),
    fields(username = %claims.username)
)]
pub async fn get_user_messages(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> HttpResponse {
    let user_id = match claims.user_id() {
        Some(id) => id,
        None => {
            return HttpResponse::BadRequest().json(ApiResponse::<()>::error("Invalid user ID"));
        }
    };

    let notifications = NotificationService::new(pool.get_ref().clone());
    match notifications.messages_for(user_id).await {
        Ok(response) => HttpResponse::Ok().json(ApiResponse::success("Messages", response)),
        Err(e) => {
            tracing::error!("Failed to get messages: {:?}", e);
            HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to get messages"))
        }
    }
}

#[tracing::instrument(
    name = "Get unread message count",
    skip(pool, claims),
    fields(username = %claims.username)
)]
pub async fn get_unread_count(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> HttpResponse {
    let user_id = match claims.user_id() {
        Some(id) => id,
        None => {
            return HttpResponse::BadRequest().json(ApiResponse::<()>::error("Invalid user ID"));
        }
    };

    let notifications = NotificationService::new(pool.get_ref().clone());
    match notifications.unread_count(user_id).await {
        Ok(count) => {
            HttpResponse::Ok().json(ApiResponse::success("Unread count", json!({ "unread": count })))
        }
        Err(e) => {
            tracing::error!("Failed to count unread messages: {:?}", e);
            HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to count unread messages"))
        }
    }
}

#[tracing::instrument(
    name = "Mark message read",
    skip(pool, claims),
    fields(username = %claims.username)
)]
pub async fn mark_message_read(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    message_id: web::Path<Uuid>,
) -> HttpResponse {
    let user_id = match claims.user_id() {
        Some(id) => id,
        None => {
            return HttpResponse::BadRequest().json(ApiResponse::<()>::error("Invalid user ID"));
        }
    };

    let notifications = NotificationService::new(pool.get_ref().clone());
    match notifications
        .mark_read(message_id.into_inner(), user_id)
        .await
    {
        Ok(true) => {
            HttpResponse::Ok().json(ApiResponse::<()>::success_message("Message marked as read"))
        }
        Ok(false) => HttpResponse::NotFound().json(ApiResponse::<()>::error("Message not found")),
        Err(e) => {
            tracing::error!("Failed to mark message as read: {:?}", e);
            HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to mark message as read"))
        }
    }
}
