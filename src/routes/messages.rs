use actix_web::{get, post, web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::handlers::message_handler;
use crate::middleware::auth::Claims;

#[get("")]
async fn list_messages(pool: web::Data<PgPool>, claims: web::ReqData<Claims>) -> HttpResponse {
    message_handler::get_user_messages(pool, claims).await
}

#[get("/unread_count")]
async fn unread_count(pool: web::Data<PgPool>, claims: web::ReqData<Claims>) -> HttpResponse {
    message_handler::get_unread_count(pool, claims).await
}

#[post("/{message_id}/read")]
async fn mark_read(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    message_id: web::Path<Uuid>,
) -> HttpResponse {
    message_handler::mark_message_read(pool, claims, message_id).await
}
