use actix_web::{get, web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::handlers::sport_center_handler;

#[get("")]
async fn list_centers(pool: web::Data<PgPool>) -> HttpResponse {
    sport_center_handler::list_sport_centers(pool).await
}

#[get("/{center_id}")]
async fn get_center(pool: web::Data<PgPool>, center_id: web::Path<Uuid>) -> HttpResponse {
    sport_center_handler::get_sport_center(pool, center_id).await
}
