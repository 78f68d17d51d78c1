use actix_web::{web, HttpResponse};
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::handlers::error_response::booking_error_response;
use crate::middleware::auth::Claims;
use crate::models::common::ApiResponse;
use crate::services::BookingService;

fn parse_user(claims: &Claims) -> Result<Uuid, HttpResponse> {
    claims.user_id().ok_or_else(|| {
        HttpResponse::BadRequest().json(ApiResponse::<()>::error("Invalid user ID"))
    })
}

/// Games that have not ended yet, as primary or partner.
#[tracing::instrument(
    name = "List upcoming reservations",
    skip(pool, claims),
    fields(username = %claims.username)
)]
pub async fn list_upcoming(pool: web::Data<PgPool>, claims: web::ReqData<Claims>) -> HttpResponse {
    let user_id = match parse_user(&claims) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    let booking = BookingService::new(pool.get_ref().clone());
    match booking.upcoming(user_id, Utc::now().naive_utc()).await {
        Ok(items) => HttpResponse::Ok().json(ApiResponse::success("Upcoming reservations", items)),
        Err(e) => booking_error_response(e),
    }
}

/// Games on days gone by.
#[tracing::instrument(
    name = "List reservation history",
    skip(pool, claims),
    fields(username = %claims.username)
)]
pub async fn list_history(pool: web::Data<PgPool>, claims: web::ReqData<Claims>) -> HttpResponse {
    let user_id = match parse_user(&claims) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    let booking = BookingService::new(pool.get_ref().clone());
    match booking.history(user_id, Utc::now().naive_utc().date()).await {
        Ok(items) => HttpResponse::Ok().json(ApiResponse::success("Reservation history", items)),
        Err(e) => booking_error_response(e),
    }
}

/// Future games where an opponent has already joined.
#[tracing::instrument(
    name = "List future joint games",
    skip(pool, claims),
    fields(username = %claims.username)
)]
pub async fn list_future_joint(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> HttpResponse {
    let user_id = match parse_user(&claims) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    let booking = BookingService::new(pool.get_ref().clone());
    match booking
        .future_joint_games(user_id, Utc::now().naive_utc().date())
        .await
    {
        Ok(items) => HttpResponse::Ok().json(ApiResponse::success("Future joint games", items)),
        Err(e) => booking_error_response(e),
    }
}
