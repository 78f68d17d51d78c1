use actix_web::{web, HttpResponse};
use chrono::Utc;
use sqlx::PgPool;

use crate::db::user_queries;
use crate::handlers::error_response::booking_error_response;
use crate::middleware::auth::Claims;
use crate::models::common::ApiResponse;
use crate::models::reservation::SearchReservationsRequest;
use crate::services::BookingService;

/// Open slots booked by players of the caller's own skill tier.
#[tracing::instrument(
    name = "List open reservations",
    skip(pool, claims),
    fields(username = %claims.username)
)]
pub async fn list_open_reservations(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> HttpResponse {
    let user_id = match claims.user_id() {
        Some(id) => id,
        None => {
            return HttpResponse::BadRequest().json(ApiResponse::<()>::error("Invalid user ID"));
        }
    };

    // Matchmaking filters on the caller's skill, so the full user row is needed.
    let user = match user_queries::get_user_by_id(&pool, user_id).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            return HttpResponse::NotFound().json(ApiResponse::<()>::error("User not found"));
        }
        Err(e) => {
            tracing::error!("Database error fetching user: {:?}", e);
            return HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Internal server error"));
        }
    };

    let booking = BookingService::new(pool.get_ref().clone());
    let today = Utc::now().naive_utc().date();

    match booking.open_reservations_for(&user, today).await {
        Ok(items) => HttpResponse::Ok().json(ApiResponse::success("Open reservations", items)),
        Err(e) => booking_error_response(e),
    }
}

#[tracing::instrument(
    name = "Search reservations",
    skip(pool, claims, request),
    fields(username = %claims.username)
)]
pub async fn search_reservations(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    request: web::Json<SearchReservationsRequest>,
) -> HttpResponse {
    let user_id = match claims.user_id() {
        Some(id) => id,
        None => {
            return HttpResponse::BadRequest().json(ApiResponse::<()>::error("Invalid user ID"));
        }
    };

    if request.date_start > request.date_end {
        return HttpResponse::BadRequest()
            .json(ApiResponse::<()>::error("date_start must not be after date_end"));
    }

    let booking = BookingService::new(pool.get_ref().clone());
    match booking.search_reservations(user_id, &request).await {
        Ok(items) => HttpResponse::Ok().json(ApiResponse::success("Search results", items)),
        Err(e) => booking_error_response(e),
    }
}
