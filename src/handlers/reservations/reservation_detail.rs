use actix_web::{web, HttpResponse};
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::handlers::error_response::{booking_error_response, scoring_error_response};
use crate::middleware::auth::Claims;
use crate::models::common::ApiResponse;
use crate::services::{BookingService, ScoringService};

/// Detail view with the score (if recorded) and the viewer's eligibility to
/// submit a score or cancel.
#[tracing::instrument(
    name = "Get reservation detail",
    skip(pool, claims),
    fields(username = %claims.username)
)]
pub async fn get_reservation_detail(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    reservation_id: web::Path<Uuid>,
) -> HttpResponse {
    let viewer_id = match claims.user_id() {
        Some(id) => id,
        None => {
            return HttpResponse::BadRequest().json(ApiResponse::<()>::error("Invalid user ID"));
        }
    };
    let reservation_id = reservation_id.into_inner();

    let scoring = ScoringService::new(pool.get_ref().clone());
    let score = match scoring.score_for_reservation(reservation_id).await {
        Ok(score) => score,
        Err(e) => return scoring_error_response(e),
    };

    let booking = BookingService::new(pool.get_ref().clone());
    let now = Utc::now().naive_utc();

    match booking
        .reservation_detail(reservation_id, viewer_id, score.as_ref(), now)
        .await
    {
        Ok(detail) => HttpResponse::Ok().json(ApiResponse::success("Reservation", detail)),
        Err(e) => booking_error_response(e),
    }
}
