use actix_web::{web, HttpResponse};
use chrono::Utc;
use sqlx::PgPool;

use crate::handlers::error_response::booking_error_response;
use crate::middleware::auth::Claims;
use crate::models::common::ApiResponse;
use crate::models::reservation::CreateReservationRequest;
use crate::services::BookingService;

#[tracing::instrument(
    name = "Create reservation",
    skip(pool, claims, request),
    fields(username = %claims.username)
)]
pub async fn create_reservation(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    request: web::Json<CreateReservationRequest>,
) -> HttpResponse {
    let user_id = match claims.user_id() {
        Some(id) => id,
        None => {
            return HttpResponse::BadRequest().json(ApiResponse::<()>::error("Invalid user ID"));
        }
    };

    let booking = BookingService::new(pool.get_ref().clone());
    let now = Utc::now().naive_utc();

    match booking.create_reservation(user_id, &request, now).await {
        Ok(reservation) => {
            HttpResponse::Created().json(ApiResponse::success("Reservation created", reservation))
        }
        Err(e) => booking_error_response(e),
    }
}
