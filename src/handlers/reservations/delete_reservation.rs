use actix_web::{web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::handlers::error_response::booking_error_response;
use crate::middleware::auth::Claims;
use crate::models::common::ApiResponse;
use crate::services::BookingService;

#[tracing::instrument(
    name = "Delete reservation",
    skip(pool, claims),
    fields(username = %claims.username)
)]
pub async fn delete_reservation(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    reservation_id: web::Path<Uuid>,
) -> HttpResponse {
    let user_id = match claims.user_id() {
        Some(id) => id,
        None => {
            return HttpResponse::BadRequest().json(ApiResponse::<()>::error("Invalid user ID"));
        }
    };

    let booking = BookingService::new(pool.get_ref().clone());
    match booking
        .delete_reservation(reservation_id.into_inner(), user_id)
        .await
    {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::<()>::success_message("Reservation deleted")),
        Err(e) => booking_error_response(e),
    }
}
