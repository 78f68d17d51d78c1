use actix_web::{web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::user_queries;
use crate::handlers::error_response::booking_error_response;
use crate::middleware::auth::Claims;
use crate::models::common::ApiResponse;
use crate::services::BookingService;

#[tracing::instrument(
    name = "Join reservation",
    skip(pool, claims),
    fields(username = %claims.username)
)]
pub async fn join_reservation(
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
    match booking
        .join_reservation(reservation_id.into_inner(), &user)
        .await
    {
        Ok(reservation) => {
            HttpResponse::Ok().json(ApiResponse::success("Joined reservation", reservation))
        }
        Err(e) => booking_error_response(e),
    }
}
