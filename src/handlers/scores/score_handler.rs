use actix_web::{web, HttpResponse};
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::handlers::error_response::scoring_error_response;
use crate::middleware::auth::Claims;
use crate::models::common::ApiResponse;
use crate::models::score::{ScoreResponse, SubmitScoreRequest};
use crate::services::ScoringService;

#[tracing::instrument(
    name = "Submit score",
    skip(pool, claims, request),
    fields(username = %claims.username)
)]
pub async fn submit_score(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    reservation_id: web::Path<Uuid>,
    request: web::Json<SubmitScoreRequest>,
) -> HttpResponse {
    let user_id = match claims.user_id() {
        Some(id) => id,
        None => {
            return HttpResponse::BadRequest().json(ApiResponse::<()>::error("Invalid user ID"));
        }
    };

    let scoring = ScoringService::new(pool.get_ref().clone());
    let now = Utc::now().naive_utc();

    match scoring
        .submit_score(
            reservation_id.into_inner(),
            user_id,
            request.primary_score,
            request.partner_score,
            now,
        )
        .await
    {
        Ok(score) => HttpResponse::Created().json(ApiResponse::success(
            "Score recorded",
            ScoreResponse::from(score),
        )),
        Err(e) => scoring_error_response(e),
    }
}

#[tracing::instrument(
    name = "Confirm score",
    skip(pool, claims),
    fields(username = %claims.username)
)]
pub async fn confirm_score(
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

    let scoring = ScoringService::new(pool.get_ref().clone());
    match scoring
        .confirm_score(reservation_id.into_inner(), user_id)
        .await
    {
        Ok(score) => {
            let message = if score.is_confirmed() {
                "Score confirmed by both players"
            } else {
                "Confirmation recorded"
            };
            HttpResponse::Ok().json(ApiResponse::success(message, ScoreResponse::from(score)))
        }
        Err(e) => scoring_error_response(e),
    }
}
