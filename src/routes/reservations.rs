use actix_web::{delete, get, post, web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::handlers::reservations::create_reservation::create_reservation;
use crate::handlers::reservations::delete_reservation::delete_reservation;
use crate::handlers::reservations::join_reservation::join_reservation;
use crate::handlers::reservations::matchmaking::{list_open_reservations, search_reservations};
use crate::handlers::reservations::reservation_detail::get_reservation_detail;
use crate::handlers::reservations::reservation_lists::{
    list_future_joint, list_history, list_upcoming,
};
use crate::handlers::scores::score_handler::{confirm_score, submit_score};
use crate::middleware::auth::Claims;
use crate::models::reservation::{CreateReservationRequest, SearchReservationsRequest};
use crate::models::score::SubmitScoreRequest;

#[post("")]
async fn create(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    request: web::Json<CreateReservationRequest>,
) -> HttpResponse {
    create_reservation(pool, claims, request).await
}

#[get("/open")]
async fn open_list(pool: web::Data<PgPool>, claims: web::ReqData<Claims>) -> HttpResponse {
    list_open_reservations(pool, claims).await
}

#[post("/search")]
async fn search(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    request: web::Json<SearchReservationsRequest>,
) -> HttpResponse {
    search_reservations(pool, claims, request).await
}

#[get("/mine")]
async fn mine(pool: web::Data<PgPool>, claims: web::ReqData<Claims>) -> HttpResponse {
    list_upcoming(pool, claims).await
}

#[get("/history")]
async fn history(pool: web::Data<PgPool>, claims: web::ReqData<Claims>) -> HttpResponse {
    list_history(pool, claims).await
}

#[get("/future_joint")]
async fn future_joint(pool: web::Data<PgPool>, claims: web::ReqData<Claims>) -> HttpResponse {
    list_future_joint(pool, claims).await
}

#[get("/{reservation_id}")]
async fn detail(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    reservation_id: web::Path<Uuid>,
) -> HttpResponse {
    get_reservation_detail(pool, claims, reservation_id).await
}

#[post("/{reservation_id}/join")]
async fn join(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    reservation_id: web::Path<Uuid>,
) -> HttpResponse {
    join_reservation(pool, claims, reservation_id).await
}

#[delete("/{reservation_id}")]
async fn remove(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    reservation_id: web::Path<Uuid>,
) -> HttpResponse {
    delete_reservation(pool, claims, reservation_id).await
}

#[post("/{reservation_id}/score")]
async fn score(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    reservation_id: web::Path<Uuid>,
    request: web::Json<SubmitScoreRequest>,
) -> HttpResponse {
    submit_score(pool, claims, reservation_id, request).await
}

#[post("/{reservation_id}/score/confirm")]
async fn score_confirm(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    reservation_id: web::Path<Uuid>,
) -> HttpResponse {
    confirm_score(pool, claims, reservation_id).await
}
