use actix_web::{get, put, web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::handlers::profile::edit_profile::update_user_profile;
use crate::handlers::profile::profile::get_user_profile;
use crate::middleware::auth::Claims;
use crate::models::user::UpdateProfileRequest;

#[get("/{user_id}")]
async fn get_profile(pool: web::Data<PgPool>, user_id: web::Path<Uuid>) -> HttpResponse {
    get_user_profile(pool, user_id).await
}

#[put("")]
async fn update_profile(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    update: web::Json<UpdateProfileRequest>,
) -> HttpResponse {
    update_user_profile(pool, claims, update).await
}
