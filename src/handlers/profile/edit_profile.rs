use actix_web::{web, HttpResponse};
use sqlx::PgPool;

use crate::db::user_queries;
use crate::middleware::auth::Claims;
use crate::models::common::ApiResponse;
use crate::models::user::{UpdateProfileRequest, UserResponse};

#[tracing::instrument(
    name = "Update user profile",
    skip(pool, claims, update),
    fields(username = %claims.username)
)]
pub async fn update_user_profile(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    update: web::Json<UpdateProfileRequest>,
) -> HttpResponse {
    let user_id = match claims.user_id() {
        Some(id) => id,
        None => {
            tracing::error!("Failed to parse user ID from claims");
            return HttpResponse::BadRequest().json(ApiResponse::<()>::error("Invalid user ID"));
        }
    };

    if let Some(url) = update.avatar_url.as_deref() {
        if url.len() > 512 {
            return HttpResponse::BadRequest()
                .json(ApiResponse::<()>::error("Avatar reference is too long"));
        }
    }

    match user_queries::update_profile(&pool, user_id, update.skill, update.avatar_url.as_deref())
        .await
    {
        Ok(Some(user)) => HttpResponse::Ok().json(ApiResponse::success(
            "Profile updated",
            UserResponse::from(user),
        )),
        Ok(None) => HttpResponse::NotFound().json(ApiResponse::<()>::error("User not found")),
        Err(e) => {
            tracing::error!("Failed to update profile: {:?}", e);
            HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to update profile"))
        }
    }
}
