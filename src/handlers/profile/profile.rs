use actix_web::{web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::{reservation_queries, stats_queries, user_queries};
use crate::models::common::ApiResponse;
use crate::models::profile::UserProfileResponse;

#[tracing::instrument(name = "Get user profile", skip(pool))]
pub async fn get_user_profile(pool: web::Data<PgPool>, user_id: web::Path<Uuid>) -> HttpResponse {
    let user_id = user_id.into_inner();

    let user = match user_queries::get_user_by_id(&pool, user_id).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            return HttpResponse::NotFound().json(ApiResponse::<()>::error("User not found"));
        }
        Err(e) => {
            tracing::error!("Database error fetching user: {:?}", e);
            return HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to fetch user profile"));
        }
    };

    let games = match reservation_queries::list_all_for_user(&pool, user_id).await {
        Ok(games) => games,
        Err(e) => {
            tracing::error!("Database error fetching games: {:?}", e);
            return HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to fetch user games"));
        }
    };

    // Stats rows come into existence on first profile view.
    let stats = match stats_queries::get_or_create_stats(&pool, user_id).await {
        Ok(stats) => stats,
        Err(e) => {
            tracing::error!("Database error fetching stats: {:?}", e);
            return HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to fetch user stats"));
        }
    };

    HttpResponse::Ok().json(ApiResponse::success(
        "Profile",
        UserProfileResponse {
            user: user.into(),
            games,
            stats,
        },
    ))
}
