use actix_web::{web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::sport_center_queries;
use crate::models::common::ApiResponse;
use crate::models::sport_center::SportCenterDetailResponse;

#[tracing::instrument(name = "List sport centers", skip(pool))]
pub async fn list_sport_centers(pool: web::Data<PgPool>) -> HttpResponse {
    match sport_center_queries::list_sport_centers(&pool).await {
        Ok(centers) => HttpResponse::Ok().json(ApiResponse::success("Sport centers", centers)),
        Err(e) => {
            tracing::error!("Failed to list sport centers: {:?}", e);
            HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to list sport centers"))
        }
    }
}

#[tracing::instrument(name = "Get sport center", skip(pool))]
pub async fn get_sport_center(pool: web::Data<PgPool>, center_id: web::Path<Uuid>) -> HttpResponse {
    let center_id = center_id.into_inner();

    let center = match sport_center_queries::get_sport_center(&pool, center_id).await {
        Ok(Some(center)) => center,
        Ok(None) => {
            return HttpResponse::NotFound()
                .json(ApiResponse::<()>::error("Sport center not found"));
        }
        Err(e) => {
            tracing::error!("Failed to fetch sport center: {:?}", e);
            return HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to fetch sport center"));
        }
    };

    match sport_center_queries::list_rooms(&pool, center_id).await {
        Ok(rooms) => HttpResponse::Ok().json(ApiResponse::success(
            "Sport center",
            SportCenterDetailResponse { center, rooms },
        )),
        Err(e) => {
            tracing::error!("Failed to fetch rooms: {:?}", e);
            HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to fetch rooms"))
        }
    }
}
