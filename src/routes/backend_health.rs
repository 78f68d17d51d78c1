use actix_web::{get, Responder};

use crate::handlers::health_handler::health_check;

#[get("/health_check")]
async fn backend_health() -> impl Responder {
    health_check().await
}
