use actix_web::HttpResponse;

use crate::models::common::ApiResponse;
use crate::services::{BookingError, ScoringError};

/// Map booking failures onto HTTP responses. Nothing here is fatal; every
/// error becomes a rendered JSON envelope.
pub fn booking_error_response(err: BookingError) -> HttpResponse {
    match err {
        BookingError::InvalidTimeWindow | BookingError::PastDate => {
            HttpResponse::BadRequest().json(ApiResponse::<()>::error(err.to_string()))
        }
        BookingError::NotFound => {
            HttpResponse::NotFound().json(ApiResponse::<()>::error(err.to_string()))
        }
        BookingError::AlreadyFilled | BookingError::Conflict => {
            HttpResponse::Conflict().json(ApiResponse::<()>::error(err.to_string()))
        }
        BookingError::Forbidden => {
            HttpResponse::Forbidden().json(ApiResponse::<()>::error(err.to_string()))
        }
        BookingError::Database(e) => {
            tracing::error!("Database error: {:?}", e);
            HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Internal server error"))
        }
    }
}

pub fn scoring_error_response(err: ScoringError) -> HttpResponse {
    match err {
        ScoringError::InvalidScore => {
            HttpResponse::BadRequest().json(ApiResponse::<()>::error(err.to_string()))
        }
        ScoringError::ReservationNotFound | ScoringError::ScoreNotFound => {
            HttpResponse::NotFound().json(ApiResponse::<()>::error(err.to_string()))
        }
        ScoringError::ScoreAlreadyExists
        | ScoringError::NotYetPlayed
        | ScoringError::MissingPartner => {
            HttpResponse::Conflict().json(ApiResponse::<()>::error(err.to_string()))
        }
        ScoringError::Forbidden => {
            HttpResponse::Forbidden().json(ApiResponse::<()>::error(err.to_string()))
        }
        ScoringError::Database(e) => {
            tracing::error!("Database error: {:?}", e);
            HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Internal server error"))
        }
    }
}
