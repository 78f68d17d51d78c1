pub mod auth_handler;
pub mod error_response;
pub mod health_handler;
pub mod message_handler;
pub mod profile;
pub mod registration_handler;
pub mod reservations;
pub mod scores;
pub mod sport_center_handler;
