pub mod booking_service;
pub mod notification_service;
pub mod scoring_service;

pub use booking_service::{BookingError, BookingService};
pub use notification_service::NotificationService;
pub use scoring_service::{ScoringError, ScoringService};
