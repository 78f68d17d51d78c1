pub mod message_queries;
pub mod reservation_queries;
pub mod score_queries;
pub mod sport_center_queries;
pub mod stats_queries;
pub mod user_queries;
