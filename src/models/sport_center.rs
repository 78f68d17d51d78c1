use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct SportCenter {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub domain: String,
    pub slug: String,
    pub created_at: DateTime<Utc>,
}

/// A bookable court inside a sport center.
#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct Room {
    pub id: Uuid,
    pub sport_center_id: Uuid,
    pub room_number: i32,
    pub available: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SportCenterDetailResponse {
    pub center: SportCenter,
    pub rooms: Vec<Room>,
}
