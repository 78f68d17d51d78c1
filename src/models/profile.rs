use serde::{Deserialize, Serialize};

use crate::models::reservation::ReservationListItem;
use crate::models::stats::UserStats;
use crate::models::user::UserResponse;

/// Profile view: the user, every game they take part in and their
/// aggregated statistics.
#[derive(Debug, Serialize, Deserialize)]
pub struct UserProfileResponse {
    pub user: UserResponse,
    pub games: Vec<ReservationListItem>,
    pub stats: UserStats,
}
