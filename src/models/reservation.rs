use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::score::ScoreResponse;
use crate::models::user::SkillLevel;

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct Reservation {
    pub id: Uuid,
    pub location_id: Uuid,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub comment: Option<String>,
    pub primary_user_id: Uuid,
    pub partner_user_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Reservation {
    pub fn start_at(&self) -> NaiveDateTime {
        self.date.and_time(self.start_time)
    }

    pub fn end_at(&self) -> NaiveDateTime {
        self.date.and_time(self.end_time)
    }

    /// Open reservations have no partner yet and are discoverable by matchmaking.
    pub fn is_open(&self) -> bool {
        self.partner_user_id.is_none()
    }

    pub fn is_past(&self, now: NaiveDateTime) -> bool {
        now > self.end_at()
    }

    pub fn is_participant(&self, user_id: Uuid) -> bool {
        self.primary_user_id == user_id || self.partner_user_id == Some(user_id)
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateReservationRequest {
    pub location_id: Uuid,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub comment: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SearchReservationsRequest {
    pub date_start: NaiveDate,
    pub date_end: NaiveDate,
    pub location_id: Uuid,
    pub opponent_skill: SkillLevel,
}

/// Reservation row joined with the names a listing needs.
#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct ReservationListItem {
    pub id: Uuid,
    pub location_id: Uuid,
    pub location_name: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub comment: Option<String>,
    pub primary_user_id: Uuid,
    pub primary_username: String,
    pub primary_skill: SkillLevel,
    pub partner_user_id: Option<Uuid>,
    pub partner_username: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReservationDetailResponse {
    pub reservation: ReservationListItem,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<ScoreResponse>,
    pub is_past: bool,
    /// True when the requesting user may submit a score right now.
    pub can_submit_score: bool,
    /// True when the requesting user may still cancel the reservation.
    pub can_cancel: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn reservation(date: NaiveDate, start: (u32, u32), end: (u32, u32)) -> Reservation {
        Reservation {
            id: Uuid::new_v4(),
            location_id: Uuid::new_v4(),
            date,
            start_time: NaiveTime::from_hms_opt(start.0, start.1, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(end.0, end.1, 0).unwrap(),
            comment: None,
            primary_user_id: Uuid::new_v4(),
            partner_user_id: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn reservation_is_past_only_after_end_time() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let res = reservation(date, (10, 0), (11, 0));

        let before_end = date.and_hms_opt(10, 30, 0).unwrap();
        let after_end = date.and_hms_opt(11, 0, 1).unwrap();

        assert!(!res.is_past(before_end));
        assert!(res.is_past(after_end));
    }

    #[test]
    fn reservation_open_until_partner_joins() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let mut res = reservation(date, (10, 0), (11, 0));
        assert!(res.is_open());

        res.partner_user_id = Some(Uuid::new_v4());
        assert!(!res.is_open());
    }

    #[test]
    fn participant_check_covers_both_sides() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let mut res = reservation(date, (10, 0), (11, 0));
        let partner = Uuid::new_v4();
        let stranger = Uuid::new_v4();
        res.partner_user_id = Some(partner);

        assert!(res.is_participant(res.primary_user_id));
        assert!(res.is_participant(partner));
        assert!(!res.is_participant(stranger));
    }
}
