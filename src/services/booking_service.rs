use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::{reservation_queries, sport_center_queries};
use crate::models::reservation::{
    CreateReservationRequest, Reservation, ReservationDetailResponse, ReservationListItem,
    SearchReservationsRequest,
};
use crate::models::score::Score;
use crate::models::user::User;
use crate::services::notification_service::NotificationService;

#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    #[error("start time must be before end time")]
    InvalidTimeWindow,

    #[error("reservation date must be in the future")]
    PastDate,

    #[error("booking overlaps an existing reservation")]
    Conflict,

    #[error("reservation not found")]
    NotFound,

    #[error("reservation already has a partner")]
    AlreadyFilled,

    #[error("user is not allowed to perform this action")]
    Forbidden,

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Reject bookings with an inverted time window or a start in the past.
pub fn validate_schedule(
    date: NaiveDate,
    start_time: NaiveTime,
    end_time: NaiveTime,
    now: NaiveDateTime,
) -> Result<(), BookingError> {
    if start_time >= end_time {
        return Err(BookingError::InvalidTimeWindow);
    }
    if date.and_time(start_time) <= now {
        return Err(BookingError::PastDate);
    }
    Ok(())
}

/// Eligibility flags shown on the reservation detail view.
pub fn detail_flags(
    item: &ReservationListItem,
    score: Option<&Score>,
    viewer_id: Uuid,
    now: NaiveDateTime,
) -> (bool, bool, bool) {
    let is_past = now > item.date.and_time(item.end_time);
    let is_participant =
        item.primary_user_id == viewer_id || item.partner_user_id == Some(viewer_id);

    let can_submit_score =
        is_past && score.is_none() && item.partner_user_id.is_some() && is_participant;
    let can_cancel = is_participant && !is_past && score.is_none();

    (is_past, can_submit_score, can_cancel)
}

/// Creates reservations, matches partners into open slots and serves the
/// per-user reservation views.
pub struct BookingService {
    pool: PgPool,
    notifications: NotificationService,
}

impl BookingService {
    pub fn new(pool: PgPool) -> Self {
        let notifications = NotificationService::new(pool.clone());
        Self {
            pool,
            notifications,
        }
    }

    /// Book a court. The window must be in the future and must not collide
    /// with the user's own reservations or a fully booked location.
    pub async fn create_reservation(
        &self,
        user_id: Uuid,
        request: &CreateReservationRequest,
        now: NaiveDateTime,
    ) -> Result<Reservation, BookingError> {
        validate_schedule(request.date, request.start_time, request.end_time, now)?;

        if reservation_queries::user_has_overlapping(
            &self.pool,
            user_id,
            request.date,
            request.start_time,
            request.end_time,
        )
        .await?
        {
            return Err(BookingError::Conflict);
        }

        let booked = reservation_queries::count_overlapping_at_location(
            &self.pool,
            request.location_id,
            request.date,
            request.start_time,
            request.end_time,
        )
        .await?;
        let capacity =
            sport_center_queries::count_available_rooms(&self.pool, request.location_id).await?;
        if booked >= capacity {
            return Err(BookingError::Conflict);
        }

        let reservation = reservation_queries::insert_reservation(
            &self.pool,
            user_id,
            request.location_id,
            request.date,
            request.start_time,
            request.end_time,
            request.comment.as_deref(),
        )
        .await?;

        tracing::info!(
            reservation_id = %reservation.id,
            user_id = %user_id,
            "Created reservation"
        );
        Ok(reservation)
    }

    /// Open slots booked by players of the caller's skill tier.
    pub async fn open_reservations_for(
        &self,
        user: &User,
        today: NaiveDate,
    ) -> Result<Vec<ReservationListItem>, BookingError> {
        let items =
            reservation_queries::list_open_for_skill(&self.pool, user.id, user.skill, today)
                .await?;
        Ok(items)
    }

    pub async fn search_reservations(
        &self,
        user_id: Uuid,
        request: &SearchReservationsRequest,
    ) -> Result<Vec<ReservationListItem>, BookingError> {
        let items = reservation_queries::search_reservations(
            &self.pool,
            user_id,
            request.date_start,
            request.date_end,
            request.location_id,
            request.opponent_skill,
        )
        .await?;
        Ok(items)
    }

    /// Take the open partner slot. The slot is claimed with a conditional
    /// update, so a second join (or a lost race) fails instead of silently
    /// overwriting the first partner.
    pub async fn join_reservation(
        &self,
        reservation_id: Uuid,
        joining_user: &User,
    ) -> Result<Reservation, BookingError> {
        let reservation = reservation_queries::get_reservation(&self.pool, reservation_id)
            .await?
            .ok_or(BookingError::NotFound)?;

        if reservation.primary_user_id == joining_user.id {
            return Err(BookingError::Forbidden);
        }

        let claimed =
            reservation_queries::claim_partner_slot(&self.pool, reservation_id, joining_user.id)
                .await?;
        if !claimed {
            return Err(BookingError::AlreadyFilled);
        }

        self.notifications
            .notify(
                reservation.primary_user_id,
                &format!(
                    "{} joined your reservation on {}",
                    joining_user.username, reservation.date
                ),
            )
            .await?;

        tracing::info!(
            reservation_id = %reservation_id,
            partner_id = %joining_user.id,
            "Partner joined reservation"
        );

        reservation_queries::get_reservation(&self.pool, reservation_id)
            .await?
            .ok_or(BookingError::NotFound)
    }

    pub async fn reservation_detail(
        &self,
        reservation_id: Uuid,
        viewer_id: Uuid,
        score: Option<&Score>,
        now: NaiveDateTime,
    ) -> Result<ReservationDetailResponse, BookingError> {
        let item = reservation_queries::get_reservation_with_names(&self.pool, reservation_id)
            .await?
            .ok_or(BookingError::NotFound)?;

        let (is_past, can_submit_score, can_cancel) = detail_flags(&item, score, viewer_id, now);

        Ok(ReservationDetailResponse {
            reservation: item,
            score: score.cloned().map(Into::into),
            is_past,
            can_submit_score,
            can_cancel,
        })
    }

    pub async fn upcoming(
        &self,
        user_id: Uuid,
        now: NaiveDateTime,
    ) -> Result<Vec<ReservationListItem>, BookingError> {
        let items =
            reservation_queries::list_upcoming(&self.pool, user_id, now.date(), now.time())
                .await?;
        Ok(items)
    }

    pub async fn history(
        &self,
        user_id: Uuid,
        today: NaiveDate,
    ) -> Result<Vec<ReservationListItem>, BookingError> {
        let items = reservation_queries::list_history(&self.pool, user_id, today).await?;
        Ok(items)
    }

    pub async fn future_joint_games(
        &self,
        user_id: Uuid,
        today: NaiveDate,
    ) -> Result<Vec<ReservationListItem>, BookingError> {
        let items = reservation_queries::list_future_joint(&self.pool, user_id, today).await?;
        Ok(items)
    }

    /// Cancel a reservation. Only a participant may do this; the score row,
    /// if one exists, goes with it.
    pub async fn delete_reservation(
        &self,
        reservation_id: Uuid,
        acting_user_id: Uuid,
    ) -> Result<(), BookingError> {
        let reservation = reservation_queries::get_reservation(&self.pool, reservation_id)
            .await?
            .ok_or(BookingError::NotFound)?;

        if !reservation.is_participant(acting_user_id) {
            return Err(BookingError::Forbidden);
        }

        let deleted =
            reservation_queries::delete_reservation_with_score(&self.pool, reservation_id).await?;
        if !deleted {
            return Err(BookingError::NotFound);
        }

        tracing::info!(reservation_id = %reservation_id, "Deleted reservation");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use crate::models::user::SkillLevel;

    fn dt(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    fn time(h: u32, min: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, min, 0).unwrap()
    }

    #[test]
    fn schedule_rejects_inverted_window() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let now = dt(2025, 5, 1, 12, 0);

        let result = validate_schedule(date, time(11, 0), time(10, 0), now);
        assert!(matches!(result, Err(BookingError::InvalidTimeWindow)));

        let result = validate_schedule(date, time(10, 0), time(10, 0), now);
        assert!(matches!(result, Err(BookingError::InvalidTimeWindow)));
    }

    #[test]
    fn schedule_rejects_past_start() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let after_start = dt(2025, 6, 1, 10, 30);

        let result = validate_schedule(date, time(10, 0), time(11, 0), after_start);
        assert!(matches!(result, Err(BookingError::PastDate)));

        // Exactly "now" is not strictly in the future either.
        let at_start = dt(2025, 6, 1, 10, 0);
        let result = validate_schedule(date, time(10, 0), time(11, 0), at_start);
        assert!(matches!(result, Err(BookingError::PastDate)));
    }

    #[test]
    fn schedule_accepts_future_window() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let now = dt(2025, 6, 1, 9, 59);

        assert!(validate_schedule(date, time(10, 0), time(11, 0), now).is_ok());
    }

    fn list_item(primary: Uuid, partner: Option<Uuid>) -> ReservationListItem {
        ReservationListItem {
            id: Uuid::new_v4(),
            location_id: Uuid::new_v4(),
            location_name: "Center Court".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            start_time: time(10, 0),
            end_time: time(11, 0),
            comment: None,
            primary_user_id: primary,
            primary_username: "alice".to_string(),
            primary_skill: SkillLevel::Amateur,
            partner_user_id: partner,
            partner_username: partner.map(|_| "bob".to_string()),
        }
    }

    fn unconfirmed_score(reservation_id: Uuid) -> Score {
        Score {
            id: Uuid::new_v4(),
            reservation_id,
            primary_score: 3,
            partner_score: 1,
            confirmed_by_primary: false,
            confirmed_by_partner: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn score_form_only_for_past_filled_unscored_games() {
        let primary = Uuid::new_v4();
        let partner = Uuid::new_v4();
        let item = list_item(primary, Some(partner));

        let before_end = dt(2025, 6, 1, 10, 30);
        let after_end = dt(2025, 6, 1, 11, 30);

        // Not yet past: no score form.
        let (_, can_submit, _) = detail_flags(&item, None, primary, before_end);
        assert!(!can_submit);

        // Past, filled, unscored: both participants may submit.
        let (is_past, can_submit, _) = detail_flags(&item, None, partner, after_end);
        assert!(is_past);
        assert!(can_submit);

        // A score already exists: form disappears.
        let score = unconfirmed_score(item.id);
        let (_, can_submit, _) = detail_flags(&item, Some(&score), primary, after_end);
        assert!(!can_submit);

        // Strangers never see the form.
        let (_, can_submit, _) = detail_flags(&item, None, Uuid::new_v4(), after_end);
        assert!(!can_submit);
    }

    #[test]
    fn open_reservation_has_no_score_form() {
        let primary = Uuid::new_v4();
        let item = list_item(primary, None);
        let after_end = dt(2025, 6, 1, 11, 30);

        let (_, can_submit, _) = detail_flags(&item, None, primary, after_end);
        assert!(!can_submit);
    }

    #[test]
    fn cancel_only_before_the_game_and_only_for_participants() {
        let primary = Uuid::new_v4();
        let partner = Uuid::new_v4();
        let item = list_item(primary, Some(partner));

        let before = dt(2025, 6, 1, 9, 0);
        let after = dt(2025, 6, 1, 11, 30);

        let (_, _, can_cancel) = detail_flags(&item, None, primary, before);
        assert!(can_cancel);
        let (_, _, can_cancel) = detail_flags(&item, None, partner, before);
        assert!(can_cancel);

        let (_, _, can_cancel) = detail_flags(&item, None, Uuid::new_v4(), before);
        assert!(!can_cancel);

        let (_, _, can_cancel) = detail_flags(&item, None, primary, after);
        assert!(!can_cancel);
    }
}
