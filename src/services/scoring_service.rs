use chrono::NaiveDateTime;
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::{reservation_queries, score_queries};
use crate::models::reservation::Reservation;
use crate::models::score::{ParticipantRole, Score};
use crate::models::stats::confirmed_score_deltas;

#[derive(Debug, thiserror::Error)]
pub enum ScoringError {
    #[error("reservation not found")]
    ReservationNotFound,

    #[error("no score has been submitted for this reservation")]
    ScoreNotFound,

    #[error("a score has already been submitted for this reservation")]
    ScoreAlreadyExists,

    #[error("the reservation has not finished yet")]
    NotYetPlayed,

    #[error("the reservation has no partner to score against")]
    MissingPartner,

    #[error("scores must not be negative")]
    InvalidScore,

    #[error("user is not a participant of this reservation")]
    Forbidden,

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// A score may only be recorded once the game is over, both players exist
/// and nothing has been recorded yet.
pub fn submission_allowed(
    reservation: &Reservation,
    has_score: bool,
    now: NaiveDateTime,
) -> Result<(), ScoringError> {
    if reservation.partner_user_id.is_none() {
        return Err(ScoringError::MissingPartner);
    }
    if !reservation.is_past(now) {
        return Err(ScoringError::NotYetPlayed);
    }
    if has_score {
        return Err(ScoringError::ScoreAlreadyExists);
    }
    Ok(())
}

/// Records match scores and drives the two-party confirmation handshake.
pub struct ScoringService {
    pool: PgPool,
}

impl ScoringService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn score_for_reservation(
        &self,
        reservation_id: Uuid,
    ) -> Result<Option<Score>, ScoringError> {
        Ok(score_queries::get_score(&self.pool, reservation_id).await?)
    }

    /// Record the result of a finished game. At most one score per
    /// reservation; the unique constraint turns a concurrent double submit
    /// into `ScoreAlreadyExists` for the loser of the race.
    pub async fn submit_score(
        &self,
        reservation_id: Uuid,
        submitter_id: Uuid,
        primary_score: i32,
        partner_score: i32,
        now: NaiveDateTime,
    ) -> Result<Score, ScoringError> {
        if primary_score < 0 || partner_score < 0 {
            return Err(ScoringError::InvalidScore);
        }

        let reservation = reservation_queries::get_reservation(&self.pool, reservation_id)
            .await?
            .ok_or(ScoringError::ReservationNotFound)?;

        if !reservation.is_participant(submitter_id) {
            return Err(ScoringError::Forbidden);
        }

        let existing = score_queries::get_score(&self.pool, reservation_id).await?;
        submission_allowed(&reservation, existing.is_some(), now)?;

        let inserted =
            score_queries::insert_score(&self.pool, reservation_id, primary_score, partner_score)
                .await?;
        if !inserted {
            return Err(ScoringError::ScoreAlreadyExists);
        }

        tracing::info!(
            reservation_id = %reservation_id,
            "Score recorded ({} : {})",
            primary_score,
            partner_score
        );

        score_queries::get_score(&self.pool, reservation_id)
            .await?
            .ok_or(ScoringError::ScoreNotFound)
    }

    /// Acknowledge the recorded score for the caller's side. When the second
    /// acknowledgement lands the score becomes final and both players' stats
    /// are updated in the same transaction. Confirming twice is a no-op.
    pub async fn confirm_score(
        &self,
        reservation_id: Uuid,
        confirming_user_id: Uuid,
    ) -> Result<Score, ScoringError> {
        let reservation = reservation_queries::get_reservation(&self.pool, reservation_id)
            .await?
            .ok_or(ScoringError::ReservationNotFound)?;

        let role = if reservation.primary_user_id == confirming_user_id {
            ParticipantRole::Primary
        } else if reservation.partner_user_id == Some(confirming_user_id) {
            ParticipantRole::Partner
        } else {
            return Err(ScoringError::Forbidden);
        };

        let mut tx = self.pool.begin().await?;

        let updated = score_queries::confirm_score_flag(&mut *tx, reservation_id, role).await?;
        let score = match updated {
            Some(score) => {
                if score.is_confirmed() {
                    let partner_id = reservation
                        .partner_user_id
                        .ok_or(ScoringError::MissingPartner)?;
                    let (primary_delta, partner_delta) =
                        confirmed_score_deltas(&score, reservation.primary_user_id, partner_id);
                    score_queries::apply_stats_delta(&mut *tx, &primary_delta).await?;
                    score_queries::apply_stats_delta(&mut *tx, &partner_delta).await?;
                    tracing::info!(
                        reservation_id = %reservation_id,
                        "Score confirmed by both players, stats updated"
                    );
                }
                score
            }
            // Flag already set (or never submitted): nothing changes, and in
            // particular stats cannot be counted twice.
            None => score_queries::get_score(&self.pool, reservation_id)
                .await?
                .ok_or(ScoringError::ScoreNotFound)?,
        };

        tx.commit().await?;
        Ok(score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime, Utc};

    fn reservation(partner: Option<Uuid>) -> Reservation {
        Reservation {
            id: Uuid::new_v4(),
            location_id: Uuid::new_v4(),
            date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            start_time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(11, 0, 0).unwrap(),
            comment: None,
            primary_user_id: Uuid::new_v4(),
            partner_user_id: partner,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn after_game() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn during_game() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 1)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap()
    }

    #[test]
    fn submission_requires_a_partner() {
        let res = reservation(None);
        let result = submission_allowed(&res, false, after_game());
        assert!(matches!(result, Err(ScoringError::MissingPartner)));
    }

    #[test]
    fn submission_requires_the_game_to_be_over() {
        let res = reservation(Some(Uuid::new_v4()));
        let result = submission_allowed(&res, false, during_game());
        assert!(matches!(result, Err(ScoringError::NotYetPlayed)));
    }

    #[test]
    fn submission_rejected_once_a_score_exists() {
        let res = reservation(Some(Uuid::new_v4()));
        let result = submission_allowed(&res, true, after_game());
        assert!(matches!(result, Err(ScoringError::ScoreAlreadyExists)));
    }

    #[test]
    fn submission_allowed_for_finished_filled_unscored_game() {
        let res = reservation(Some(Uuid::new_v4()));
        assert!(submission_allowed(&res, false, after_game()).is_ok());
    }
}
