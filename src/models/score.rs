use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Which side of a reservation a user occupies.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ParticipantRole {
    Primary,
    Partner,
}

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct Score {
    pub id: Uuid,
    pub reservation_id: Uuid,
    pub primary_score: i32,
    pub partner_score: i32,
    pub confirmed_by_primary: bool,
    pub confirmed_by_partner: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Score {
    /// A score is final only once both participants have acknowledged it.
    pub fn is_confirmed(&self) -> bool {
        self.confirmed_by_primary && self.confirmed_by_partner
    }

    /// Resolve the winning side. Ties count for the partner.
    pub fn winner(&self) -> ParticipantRole {
        winner_of(self.primary_score, self.partner_score)
    }
}

pub fn winner_of(primary_score: i32, partner_score: i32) -> ParticipantRole {
    if primary_score > partner_score {
        ParticipantRole::Primary
    } else {
        ParticipantRole::Partner
    }
}

#[derive(Debug, Deserialize)]
pub struct SubmitScoreRequest {
    pub primary_score: i32,
    pub partner_score: i32,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ScoreResponse {
    pub reservation_id: Uuid,
    pub primary_score: i32,
    pub partner_score: i32,
    pub confirmed_by_primary: bool,
    pub confirmed_by_partner: bool,
    pub confirmed: bool,
}

impl From<Score> for ScoreResponse {
    fn from(score: Score) -> Self {
        let confirmed = score.is_confirmed();
        ScoreResponse {
            reservation_id: score.reservation_id,
            primary_score: score.primary_score,
            partner_score: score.partner_score,
            confirmed_by_primary: score.confirmed_by_primary,
            confirmed_by_partner: score.confirmed_by_partner,
            confirmed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(primary: i32, partner: i32) -> Score {
        Score {
            id: Uuid::new_v4(),
            reservation_id: Uuid::new_v4(),
            primary_score: primary,
            partner_score: partner,
            confirmed_by_primary: false,
            confirmed_by_partner: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn confirmed_only_when_both_flags_set() {
        let mut s = score(3, 1);
        assert!(!s.is_confirmed());

        s.confirmed_by_primary = true;
        assert!(!s.is_confirmed());

        s.confirmed_by_primary = false;
        s.confirmed_by_partner = true;
        assert!(!s.is_confirmed());

        s.confirmed_by_primary = true;
        assert!(s.is_confirmed());
    }

    #[test]
    fn higher_score_wins() {
        assert_eq!(winner_of(3, 1), ParticipantRole::Primary);
        assert_eq!(winner_of(0, 2), ParticipantRole::Partner);
    }

    #[test]
    fn tie_goes_to_partner() {
        assert_eq!(winner_of(2, 2), ParticipantRole::Partner);
    }
}
