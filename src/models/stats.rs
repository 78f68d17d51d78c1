use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::score::{ParticipantRole, Score};

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct UserStats {
    pub id: Uuid,
    pub user_id: Uuid,
    pub games_played: i32,
    pub games_won: i32,
    pub games_lost: i32,
    pub sets_won: i32,
    pub sets_lost: i32,
    pub ranking: Option<i32>,
}

/// Per-user increments applied when a score becomes confirmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsDelta {
    pub user_id: Uuid,
    pub games_won: i32,
    pub games_lost: i32,
    pub sets_won: i32,
    pub sets_lost: i32,
}

/// Compute both participants' stat increments for a confirmed score.
/// Every confirmed game adds one to each side's games_played; exactly one
/// side records the win. The submitted score values count as sets.
pub fn confirmed_score_deltas(
    score: &Score,
    primary_user_id: Uuid,
    partner_user_id: Uuid,
) -> (StatsDelta, StatsDelta) {
    let primary_won = score.winner() == ParticipantRole::Primary;

    let primary = StatsDelta {
        user_id: primary_user_id,
        games_won: primary_won as i32,
        games_lost: !primary_won as i32,
        sets_won: score.primary_score,
        sets_lost: score.partner_score,
    };
    let partner = StatsDelta {
        user_id: partner_user_id,
        games_won: !primary_won as i32,
        games_lost: primary_won as i32,
        sets_won: score.partner_score,
        sets_lost: score.primary_score,
    };
    (primary, partner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn score(primary: i32, partner: i32) -> Score {
        Score {
            id: Uuid::new_v4(),
            reservation_id: Uuid::new_v4(),
            primary_score: primary,
            partner_score: partner,
            confirmed_by_primary: true,
            confirmed_by_partner: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn winner_and_loser_split_the_increments() {
        let primary_id = Uuid::new_v4();
        let partner_id = Uuid::new_v4();
        let (primary, partner) = confirmed_score_deltas(&score(3, 1), primary_id, partner_id);

        assert_eq!(primary.user_id, primary_id);
        assert_eq!(primary.games_won, 1);
        assert_eq!(primary.games_lost, 0);
        assert_eq!(primary.sets_won, 3);
        assert_eq!(primary.sets_lost, 1);

        assert_eq!(partner.user_id, partner_id);
        assert_eq!(partner.games_won, 0);
        assert_eq!(partner.games_lost, 1);
        assert_eq!(partner.sets_won, 1);
        assert_eq!(partner.sets_lost, 3);
    }

    #[test]
    fn exactly_one_winner_even_on_ties() {
        let (primary, partner) =
            confirmed_score_deltas(&score(2, 2), Uuid::new_v4(), Uuid::new_v4());

        assert_eq!(primary.games_won + partner.games_won, 1);
        assert_eq!(primary.games_lost + partner.games_lost, 1);
        // Ties resolve in the partner's favour.
        assert_eq!(partner.games_won, 1);
    }
}
