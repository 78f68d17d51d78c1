use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use crate::models::score::{ParticipantRole, Score};
use crate::models::stats::StatsDelta;

const SCORE_COLUMNS: &str = r#"
    id, reservation_id, primary_score, partner_score,
    confirmed_by_primary, confirmed_by_partner, created_at, updated_at
"#;

pub async fn get_score(
    pool: &PgPool,
    reservation_id: Uuid,
) -> Result<Option<Score>, sqlx::Error> {
    let query = format!("SELECT {SCORE_COLUMNS} FROM scores WHERE reservation_id = $1");
    sqlx::query_as::<_, Score>(&query)
        .bind(reservation_id)
        .fetch_optional(pool)
        .await
}

/// Insert the one score row a reservation may have. Returns false when a
/// score already exists (the unique reservation_id constraint absorbs the
/// race between two concurrent submissions).
pub async fn insert_score(
    pool: &PgPool,
    reservation_id: Uuid,
    primary_score: i32,
    partner_score: i32,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        INSERT INTO scores
            (id, reservation_id, primary_score, partner_score,
             confirmed_by_primary, confirmed_by_partner, created_at, updated_at)
        VALUES ($1, $2, $3, $4, FALSE, FALSE, NOW(), NOW())
        ON CONFLICT (reservation_id) DO NOTHING
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(reservation_id)
    .bind(primary_score)
    .bind(partner_score)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Flip one side's confirmation flag. The WHERE clause only matches while the
/// flag is still false, so a repeated confirmation returns None and cannot
/// re-trigger aggregation.
pub async fn confirm_score_flag(
    conn: &mut PgConnection,
    reservation_id: Uuid,
    role: ParticipantRole,
) -> Result<Option<Score>, sqlx::Error> {
    let query = match role {
        ParticipantRole::Primary => format!(
            r#"
            UPDATE scores
            SET confirmed_by_primary = TRUE, updated_at = NOW()
            WHERE reservation_id = $1 AND confirmed_by_primary = FALSE
            RETURNING {SCORE_COLUMNS}
            "#
        ),
        ParticipantRole::Partner => format!(
            r#"
            UPDATE scores
            SET confirmed_by_partner = TRUE, updated_at = NOW()
            WHERE reservation_id = $1 AND confirmed_by_partner = FALSE
            RETURNING {SCORE_COLUMNS}
            "#
        ),
    };
    sqlx::query_as::<_, Score>(&query)
        .bind(reservation_id)
        .fetch_optional(conn)
        .await
}

/// Apply one participant's increments, creating the stats row on first use.
pub async fn apply_stats_delta(
    conn: &mut PgConnection,
    delta: &StatsDelta,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO user_stats
            (id, user_id, games_played, games_won, games_lost, sets_won, sets_lost)
        VALUES ($1, $2, 1, $3, $4, $5, $6)
        ON CONFLICT (user_id) DO UPDATE
        SET games_played = user_stats.games_played + 1,
            games_won = user_stats.games_won + EXCLUDED.games_won,
            games_lost = user_stats.games_lost + EXCLUDED.games_lost,
            sets_won = user_stats.sets_won + EXCLUDED.sets_won,
            sets_lost = user_stats.sets_lost + EXCLUDED.sets_lost
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(delta.user_id)
    .bind(delta.games_won)
    .bind(delta.games_lost)
    .bind(delta.sets_won)
    .bind(delta.sets_lost)
    .execute(conn)
    .await?;

    Ok(())
}
