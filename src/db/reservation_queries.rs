use chrono::{NaiveDate, NaiveTime};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::reservation::{Reservation, ReservationListItem};
use crate::models::user::SkillLevel;

const RESERVATION_COLUMNS: &str = r#"
    id, location_id, date, start_time, end_time, comment,
    primary_user_id, partner_user_id, created_at, updated_at
"#;

// Joined projection shared by every listing query.
const LIST_ITEM_SELECT: &str = r#"
    SELECT r.id, r.location_id, sc.name AS location_name,
           r.date, r.start_time, r.end_time, r.comment,
           r.primary_user_id, pu.username AS primary_username, pu.skill AS primary_skill,
           r.partner_user_id, pa.username AS partner_username
    FROM reservations r
    INNER JOIN sport_centers sc ON sc.id = r.location_id
    INNER JOIN users pu ON pu.id = r.primary_user_id
    LEFT JOIN users pa ON pa.id = r.partner_user_id
"#;

pub async fn insert_reservation(
    pool: &PgPool,
    primary_user_id: Uuid,
    location_id: Uuid,
    date: NaiveDate,
    start_time: NaiveTime,
    end_time: NaiveTime,
    comment: Option<&str>,
) -> Result<Reservation, sqlx::Error> {
    let query = format!(
        r#"
        INSERT INTO reservations
            (id, location_id, date, start_time, end_time, comment,
             primary_user_id, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, NOW(), NOW())
        RETURNING {RESERVATION_COLUMNS}
        "#
    );
    sqlx::query_as::<_, Reservation>(&query)
        .bind(Uuid::new_v4())
        .bind(location_id)
        .bind(date)
        .bind(start_time)
        .bind(end_time)
        .bind(comment)
        .bind(primary_user_id)
        .fetch_one(pool)
        .await
}

pub async fn get_reservation(
    pool: &PgPool,
    reservation_id: Uuid,
) -> Result<Option<Reservation>, sqlx::Error> {
    let query = format!("SELECT {RESERVATION_COLUMNS} FROM reservations WHERE id = $1");
    sqlx::query_as::<_, Reservation>(&query)
        .bind(reservation_id)
        .fetch_optional(pool)
        .await
}

pub async fn get_reservation_with_names(
    pool: &PgPool,
    reservation_id: Uuid,
) -> Result<Option<ReservationListItem>, sqlx::Error> {
    let query = format!("{LIST_ITEM_SELECT} WHERE r.id = $1");
    sqlx::query_as::<_, ReservationListItem>(&query)
        .bind(reservation_id)
        .fetch_optional(pool)
        .await
}

/// Does the user already hold a reservation (either side) overlapping the window?
pub async fn user_has_overlapping(
    pool: &PgPool,
    user_id: Uuid,
    date: NaiveDate,
    start_time: NaiveTime,
    end_time: NaiveTime,
) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar::<_, bool>(
        r#"
        SELECT EXISTS(
            SELECT 1 FROM reservations
            WHERE (primary_user_id = $1 OR partner_user_id = $1)
              AND date = $2
              AND start_time < $4
              AND end_time > $3
        )
        "#,
    )
    .bind(user_id)
    .bind(date)
    .bind(start_time)
    .bind(end_time)
    .fetch_one(pool)
    .await
}

/// Reservations at the location whose window overlaps the given one.
pub async fn count_overlapping_at_location(
    pool: &PgPool,
    location_id: Uuid,
    date: NaiveDate,
    start_time: NaiveTime,
    end_time: NaiveTime,
) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*) FROM reservations
        WHERE location_id = $1
          AND date = $2
          AND start_time < $4
          AND end_time > $3
        "#,
    )
    .bind(location_id)
    .bind(date)
    .bind(start_time)
    .bind(end_time)
    .fetch_one(pool)
    .await
}

/// Matchmaking listing: open reservations by bookers of the given skill,
/// today or later, never the user's own bookings.
pub async fn list_open_for_skill(
    pool: &PgPool,
    user_id: Uuid,
    skill: SkillLevel,
    today: NaiveDate,
) -> Result<Vec<ReservationListItem>, sqlx::Error> {
    let query = format!(
        r#"{LIST_ITEM_SELECT}
        WHERE r.partner_user_id IS NULL
          AND r.date >= $1
          AND pu.skill = $2
          AND r.primary_user_id != $3
        ORDER BY r.date, r.start_time
        "#
    );
    sqlx::query_as::<_, ReservationListItem>(&query)
        .bind(today)
        .bind(skill)
        .bind(user_id)
        .fetch_all(pool)
        .await
}

pub async fn search_reservations(
    pool: &PgPool,
    user_id: Uuid,
    date_start: NaiveDate,
    date_end: NaiveDate,
    location_id: Uuid,
    opponent_skill: SkillLevel,
) -> Result<Vec<ReservationListItem>, sqlx::Error> {
    let query = format!(
        r#"{LIST_ITEM_SELECT}
        WHERE r.date >= $1
          AND r.date <= $2
          AND r.location_id = $3
          AND pu.skill = $4
          AND r.primary_user_id != $5
          AND (r.partner_user_id IS NULL OR r.partner_user_id != $5)
        ORDER BY r.date, r.start_time
        "#
    );
    sqlx::query_as::<_, ReservationListItem>(&query)
        .bind(date_start)
        .bind(date_end)
        .bind(location_id)
        .bind(opponent_skill)
        .bind(user_id)
        .fetch_all(pool)
        .await
}

/// Claim the partner slot. The conditional predicate makes the join atomic:
/// of two concurrent joins only one can see the NULL slot.
pub async fn claim_partner_slot(
    pool: &PgPool,
    reservation_id: Uuid,
    user_id: Uuid,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE reservations
        SET partner_user_id = $2, updated_at = NOW()
        WHERE id = $1
          AND partner_user_id IS NULL
          AND primary_user_id != $2
        "#,
    )
    .bind(reservation_id)
    .bind(user_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

pub async fn list_upcoming(
    pool: &PgPool,
    user_id: Uuid,
    today: NaiveDate,
    time_now: NaiveTime,
) -> Result<Vec<ReservationListItem>, sqlx::Error> {
    let query = format!(
        r#"{LIST_ITEM_SELECT}
        WHERE (r.primary_user_id = $1 OR r.partner_user_id = $1)
          AND (r.date > $2 OR (r.date = $2 AND r.end_time > $3))
        ORDER BY r.date, r.start_time
        "#
    );
    sqlx::query_as::<_, ReservationListItem>(&query)
        .bind(user_id)
        .bind(today)
        .bind(time_now)
        .fetch_all(pool)
        .await
}

pub async fn list_history(
    pool: &PgPool,
    user_id: Uuid,
    today: NaiveDate,
) -> Result<Vec<ReservationListItem>, sqlx::Error> {
    let query = format!(
        r#"{LIST_ITEM_SELECT}
        WHERE (r.primary_user_id = $1 OR r.partner_user_id = $1)
          AND r.date < $2
        ORDER BY r.date, r.start_time
        "#
    );
    sqlx::query_as::<_, ReservationListItem>(&query)
        .bind(user_id)
        .bind(today)
        .fetch_all(pool)
        .await
}

/// Future games where both sides are set and the user plays.
pub async fn list_future_joint(
    pool: &PgPool,
    user_id: Uuid,
    today: NaiveDate,
) -> Result<Vec<ReservationListItem>, sqlx::Error> {
    let query = format!(
        r#"{LIST_ITEM_SELECT}
        WHERE (r.primary_user_id = $1 OR r.partner_user_id = $1)
          AND r.partner_user_id IS NOT NULL
          AND r.date > $2
        ORDER BY r.date, r.start_time
        "#
    );
    sqlx::query_as::<_, ReservationListItem>(&query)
        .bind(user_id)
        .bind(today)
        .fetch_all(pool)
        .await
}

/// Every reservation the user takes part in, newest first.
pub async fn list_all_for_user(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<Vec<ReservationListItem>, sqlx::Error> {
    let query = format!(
        r#"{LIST_ITEM_SELECT}
        WHERE r.primary_user_id = $1 OR r.partner_user_id = $1
        ORDER BY r.date DESC, r.start_time DESC
        "#
    );
    sqlx::query_as::<_, ReservationListItem>(&query)
        .bind(user_id)
        .fetch_all(pool)
        .await
}

/// Delete a reservation and its score, if any, in one transaction.
pub async fn delete_reservation_with_score(
    pool: &PgPool,
    reservation_id: Uuid,
) -> Result<bool, sqlx::Error> {
    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM scores WHERE reservation_id = $1")
        .bind(reservation_id)
        .execute(&mut *tx)
        .await?;

    let result = sqlx::query("DELETE FROM reservations WHERE id = $1")
        .bind(reservation_id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(result.rows_affected() > 0)
}
