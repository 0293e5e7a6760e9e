use serde::Serialize;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::database::{activity_repo, booking_repo, is_unique_violation};
use crate::models::ActivityRow;
use crate::web::error::ApiError;

/// Outcome of a join attempt. Full and AlreadyBooked are ordinary outcomes
/// here, not errors; the handler decides how to report them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinOutcome {
    Booked,
    Full,
    AlreadyBooked,
}

/// Reserve a seat. The duplicate check (unique booking insert) and the
/// capacity check (conditional counter increment) run in one transaction, so
/// concurrent joins on the last seat resolve to exactly one Booked.
pub async fn join(
    pool: &SqlitePool,
    user_id: &str,
    activity_id: &str,
) -> Result<JoinOutcome, ApiError> {
    let mut tx = pool.begin().await?;

    if !activity_repo::activity_exists(&mut tx, activity_id).await? {
        return Err(ApiError::NotFound("Activity not found".to_string()));
    }

    let booking_id = Uuid::new_v4().to_string();
    match booking_repo::insert_booking(&mut tx, &booking_id, user_id, activity_id).await {
        Ok(()) => {}
        Err(e) if is_unique_violation(&e) => return Ok(JoinOutcome::AlreadyBooked),
        Err(e) => return Err(e.into()),
    }

    let claimed = booking_repo::try_claim_seat(&mut tx, activity_id).await?;
    if claimed == 0 {
        // Dropping the transaction rolls the booking insert back.
        return Ok(JoinOutcome::Full);
    }

    tx.commit().await?;
    Ok(JoinOutcome::Booked)
}

/// Cancel a reservation. Ledger delete and counter decrement move in the same
/// transaction; the decrement floors at zero as a drift guard.
pub async fn cancel(pool: &SqlitePool, user_id: &str, activity_id: &str) -> Result<(), ApiError> {
    let mut tx = pool.begin().await?;

    let deleted = booking_repo::delete_booking(&mut tx, user_id, activity_id).await?;
    if deleted == 0 {
        return Err(ApiError::NotFound(
            "You have no booking for this activity".to_string(),
        ));
    }
    booking_repo::release_seat(&mut tx, activity_id).await?;

    tx.commit().await?;
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct BookingView {
    pub id: String,
    pub booked_at: String,
    pub activity: ActivityRow,
}

pub async fn list_for_user(pool: &SqlitePool, user_id: &str) -> Result<Vec<BookingView>, ApiError> {
    let rows = booking_repo::list_for_user(pool, user_id).await?;
    Ok(rows
        .into_iter()
        .map(|row| BookingView {
            id: row.id,
            booked_at: row.booked_at,
            activity: ActivityRow {
                id: row.activity_id,
                title: row.title,
                description: row.description,
                category: row.category,
                date: row.date,
                location: row.location,
                max_participants: row.max_participants,
                current_participants: row.current_participants,
                created_at: row.activity_created_at,
            },
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::{activity_repo, booking_repo};
    use crate::models::Role;
    use crate::services::test_support::{seed_account, seed_activity, test_pool};

    async fn participants(pool: &SqlitePool, activity_id: &str) -> i64 {
        activity_repo::load_activity(pool, activity_id)
            .await
            .unwrap()
            .unwrap()
            .current_participants
    }

    #[tokio::test]
    async fn last_seat_goes_to_exactly_one_user() {
        let pool = test_pool().await;
        let alice = seed_account(&pool, "alice", Role::User).await;
        let bob = seed_account(&pool, "bob", Role::User).await;
        let activity = seed_activity(&pool, "yoga", 1).await;

        assert_eq!(join(&pool, &alice.id, &activity).await.unwrap(), JoinOutcome::Booked);
        assert_eq!(join(&pool, &bob.id, &activity).await.unwrap(), JoinOutcome::Full);

        assert_eq!(participants(&pool, &activity).await, 1);
        assert_eq!(booking_repo::count_for_activity(&pool, &activity).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn duplicate_join_is_already_booked() {
        let pool = test_pool().await;
        let alice = seed_account(&pool, "alice", Role::User).await;
        let activity = seed_activity(&pool, "pottery", 5).await;

        assert_eq!(join(&pool, &alice.id, &activity).await.unwrap(), JoinOutcome::Booked);
        assert_eq!(
            join(&pool, &alice.id, &activity).await.unwrap(),
            JoinOutcome::AlreadyBooked
        );

        // The failed attempt must not bump the counter.
        assert_eq!(participants(&pool, &activity).await, 1);
    }

    #[tokio::test]
    async fn join_cancel_join_round_trip() {
        let pool = test_pool().await;
        let alice = seed_account(&pool, "alice", Role::User).await;
        let activity = seed_activity(&pool, "hiking", 3).await;

        assert_eq!(join(&pool, &alice.id, &activity).await.unwrap(), JoinOutcome::Booked);
        cancel(&pool, &alice.id, &activity).await.unwrap();
        assert_eq!(participants(&pool, &activity).await, 0);

        assert_eq!(join(&pool, &alice.id, &activity).await.unwrap(), JoinOutcome::Booked);
        assert_eq!(participants(&pool, &activity).await, 1);
        assert_eq!(booking_repo::count_for_activity(&pool, &activity).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn cancel_without_booking_is_not_found() {
        let pool = test_pool().await;
        let alice = seed_account(&pool, "alice", Role::User).await;
        let activity = seed_activity(&pool, "chess", 2).await;

        let err = cancel(&pool, &alice.id, &activity).await.unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
        assert_eq!(participants(&pool, &activity).await, 0);
    }

    #[tokio::test]
    async fn join_unknown_activity_is_not_found() {
        let pool = test_pool().await;
        let alice = seed_account(&pool, "alice", Role::User).await;

        let err = join(&pool, &alice.id, "missing").await.unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
    }

    #[tokio::test]
    async fn counter_tracks_ledger_through_mixed_traffic() {
        let pool = test_pool().await;
        let activity = seed_activity(&pool, "cooking", 10).await;

        let mut users = Vec::new();
        for i in 0..4 {
            users.push(seed_account(&pool, &format!("user{}", i), Role::User).await);
        }

        for user in &users {
            assert_eq!(join(&pool, &user.id, &activity).await.unwrap(), JoinOutcome::Booked);
        }
        cancel(&pool, &users[1].id, &activity).await.unwrap();
        cancel(&pool, &users[3].id, &activity).await.unwrap();

        let counted = booking_repo::count_for_activity(&pool, &activity).await.unwrap();
        assert_eq!(counted, 2);
        assert_eq!(participants(&pool, &activity).await, counted);
    }

    #[tokio::test]
    async fn bookings_list_resolves_activity_newest_first() {
        let pool = test_pool().await;
        let alice = seed_account(&pool, "alice", Role::User).await;
        let first = seed_activity(&pool, "first", 5).await;
        let second = seed_activity(&pool, "second", 5).await;

        join(&pool, &alice.id, &first).await.unwrap();
        join(&pool, &alice.id, &second).await.unwrap();

        let bookings = list_for_user(&pool, &alice.id).await.unwrap();
        assert_eq!(bookings.len(), 2);
        assert_eq!(bookings[0].activity.title, "second");
        assert_eq!(bookings[1].activity.title, "first");
    }
}
