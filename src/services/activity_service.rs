use serde::Deserialize;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::database::activity_repo;
use crate::models::activities::ACTIVITY_CATEGORIES;
use crate::models::ActivityRow;
use crate::web::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct ActivityPayload {
    pub title: String,
    pub description: String,
    pub category: String,
    pub date: String,
    pub location: String,
    pub max_participants: Option<i64>,
}

const DEFAULT_MAX_PARTICIPANTS: i64 = 20;

struct ValidatedActivity<'a> {
    title: &'a str,
    description: &'a str,
    category: &'a str,
    date: &'a str,
    location: &'a str,
    max_participants: i64,
}

fn validate(payload: &ActivityPayload) -> Result<ValidatedActivity<'_>, ApiError> {
    let title = payload.title.trim();
    if title.is_empty() {
        return Err(ApiError::Validation("Title is required".to_string()));
    }
    let category = payload.category.trim();
    if !ACTIVITY_CATEGORIES.contains(&category) {
        return Err(ApiError::Validation(format!(
            "Unknown category \"{}\"",
            category
        )));
    }
    let date = payload.date.trim();
    if date.is_empty() {
        return Err(ApiError::Validation("Date is required".to_string()));
    }
    let max_participants = payload.max_participants.unwrap_or(DEFAULT_MAX_PARTICIPANTS);
    if max_participants < 1 {
        return Err(ApiError::Validation(
            "Max participants must be at least 1".to_string(),
        ));
    }
    Ok(ValidatedActivity {
        title,
        description: payload.description.trim(),
        category,
        date,
        location: payload.location.trim(),
        max_participants,
    })
}

pub async fn list(pool: &SqlitePool) -> Result<Vec<ActivityRow>, ApiError> {
    Ok(activity_repo::list_activities(pool).await?)
}

pub async fn get(pool: &SqlitePool, activity_id: &str) -> Result<ActivityRow, ApiError> {
    activity_repo::load_activity(pool, activity_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Activity not found".to_string()))
}

pub async fn create(pool: &SqlitePool, payload: ActivityPayload) -> Result<ActivityRow, ApiError> {
    let validated = validate(&payload)?;
    let id = Uuid::new_v4().to_string();
    activity_repo::insert_activity(
        pool,
        activity_repo::NewActivity {
            id: &id,
            title: validated.title,
            description: validated.description,
            category: validated.category,
            date: validated.date,
            location: validated.location,
            max_participants: validated.max_participants,
        },
    )
    .await?;
    get(pool, &id).await
}

pub async fn update(
    pool: &SqlitePool,
    activity_id: &str,
    payload: ActivityPayload,
) -> Result<ActivityRow, ApiError> {
    let validated = validate(&payload)?;
    let updated = activity_repo::update_activity(
        pool,
        activity_repo::NewActivity {
            id: activity_id,
            title: validated.title,
            description: validated.description,
            category: validated.category,
            date: validated.date,
            location: validated.location,
            max_participants: validated.max_participants,
        },
    )
    .await?;
    if updated == 0 {
        return Err(ApiError::NotFound("Activity not found".to_string()));
    }
    get(pool, activity_id).await
}

pub async fn delete(pool: &SqlitePool, activity_id: &str) -> Result<(), ApiError> {
    let deleted = activity_repo::delete_activity(pool, activity_id).await?;
    if deleted == 0 {
        return Err(ApiError::NotFound("Activity not found".to_string()));
    }
    Ok(())
}
