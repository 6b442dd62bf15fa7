//! Mood log persistence. Entries are append-only.

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::mood::{MoodCategory, MoodEntry};

pub struct NewMood<'a> {
    pub organization_id: Uuid,
    pub user_id: Uuid,
    pub mood: MoodCategory,
    pub rank: i32,
    pub note: Option<&'a str>,
    pub recorded_at: DateTime<Utc>,
    /// Calendar day of `recorded_at` in the analytics timezone.
    pub local_date: NaiveDate,
}

/// Inserts the entry unless the user already has one for that local day,
/// in which case `None` is returned.
pub async fn insert_mood(db: &PgPool, mood: NewMood<'_>) -> Result<Option<MoodEntry>, sqlx::Error> {
    sqlx::query_as::<_, MoodEntry>(
        r#"
        INSERT INTO moods (id, organization_id, user_id, mood, rank, note, recorded_at, local_date)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        ON CONFLICT (organization_id, user_id, local_date) DO NOTHING
        RETURNING id, organization_id, user_id, mood, rank, note, recorded_at, created_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(mood.organization_id)
    .bind(mood.user_id)
    .bind(mood.mood.as_str())
    .bind(mood.rank)
    .bind(mood.note)
    .bind(mood.recorded_at)
    .bind(mood.local_date)
    .fetch_optional(db)
    .await
}

pub async fn list_for_org(db: &PgPool, organization_id: Uuid) -> Result<Vec<MoodEntry>, sqlx::Error> {
    sqlx::query_as::<_, MoodEntry>(
        r#"
        SELECT id, organization_id, user_id, mood, rank, note, recorded_at, created_at
        FROM moods
        WHERE organization_id = $1
        ORDER BY recorded_at DESC
        "#,
    )
    .bind(organization_id)
    .fetch_all(db)
    .await
}

pub async fn list_for_org_user(
    db: &PgPool,
    organization_id: Uuid,
    user_id: Uuid,
) -> Result<Vec<MoodEntry>, sqlx::Error> {
    sqlx::query_as::<_, MoodEntry>(
        r#"
        SELECT id, organization_id, user_id, mood, rank, note, recorded_at, created_at
        FROM moods
        WHERE organization_id = $1 AND user_id = $2
        ORDER BY recorded_at DESC
        "#,
    )
    .bind(organization_id)
    .bind(user_id)
    .fetch_all(db)
    .await
}
