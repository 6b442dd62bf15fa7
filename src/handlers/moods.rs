use axum::{
    extract::{Path, State},
    Extension, Json,
};
use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use uuid::Uuid;
use validator::Validate;

use crate::auth::access::require_membership;
use crate::auth::middleware::AuthUser;
use crate::db::moods::{self, NewMood};
use crate::dto::CreateMoodRequest;
use crate::error::{AppError, AppResult};
use crate::models::mood::MoodEntry;
use crate::AppState;

pub async fn create_mood(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Path(org_id): Path<Uuid>,
    Json(body): Json<CreateMoodRequest>,
) -> AppResult<Json<MoodEntry>> {
    body.validate()?;

    require_membership(&state.db, auth_user.id, org_id, None).await?;

    let now = Utc::now();

    // One check-in per user, organization and local day
    let entry = moods::insert_mood(
        &state.db,
        NewMood {
            organization_id: org_id,
            user_id: auth_user.id,
            mood: body.mood,
            rank: body.rank,
            note: body.note.as_deref().map(str::trim).filter(|n| !n.is_empty()),
            recorded_at: now,
            local_date: local_date(now, &state.config.analytics_offset),
        },
    )
    .await?
    .ok_or_else(|| AppError::Conflict("Mood already submitted today".into()))?;

    tracing::info!(
        organization_id = %org_id,
        user_id = %auth_user.id,
        mood = body.mood.as_str(),
        rank = body.rank,
        "Mood logged"
    );

    Ok(Json(entry))
}

/// Owners see every entry in the organization; members only their own.
pub async fn list_moods(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Path(org_id): Path<Uuid>,
) -> AppResult<Json<Vec<MoodEntry>>> {
    let membership = require_membership(&state.db, auth_user.id, org_id, None).await?;

    let entries = if membership.is_owner() {
        moods::list_for_org(&state.db, org_id).await?
    } else {
        moods::list_for_org_user(&state.db, org_id, auth_user.id).await?
    };

    Ok(Json(entries))
}

/// Calendar day containing `now` in the analytics timezone.
fn local_date(now: DateTime<Utc>, offset: &FixedOffset) -> NaiveDate {
    now.with_timezone(offset).date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_local_date_in_utc() {
        let now = Utc.with_ymd_and_hms(2025, 3, 14, 15, 30, 0).unwrap();
        assert_eq!(local_date(now, &FixedOffset::east_opt(0).unwrap()), day(2025, 3, 14));
    }

    #[test]
    fn test_local_date_west_of_utc() {
        // 02:00 UTC on the 14th is 21:00 on the 13th at UTC-05:00
        let now = Utc.with_ymd_and_hms(2025, 3, 14, 2, 0, 0).unwrap();
        assert_eq!(
            local_date(now, &FixedOffset::west_opt(5 * 3600).unwrap()),
            day(2025, 3, 13)
        );
    }

    #[test]
    fn test_local_date_east_of_utc() {
        // 23:00 UTC on the 14th is 08:00 on the 15th at UTC+09:00
        let now = Utc.with_ymd_and_hms(2025, 3, 14, 23, 0, 0).unwrap();
        assert_eq!(
            local_date(now, &FixedOffset::east_opt(9 * 3600).unwrap()),
            day(2025, 3, 15)
        );
    }

    #[test]
    fn test_same_local_day_shares_key() {
        // 05:00 and 04:59 next day UTC are both the 14th at UTC-05:00
        let offset = FixedOffset::west_opt(5 * 3600).unwrap();
        let morning = Utc.with_ymd_and_hms(2025, 3, 14, 5, 0, 0).unwrap();
        let late = Utc.with_ymd_and_hms(2025, 3, 15, 4, 59, 59).unwrap();
        let next = Utc.with_ymd_and_hms(2025, 3, 15, 5, 0, 0).unwrap();
        assert_eq!(local_date(morning, &offset), local_date(late, &offset));
        assert_ne!(local_date(late, &offset), local_date(next, &offset));
    }
}
