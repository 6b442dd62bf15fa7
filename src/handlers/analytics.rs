use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use chrono::Utc;
use uuid::Uuid;

use crate::analytics::{self, OrgAnalytics};
use crate::auth::access::require_membership;
use crate::auth::middleware::AuthUser;
use crate::db::moods;
use crate::dto::AnalyticsQuery;
use crate::error::AppResult;
use crate::models::membership::MembershipRole;
use crate::AppState;

/// GET /api/orgs/:org_id/moods/analytics — owners only.
pub async fn get_mood_analytics(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Path(org_id): Path<Uuid>,
    Query(query): Query<AnalyticsQuery>,
) -> AppResult<Json<OrgAnalytics>> {
    let window_days = query.days.unwrap_or(state.config.default_window_days);
    analytics::validate_window(window_days)?;

    require_membership(
        &state.db,
        auth_user.id,
        org_id,
        Some(MembershipRole::Owner),
    )
    .await?;

    let entries = moods::list_for_org(&state.db, org_id).await?;
    let now = Utc::now().with_timezone(&state.config.analytics_offset);

    let result = analytics::analyze(&entries, window_days, &now, query.scope)?;

    tracing::info!(
        organization_id = %org_id,
        window_days,
        scope = ?query.scope,
        total_logs = result.summary.total_logs,
        participants = result.summary.participants,
        "Mood analytics computed"
    );

    Ok(Json(result))
}
