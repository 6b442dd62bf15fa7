//! # MoodArc — Request DTOs
//!
//! Conventions:
//! - `*Request` → deserialized from a client JSON body
//! - `*Query`   → deserialized from query parameters
//! - Validation is expressed via `validator` derive macros

use serde::Deserialize;
use validator::Validate;

use crate::analytics::LogScope;
use crate::models::mood::MoodCategory;

/// POST /api/orgs/{org_id}/moods
#[derive(Debug, Deserialize, Validate)]
pub struct CreateMoodRequest {
    pub mood: MoodCategory,

    #[validate(range(min = 1, max = 5, message = "Rank must be between 1 and 5"))]
    pub rank: i32,

    #[validate(length(max = 500, message = "Note must be under 500 characters"))]
    pub note: Option<String>,
}

/// GET /api/orgs/{org_id}/moods/analytics
#[derive(Debug, Default, Deserialize)]
pub struct AnalyticsQuery {
    /// Trailing window length. Default: `ANALYTICS_DEFAULT_WINDOW_DAYS`
    pub days: Option<i64>,

    /// `all` (default) or `window`
    #[serde(default)]
    pub scope: LogScope,
}
