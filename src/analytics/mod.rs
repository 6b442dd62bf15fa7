//! # Mood analytics engine
//!
//! Pure aggregation over a snapshot of mood entries: day buckets for a
//! trailing window, volatility of the daily averages, whole-window category
//! metrics and a first-half/second-half trend comparison.
//!
//! Nothing here performs I/O or reads the clock. The reference instant and
//! its timezone are passed in, so identical inputs give identical output.

pub mod keywords;
pub mod series;
pub mod summary;
pub mod trend;
pub mod volatility;

use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};

use crate::models::mood::MoodEntry;

pub use keywords::{top_keywords, KeywordCount, DEFAULT_KEYWORD_LIMIT};
pub use series::{build_daily_series, DailyBucket, SeriesPoint};
pub use summary::{summarize, CategoryMetric, OrgTemperatureSummary};
pub use trend::{best_and_worst_days, compare_halves, WindowComparison};
pub use volatility::compute_volatility;

/// Longest window the engine will bucket.
pub const MAX_WINDOW_DAYS: i64 = 366;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AnalyticsError {
    #[error("window must be between 1 and {max} days, got {requested}")]
    InvalidWindow { requested: i64, max: i64 },
}

/// Which entries feed the whole-window totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogScope {
    /// Every entry the organization has ever logged.
    #[default]
    All,
    /// Only entries that land inside the day series.
    Window,
}

/// Full analytics payload for one organization.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrgAnalytics {
    pub window_days: i64,
    pub scope: LogScope,
    #[serde(flatten)]
    pub summary: OrgTemperatureSummary,
    pub comparison: WindowComparison,
    pub best_day: Option<SeriesPoint>,
    pub worst_day: Option<SeriesPoint>,
    pub top_keywords: Vec<KeywordCount>,
}

pub fn analyze<Tz: TimeZone>(
    entries: &[MoodEntry],
    window_days: i64,
    reference_now: &DateTime<Tz>,
    scope: LogScope,
) -> Result<OrgAnalytics, AnalyticsError> {
    let series = build_daily_series(entries, window_days, reference_now)?;

    let scoped: Vec<&MoodEntry> = match scope {
        LogScope::All => entries.iter().collect(),
        LogScope::Window => series
            .iter()
            .flat_map(|bucket| bucket.entries.iter().copied())
            .collect(),
    };

    let summary = summarize(scoped.iter().copied(), &series);
    let comparison = compare_halves(&series);
    let (best_day, worst_day) = best_and_worst_days(&series);
    let top_keywords = top_keywords(scoped.iter().copied(), DEFAULT_KEYWORD_LIMIT);

    Ok(OrgAnalytics {
        window_days,
        scope,
        summary,
        comparison,
        best_day,
        worst_day,
        top_keywords,
    })
}

/// Fails with [`AnalyticsError::InvalidWindow`] outside `1..=MAX_WINDOW_DAYS`.
pub fn validate_window(window_days: i64) -> Result<(), AnalyticsError> {
    if (1..=MAX_WINDOW_DAYS).contains(&window_days) {
        Ok(())
    } else {
        Err(AnalyticsError::InvalidWindow {
            requested: window_days,
            max: MAX_WINDOW_DAYS,
        })
    }
}

pub(crate) fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// `part / whole` as a whole-number percentage; 0 when `whole` is 0.
pub(crate) fn percentage(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    ((part as f64 / whole as f64) * 100.0).round() as u32
}

#[cfg(test)]
pub(crate) mod test_support {
    use chrono::{DateTime, TimeZone, Utc};
    use uuid::Uuid;

    use crate::models::mood::MoodEntry;

    /// 2025-03-14 15:30 UTC
    pub fn reference_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 14, 15, 30, 0).unwrap()
    }

    pub fn user(n: u128) -> Uuid {
        Uuid::from_u128(n)
    }

    pub fn entry_at(user_id: Uuid, mood: &str, rank: i32, at: DateTime<Utc>) -> MoodEntry {
        MoodEntry {
            id: Uuid::new_v4(),
            organization_id: Uuid::from_u128(0xA11CE),
            user_id,
            mood: mood.to_string(),
            rank,
            note: None,
            recorded_at: at,
            created_at: at,
        }
    }
}
