use chrono::{DateTime, Duration, NaiveDate, TimeZone};
use serde::Serialize;

use super::{round_to, validate_window, AnalyticsError};
use crate::models::mood::MoodEntry;

/// Entries that fell on one calendar day of the window.
#[derive(Debug, Clone)]
pub struct DailyBucket<'a> {
    pub date: NaiveDate,
    pub day_label: String,
    pub entries: Vec<&'a MoodEntry>,
    pub average_rank: f64,
    pub positive_count: usize,
    pub negative_count: usize,
    pub total_count: usize,
}

/// Wire shape of a bucket inside `detailedSeries`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub day: String,
    pub avg: f64,
    pub positive: usize,
    pub negative: usize,
    pub total: usize,
}

impl<'a> DailyBucket<'a> {
    fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            day_label: date.format("%b %d").to_string(),
            entries: Vec::new(),
            average_rank: 0.0,
            positive_count: 0,
            negative_count: 0,
            total_count: 0,
        }
    }

    fn tally(&mut self) {
        self.total_count = self.entries.len();
        self.positive_count = 0;
        self.negative_count = 0;

        let mut rank_sum: i64 = 0;
        for entry in &self.entries {
            rank_sum += i64::from(entry.rank);
            match entry.category() {
                Some(c) if c.is_positive() => self.positive_count += 1,
                Some(c) if c.is_negative() => self.negative_count += 1,
                _ => {}
            }
        }

        self.average_rank = if self.total_count > 0 {
            round_to(rank_sum as f64 / self.total_count as f64, 2)
        } else {
            0.0
        };
    }

    pub fn is_empty(&self) -> bool {
        self.total_count == 0
    }

    pub fn to_point(&self) -> SeriesPoint {
        SeriesPoint {
            day: self.day_label.clone(),
            avg: self.average_rank,
            positive: self.positive_count,
            negative: self.negative_count,
            total: self.total_count,
        }
    }
}

/// First calendar day covered by a window of `window_days` ending on the
/// local date of `reference_now`.
pub fn window_start<Tz: TimeZone>(window_days: i64, reference_now: &DateTime<Tz>) -> NaiveDate {
    reference_now.date_naive() - Duration::days(window_days - 1)
}

/// Buckets `entries` into `window_days` consecutive calendar days ending on
/// the local date of `reference_now`, oldest first.
///
/// Day boundaries are midnight-to-midnight in `reference_now`'s timezone; an
/// entry belongs to a day when its timestamp, converted into that timezone,
/// has the same calendar date. Entries outside the window are ignored.
pub fn build_daily_series<'a, Tz: TimeZone>(
    entries: &'a [MoodEntry],
    window_days: i64,
    reference_now: &DateTime<Tz>,
) -> Result<Vec<DailyBucket<'a>>, AnalyticsError> {
    validate_window(window_days)?;

    let tz = reference_now.timezone();
    let today = reference_now.date_naive();
    let start = window_start(window_days, reference_now);

    let mut buckets: Vec<DailyBucket<'a>> = (0..window_days)
        .map(|offset| DailyBucket::empty(start + Duration::days(offset)))
        .collect();

    for entry in entries {
        let local_date = entry.recorded_at.with_timezone(&tz).date_naive();
        if local_date < start || local_date > today {
            continue;
        }
        let index = (local_date - start).num_days() as usize;
        if let Some(bucket) = buckets.get_mut(index) {
            bucket.entries.push(entry);
        }
    }

    for bucket in &mut buckets {
        bucket.tally();
    }

    Ok(buckets)
}
