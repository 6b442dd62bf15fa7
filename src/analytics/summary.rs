use std::collections::{BTreeMap, HashSet};

use serde::Serialize;
use uuid::Uuid;

use super::series::{DailyBucket, SeriesPoint};
use super::volatility::compute_volatility;
use super::{percentage, round_to};
use crate::models::mood::{MoodCategory, MoodEntry};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryMetric {
    pub count: usize,
    pub percentage: u32,
    pub avg_rank: f64,
    pub unique_users: usize,
}

/// Whole-window organization mood summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrgTemperatureSummary {
    pub org_temperature: u32,
    pub avg_rank: f64,
    pub total_logs: usize,
    pub volatility: f64,
    pub positive: usize,
    pub negative: usize,
    pub pos_pct: u32,
    pub neg_pct: u32,
    pub participants: usize,
    pub avg_logs_per_user: f64,
    pub mood_counts: BTreeMap<MoodCategory, usize>,
    pub mood_metrics: BTreeMap<MoodCategory, CategoryMetric>,
    pub detailed_series: Vec<SeriesPoint>,
}

#[derive(Default)]
struct CategoryTally {
    count: usize,
    rank_sum: i64,
    users: HashSet<Uuid>,
}

/// Summarizes `entries` and attaches the series' volatility and points.
///
/// `entries` is taken as-is: pass the whole organization history or only the
/// windowed subset. Entries with an unrecognized category count toward
/// `total_logs`, `avg_rank` and `participants` but toward no category.
pub fn summarize<'e, I>(entries: I, series: &[DailyBucket<'_>]) -> OrgTemperatureSummary
where
    I: IntoIterator<Item = &'e MoodEntry>,
{
    let mut tallies: BTreeMap<MoodCategory, CategoryTally> = MoodCategory::ALL
        .into_iter()
        .map(|category| (category, CategoryTally::default()))
        .collect();
    let mut participants: HashSet<Uuid> = HashSet::new();
    let mut total_logs: usize = 0;
    let mut rank_sum: i64 = 0;

    for entry in entries {
        total_logs += 1;
        rank_sum += i64::from(entry.rank);
        participants.insert(entry.user_id);

        if let Some(tally) = entry.category().and_then(|c| tallies.get_mut(&c)) {
            tally.count += 1;
            tally.rank_sum += i64::from(entry.rank);
            tally.users.insert(entry.user_id);
        }
    }

    let avg_rank = if total_logs > 0 {
        round_to(rank_sum as f64 / total_logs as f64, 2)
    } else {
        0.0
    };

    let mood_counts: BTreeMap<MoodCategory, usize> = tallies
        .iter()
        .map(|(category, tally)| (*category, tally.count))
        .collect();

    let mood_metrics: BTreeMap<MoodCategory, CategoryMetric> = tallies
        .iter()
        .map(|(category, tally)| {
            let avg = if tally.count > 0 {
                round_to(tally.rank_sum as f64 / tally.count as f64, 2)
            } else {
                0.0
            };
            let metric = CategoryMetric {
                count: tally.count,
                percentage: percentage(tally.count, total_logs),
                avg_rank: avg,
                unique_users: tally.users.len(),
            };
            (*category, metric)
        })
        .collect();

    let positive: usize = mood_counts
        .iter()
        .filter(|(category, _)| category.is_positive())
        .map(|(_, count)| count)
        .sum();
    let negative: usize = mood_counts
        .iter()
        .filter(|(category, _)| category.is_negative())
        .map(|(_, count)| count)
        .sum();

    // Both shares can round up (1/8 and 7/8 give 13 and 88); cap the pair at 100.
    let pos_pct = percentage(positive, total_logs);
    let neg_pct = percentage(negative, total_logs).min(100 - pos_pct);

    let avg_logs_per_user = if participants.is_empty() {
        0.0
    } else {
        round_to(total_logs as f64 / participants.len() as f64, 2)
    };

    OrgTemperatureSummary {
        org_temperature: temperature_from_rank(avg_rank),
        avg_rank,
        total_logs,
        volatility: compute_volatility(series),
        positive,
        negative,
        pos_pct,
        neg_pct,
        participants: participants.len(),
        avg_logs_per_user,
        mood_counts,
        mood_metrics,
        detailed_series: series.iter().map(DailyBucket::to_point).collect(),
    }
}

/// Maps a 1-5 average rank onto the 0-100 gauge.
pub fn temperature_from_rank(avg_rank: f64) -> u32 {
    ((avg_rank / 5.0) * 100.0).round().max(0.0) as u32
}
