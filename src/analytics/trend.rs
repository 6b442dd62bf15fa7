use serde::Serialize;

use super::round_to;
use super::series::{DailyBucket, SeriesPoint};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowComparison {
    pub first_half_avg: f64,
    pub second_half_avg: f64,
    /// Percent change from the first half to the second, one decimal place.
    pub pct_change: f64,
}

/// Compares the mean daily average of the earlier half of the series with
/// the later half. With an odd number of days the later half gets the extra
/// day. Empty days contribute 0 to their half.
pub fn compare_halves(series: &[DailyBucket<'_>]) -> WindowComparison {
    let (first, second) = series.split_at(series.len() / 2);
    let first_avg = mean_average_rank(first);
    let second_avg = mean_average_rank(second);

    let pct_change = if first_avg == 0.0 {
        0.0
    } else {
        round_to((second_avg - first_avg) / first_avg * 100.0, 1)
    };

    WindowComparison {
        first_half_avg: round_to(first_avg, 2),
        second_half_avg: round_to(second_avg, 2),
        pct_change,
    }
}

fn mean_average_rank(half: &[DailyBucket<'_>]) -> f64 {
    if half.is_empty() {
        return 0.0;
    }
    half.iter().map(|b| b.average_rank).sum::<f64>() / half.len() as f64
}

/// Highest and lowest scoring days among those with entries. Ties go to the
/// earlier day.
pub fn best_and_worst_days(
    series: &[DailyBucket<'_>],
) -> (Option<SeriesPoint>, Option<SeriesPoint>) {
    let mut best: Option<&DailyBucket<'_>> = None;
    let mut worst: Option<&DailyBucket<'_>> = None;

    for bucket in series.iter().filter(|b| !b.is_empty()) {
        if best.map_or(true, |b| bucket.average_rank > b.average_rank) {
            best = Some(bucket);
        }
        if worst.map_or(true, |w| bucket.average_rank < w.average_rank) {
            worst = Some(bucket);
        }
    }

    (best.map(DailyBucket::to_point), worst.map(DailyBucket::to_point))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::series::build_daily_series;
    use crate::analytics::test_support::{entry_at, reference_now, user};
    use chrono::Duration;

    #[test]
    fn test_empty_series_has_no_change() {
        let now = reference_now();
        let series = build_daily_series(&[], 14, &now).unwrap();
        assert_eq!(compare_halves(&series), WindowComparison::default());
        assert_eq!(best_and_worst_days(&series), (None, None));
    }

    #[test]
    fn test_improving_trend() {
        // 4 days: [2, 2 | 3, 3] -> +50%
        let now = reference_now();
        let entries: Vec<_> = (0..4)
            .map(|d| {
                let rank = if d < 2 { 3 } else { 2 };
                entry_at(user(1), "neutral", rank, now - Duration::days(d))
            })
            .collect();
        let series = build_daily_series(&entries, 4, &now).unwrap();
        let cmp = compare_halves(&series);

        assert_eq!(cmp.first_half_avg, 2.0);
        assert_eq!(cmp.second_half_avg, 3.0);
        assert_eq!(cmp.pct_change, 50.0);
    }

    #[test]
    fn test_odd_length_gives_extra_day_to_second_half() {
        // 3 days: [4 | 0, 2] -> first 4, second 1, change -75%
        let now = reference_now();
        let entries = vec![
            entry_at(user(1), "happy", 4, now - Duration::days(2)),
            entry_at(user(1), "sad", 2, now),
        ];
        let series = build_daily_series(&entries, 3, &now).unwrap();
        let cmp = compare_halves(&series);

        assert_eq!(cmp.first_half_avg, 4.0);
        assert_eq!(cmp.second_half_avg, 1.0);
        assert_eq!(cmp.pct_change, -75.0);
    }

    #[test]
    fn test_zero_first_half_guards_division() {
        let now = reference_now();
        let entries = vec![entry_at(user(1), "happy", 5, now)];
        let series = build_daily_series(&entries, 7, &now).unwrap();
        let cmp = compare_halves(&series);

        assert_eq!(cmp.first_half_avg, 0.0);
        assert!(cmp.second_half_avg > 0.0);
        assert_eq!(cmp.pct_change, 0.0);
    }

    #[test]
    fn test_single_day_window() {
        let now = reference_now();
        let entries = vec![entry_at(user(1), "happy", 5, now)];
        let series = build_daily_series(&entries, 1, &now).unwrap();
        let cmp = compare_halves(&series);

        assert_eq!(cmp.first_half_avg, 0.0);
        assert_eq!(cmp.second_half_avg, 5.0);
        assert_eq!(cmp.pct_change, 0.0);
    }

    #[test]
    fn test_pct_change_rounds_to_one_place() {
        // [3 | 4, 4] with 3 days -> first 3, second 4 -> 33.3%
        let now = reference_now();
        let entries = vec![
            entry_at(user(1), "neutral", 3, now - Duration::days(2)),
            entry_at(user(1), "happy", 4, now - Duration::days(1)),
            entry_at(user(1), "happy", 4, now),
        ];
        let series = build_daily_series(&entries, 3, &now).unwrap();
        assert_eq!(compare_halves(&series).pct_change, 33.3);
    }

    #[test]
    fn test_best_and_worst_skip_empty_days() {
        let now = reference_now();
        let entries = vec![
            entry_at(user(1), "sad", 2, now - Duration::days(5)),
            entry_at(user(1), "happy", 5, now - Duration::days(3)),
            entry_at(user(2), "happy", 5, now - Duration::days(1)),
        ];
        let series = build_daily_series(&entries, 7, &now).unwrap();
        let (best, worst) = best_and_worst_days(&series);

        let best = best.unwrap();
        let worst = worst.unwrap();
        assert_eq!(best.avg, 5.0);
        assert_eq!(best.day, series[3].day_label);
        assert_eq!(worst.avg, 2.0);
        assert_eq!(worst.day, series[1].day_label);
    }
}
