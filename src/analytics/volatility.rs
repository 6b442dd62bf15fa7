use super::round_to;
use super::series::DailyBucket;

/// Sample standard deviation of the daily averages, skipping empty days.
///
/// Returns 0 when fewer than two days have entries.
pub fn compute_volatility(series: &[DailyBucket<'_>]) -> f64 {
    let values: Vec<f64> = series
        .iter()
        .filter(|bucket| !bucket.is_empty())
        .map(|bucket| bucket.average_rank)
        .collect();

    if values.len() < 2 {
        return 0.0;
    }

    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);

    round_to(variance.sqrt(), 2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::series::build_daily_series;
    use crate::analytics::test_support::{entry_at, reference_now, user};
    use chrono::Duration;

    #[test]
    fn test_zero_with_no_entries() {
        let now = reference_now();
        let series = build_daily_series(&[], 14, &now).unwrap();
        assert_eq!(compute_volatility(&series), 0.0);
    }

    #[test]
    fn test_zero_with_single_active_day() {
        let now = reference_now();
        let entries = vec![
            entry_at(user(1), "happy", 5, now),
            entry_at(user(2), "sad", 1, now),
        ];
        let series = build_daily_series(&entries, 14, &now).unwrap();
        assert_eq!(compute_volatility(&series), 0.0);
    }

    #[test]
    fn test_sample_standard_deviation() {
        // Daily averages 2, 4, 4 -> mean 10/3, sample variance 4/3, sd 1.1547
        let now = reference_now();
        let entries = vec![
            entry_at(user(1), "sad", 2, now - Duration::days(4)),
            entry_at(user(1), "happy", 4, now - Duration::days(2)),
            entry_at(user(1), "excited", 4, now),
        ];
        let series = build_daily_series(&entries, 7, &now).unwrap();
        assert_eq!(compute_volatility(&series), 1.15);
    }

    #[test]
    fn test_empty_days_do_not_count_as_zero() {
        // Two days at 3 and 5 with empty days in between: sd of [3, 5] = 1.41
        let now = reference_now();
        let entries = vec![
            entry_at(user(1), "neutral", 3, now - Duration::days(10)),
            entry_at(user(2), "happy", 5, now),
        ];
        let series = build_daily_series(&entries, 14, &now).unwrap();
        assert_eq!(compute_volatility(&series), 1.41);
    }

    #[test]
    fn test_constant_mood_has_zero_volatility() {
        let now = reference_now();
        let entries: Vec<_> = (0..5)
            .map(|d| entry_at(user(1), "neutral", 3, now - Duration::days(d)))
            .collect();
        let series = build_daily_series(&entries, 7, &now).unwrap();
        assert_eq!(compute_volatility(&series), 0.0);
    }
}
