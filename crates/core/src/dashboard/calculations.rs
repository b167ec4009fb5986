//! Dashboard arithmetic.

use chrono::NaiveDate;

use crate::constants::SLA_TOLERANCE_POINTS;
use crate::dashboard::dashboard_model::ProgressSample;

/// Rounds to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// `part / total` as a percentage with two decimals; zero when there is no total.
pub fn utilization_rate(part: f64, total: f64) -> f64 {
    if total > 0.0 {
        round2(part / total * 100.0)
    } else {
        0.0
    }
}

/// Mean of the values, rounded to two decimals. Zero for an empty slice.
pub fn average(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    round2(values.iter().sum::<f64>() / values.len() as f64)
}

/// Progress a project should have reached by `today`, interpolated linearly
/// in days between its start and end dates. Not clamped: before the start it
/// is negative, after the end it exceeds 100.
pub fn expected_progress(start: NaiveDate, end: NaiveDate, today: NaiveDate) -> f64 {
    let span = (end - start).num_days();
    if span <= 0 {
        return if today >= end { 100.0 } else { 0.0 };
    }
    let elapsed = (today - start).num_days();
    elapsed as f64 * 100.0 / span as f64
}

pub fn is_sla_breach(sample: &ProgressSample, today: NaiveDate) -> bool {
    let expected = expected_progress(sample.start_date, sample.end_date, today);
    f64::from(sample.progress_percent) < expected - SLA_TOLERANCE_POINTS
}

pub fn count_sla_breaches(samples: &[ProgressSample], today: NaiveDate) -> usize {
    samples.iter().filter(|s| is_sla_breach(s, today)).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample(progress: i32) -> ProgressSample {
        ProgressSample {
            project_id: 1,
            progress_percent: progress,
            start_date: date(2024, 1, 1),
            end_date: date(2024, 4, 10),
        }
    }

    #[test]
    fn utilization_rounds_and_guards_zero_total() {
        assert_eq!(utilization_rate(1.0, 3.0), 33.33);
        assert_eq!(utilization_rate(2.0, 3.0), 66.67);
        assert_eq!(utilization_rate(5.0, 0.0), 0.0);
        assert_eq!(utilization_rate(5.0, -1.0), 0.0);
    }

    #[test]
    fn average_of_empty_is_zero() {
        assert_eq!(average(&[]), 0.0);
        assert_eq!(average(&[45.0, 60.0, 30.0]), 45.0);
        assert_eq!(average(&[10.0, 20.0, 20.0]), 16.67);
    }

    #[test]
    fn expected_progress_is_linear_in_days() {
        let start = date(2024, 1, 1);
        let end = date(2024, 4, 10); // 100 days
        assert_eq!(expected_progress(start, end, date(2024, 2, 20)), 50.0);
        assert_eq!(expected_progress(start, end, date(2024, 4, 10)), 100.0);
        assert!(expected_progress(start, end, date(2023, 12, 22)) < 0.0);
        assert!(expected_progress(start, end, date(2024, 5, 20)) > 100.0);
    }

    #[test]
    fn zero_length_window_is_all_or_nothing() {
        let day = date(2024, 6, 1);
        assert_eq!(expected_progress(day, day, day), 100.0);
        assert_eq!(expected_progress(day, day, date(2024, 5, 31)), 0.0);
    }

    #[test]
    fn breach_needs_more_than_tolerance() {
        let mut s = sample(40);
        let today = date(2024, 2, 20); // expected 50

        assert!(!is_sla_breach(&s, today));
        s.progress_percent = 39;
        assert!(is_sla_breach(&s, today));

        let samples = vec![s.clone(), ProgressSample { progress_percent: 80, ..s }];
        assert_eq!(count_sla_breaches(&samples, today), 1);
    }
}
