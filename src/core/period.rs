//! Calendar helpers for target dates.
//!
//! All helpers degrade gracefully: a missing date yields zero days rather
//! than an error.

use chrono::{NaiveDate, Utc};

/// Signed day count from `from` to `to`.
#[must_use]
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

/// Days from today until `target`. Negative once the date has passed; zero
/// when no date is set.
#[must_use]
pub fn days_until(target: Option<NaiveDate>) -> i64 {
    target.map_or(0, |date| days_between(Utc::now().date_naive(), date))
}

/// Days elapsed since `date`. Negative for future dates; zero when no date
/// is set.
#[must_use]
pub fn days_since(date: Option<NaiveDate>) -> i64 {
    date.map_or(0, |date| days_between(date, Utc::now().date_naive()))
}

/// Humanized label for a day count: "today", days, weeks, or months, with
/// past counts rendered as "N days ago".
#[must_use]
pub fn describe_period(days: i64) -> String {
    match days {
        0 => "today".to_string(),
        1 => "1 day".to_string(),
        d if d < 0 => format!("{} days ago", d.abs()),
        d if d < 7 => format!("{d} days"),
        d if d < 30 => {
            let weeks = d / 7;
            if weeks == 1 {
                "1 week".to_string()
            } else {
                format!("{weeks} weeks")
            }
        }
        d => {
            let months = d / 30;
            if months == 1 {
                "1 month".to_string()
            } else {
                format!("{months} months")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_days_between_is_signed() {
        let a = NaiveDate::from_ymd_opt(2026, 8, 1).unwrap();
        let b = NaiveDate::from_ymd_opt(2026, 8, 31).unwrap();
        assert_eq!(days_between(a, b), 30);
        assert_eq!(days_between(b, a), -30);
        assert_eq!(days_between(a, a), 0);
    }

    #[test]
    fn test_missing_dates_yield_zero() {
        assert_eq!(days_until(None), 0);
        assert_eq!(days_since(None), 0);
    }

    #[test]
    fn test_days_until_far_future_is_positive() {
        let far = Utc::now().date_naive() + chrono::Duration::days(365);
        assert_eq!(days_until(Some(far)), 365);
        assert_eq!(days_since(Some(far)), -365);
    }

    #[test]
    fn test_describe_period_buckets() {
        assert_eq!(describe_period(0), "today");
        assert_eq!(describe_period(1), "1 day");
        assert_eq!(describe_period(5), "5 days");
        assert_eq!(describe_period(7), "1 week");
        assert_eq!(describe_period(20), "2 weeks");
        assert_eq!(describe_period(30), "1 month");
        assert_eq!(describe_period(95), "3 months");
        assert_eq!(describe_period(-3), "3 days ago");
    }
}
