use crate::core::error::ValidationError;
use chrono::{Local, NaiveDate};

/// Current local calendar date
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Number of days covered by `from..=to`, counting both endpoints.
///
/// An inverted range is reported as `InvalidDateRange` rather than
/// producing a zero or negative count.
pub fn day_count(from: NaiveDate, to: NaiveDate) -> Result<i64, ValidationError> {
    if to < from {
        return Err(ValidationError::InvalidDateRange);
    }

    Ok((to - from).num_days() + 1)
}

/// Display form used throughout the portal: `dd-mm-yyyy`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d-%m-%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_day_count_same_day() {
        assert_eq!(day_count(date(2026, 1, 15), date(2026, 1, 15)).unwrap(), 1);
    }

    #[test]
    fn test_day_count_inclusive() {
        assert_eq!(day_count(date(2026, 1, 15), date(2026, 1, 17)).unwrap(), 3);
        assert_eq!(day_count(date(2026, 1, 10), date(2026, 1, 14)).unwrap(), 5);
    }

    #[test]
    fn test_day_count_across_month_boundary() {
        assert_eq!(day_count(date(2026, 1, 30), date(2026, 2, 2)).unwrap(), 4);
        // 2028 is a leap year
        assert_eq!(day_count(date(2028, 2, 28), date(2028, 3, 1)).unwrap(), 3);
    }

    #[test]
    fn test_day_count_inverted_range() {
        let result = day_count(date(2026, 1, 17), date(2026, 1, 15));
        assert!(matches!(result, Err(ValidationError::InvalidDateRange)));
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(date(2026, 1, 5)), "05-01-2026");
        assert_eq!(format_date(date(2026, 12, 31)), "31-12-2026");
    }

    #[test]
    fn test_today_is_reasonable() {
        let now = today();
        assert!(now > date(2020, 1, 1));
        assert!(now < date(2100, 1, 1));
    }
}
