use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Renders an ISO timestamp from the API as `YYYY-MM-DD`.
///
/// The backend emits naive UTC timestamps (`2025-01-02T09:30:00.123456`) but
/// offset-qualified values are accepted too. Unparseable input is returned as-is.
pub fn format_timestamp_date(raw: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.date_naive().format("%Y-%m-%d").to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.date().format("%Y-%m-%d").to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%Y-%m-%d").to_string();
    }
    raw.to_string()
}

pub fn format_day_count(days: i64) -> String {
    if days == 1 {
        "1 day".to_string()
    } else {
        format!("{} days", days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_naive_and_offset_timestamps() {
        assert_eq!(
            format_timestamp_date("2025-01-02T09:30:00.123456"),
            "2025-01-02"
        );
        assert_eq!(format_timestamp_date("2025-01-02T09:30:00"), "2025-01-02");
        assert_eq!(
            format_timestamp_date("2025-01-02T23:30:00+00:00"),
            "2025-01-02"
        );
        assert_eq!(format_timestamp_date("2025-03-04"), "2025-03-04");
    }

    #[test]
    fn unparseable_timestamp_is_passed_through() {
        assert_eq!(format_timestamp_date("yesterday"), "yesterday");
    }

    #[test]
    fn day_count_is_pluralised() {
        assert_eq!(format_day_count(1), "1 day");
        assert_eq!(format_day_count(3), "3 days");
        assert_eq!(format_day_count(0), "0 days");
    }
}
