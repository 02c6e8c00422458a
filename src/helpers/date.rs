//! Date helper functions

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};

/// Formats accepted in front-matter `date` fields
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y/%m/%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%Y.%m.%d", "%Y-%m"];

/// Parse a front-matter date into a sortable timestamp.
///
/// Returns `None` for anything unrecognised; callers decide where such
/// entries sort.
pub fn parse_date(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_utc());
    }

    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    for fmt in DATE_FORMATS {
        // `%Y-%m` has no day; pin it to the first
        let (input, fmt) = if *fmt == "%Y-%m" {
            (format!("{}-01", s), "%Y-%m-%d")
        } else {
            (s.to_string(), *fmt)
        };
        if let Ok(d) = NaiveDate::parse_from_str(&input, fmt) {
            return d.and_hms_opt(0, 0, 0);
        }
    }

    None
}

/// Render an RFC 3339 timestamp in local time, falling back to the input
pub fn display_timestamp(s: &str) -> String {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| {
            dt.with_timezone(&Local)
                .format("%Y-%m-%d %H:%M:%S")
                .to_string()
        })
        .unwrap_or_else(|_| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_formats() {
        let day = |y, m, d| {
            NaiveDate::from_ymd_opt(y, m, d)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap()
        };
        assert_eq!(parse_date("2025-11-02"), Some(day(2025, 11, 2)));
        assert_eq!(parse_date("2025/11/02"), Some(day(2025, 11, 2)));
        assert_eq!(parse_date("2025.11.2"), Some(day(2025, 11, 2)));
        assert_eq!(parse_date("2025-11"), Some(day(2025, 11, 1)));
        assert_eq!(
            parse_date("2025-11-02 10:30:00"),
            NaiveDate::from_ymd_opt(2025, 11, 2).unwrap().and_hms_opt(10, 30, 0)
        );
        assert_eq!(
            parse_date("2025-11-02T08:00:00+08:00"),
            Some(day(2025, 11, 2))
        );
    }

    #[test]
    fn test_parse_date_rejects_garbage() {
        assert_eq!(parse_date("未知"), None);
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("2025-13-45"), None);
    }

    #[test]
    fn test_display_timestamp_passthrough() {
        assert_eq!(display_timestamp("not a time"), "not a time");
        assert_eq!(display_timestamp("2025-11-02T00:00:00.000Z").len(), 19);
    }
}
