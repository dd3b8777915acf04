use anyhow::Result;
use chrono::{DateTime, Local, NaiveDate};
use chrono_english::{parse_date_string, Dialect};

const ISO_DATE: &str = "%Y-%m-%d";

/// Parses a user-supplied day, relative to today in local time.
pub fn parse_date(date_str: &str) -> Result<NaiveDate> {
    parse_date_relative_to(date_str, Local::now())
}

pub fn parse_date_relative_to(date_str: &str, now: DateTime<Local>) -> Result<NaiveDate> {
    let trimmed = date_str.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, ISO_DATE) {
        return Ok(date);
    }
    parse_date_string(trimmed, now, Dialect::Us)
        .map(|dt| dt.date_naive())
        .map_err(|e| anyhow::anyhow!("Failed to parse date '{}': {}", date_str, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Local> {
        // Wednesday
        Local.with_ymd_and_hms(2024, 1, 3, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_iso_date() {
        assert_eq!(
            parse_date_relative_to("2024-02-29", now()).unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
    }

    #[test]
    fn test_relative_words() {
        assert_eq!(
            parse_date_relative_to("today", now()).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 3).unwrap()
        );
        assert_eq!(
            parse_date_relative_to("tomorrow", now()).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 4).unwrap()
        );
    }

    #[test]
    fn test_garbage_is_an_error() {
        assert!(parse_date_relative_to("not-a-date", now()).is_err());
    }
}
