//! `DD/MM/YYYY` form handling and due-date display.
//!
//! The backend stores full ISO timestamps; the edit forms accept and show
//! `DD/MM/YYYY`. Parsing is strict: an invalid string fails validation, it
//! is never clamped to a nearby valid date.

use chrono::{Datelike, NaiveDate};

pub const MIN_YEAR: i32 = 1900;
pub const MAX_YEAR: i32 = 2100;

/// Field-level validation error, rendered next to the offending input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    #[error("Use the DD/MM/YYYY format")]
    Format,
    #[error("Day must be between 1 and 31")]
    Day,
    #[error("Month must be between 1 and 12")]
    Month,
    #[error("Year must be between {MIN_YEAR} and {MAX_YEAR}")]
    Year,
    #[error("That day does not exist in the given month")]
    Calendar,
}

/// Strict `DD/MM/YYYY` parse.
pub fn parse_dmy(input: &str) -> Result<NaiveDate, DateError> {
    let mut parts = input.trim().split('/');
    let (day, month, year) = match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(d), Some(m), Some(y), None) => (d, m, y),
        _ => return Err(DateError::Format),
    };
    let day: u32 = day.trim().parse().map_err(|_| DateError::Format)?;
    let month: u32 = month.trim().parse().map_err(|_| DateError::Format)?;
    let year: i32 = year.trim().parse().map_err(|_| DateError::Format)?;

    if !(1..=31).contains(&day) {
        return Err(DateError::Day);
    }
    if !(1..=12).contains(&month) {
        return Err(DateError::Month);
    }
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(DateError::Year);
    }
    NaiveDate::from_ymd_opt(year, month, day).ok_or(DateError::Calendar)
}

pub fn format_dmy(date: NaiveDate) -> String {
    format!("{:02}/{:02}/{:04}", date.day(), date.month(), date.year())
}

/// `DD/MM/YYYY` → the midnight UTC timestamp the backend expects.
pub fn dmy_to_iso(input: &str) -> Result<String, DateError> {
    let date = parse_dmy(input)?;
    Ok(format!(
        "{:04}-{:02}-{:02}T00:00:00.000Z",
        date.year(),
        date.month(),
        date.day()
    ))
}

/// The calendar date of an ISO timestamp (or bare `YYYY-MM-DD`) as
/// `DD/MM/YYYY`. Returns `None` when the string is not date-shaped.
pub fn iso_to_dmy(input: &str) -> Option<String> {
    let date = leading_date(input)?;
    Some(format_dmy(date))
}

/// Short human-readable date for table cells, e.g. `23 Jul 2025`.
/// Falls back to the raw string when it is not date-shaped.
pub fn display_short_date(input: &str) -> String {
    match leading_date(input) {
        Some(date) => date.format("%-d %b %Y").to_string(),
        None => input.to_string(),
    }
}

fn leading_date(input: &str) -> Option<NaiveDate> {
    let head = input.trim().get(..10)?;
    NaiveDate::parse_from_str(head, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_preserves_valid_dates() {
        for (d, m, y) in [
            (1, 1, 1900),
            (29, 2, 2024),
            (23, 7, 2025),
            (31, 12, 2100),
            (28, 2, 1900),
        ] {
            let date = NaiveDate::from_ymd_opt(y, m, d).unwrap();
            assert_eq!(parse_dmy(&format_dmy(date)), Ok(date));
        }
    }

    #[test]
    fn invalid_calendar_date_fails_instead_of_clamping() {
        assert_eq!(parse_dmy("31/02/2024"), Err(DateError::Calendar));
        assert_eq!(parse_dmy("29/02/2023"), Err(DateError::Calendar));
        assert_eq!(parse_dmy("31/04/2025"), Err(DateError::Calendar));
    }

    #[test]
    fn out_of_range_components_are_rejected() {
        assert_eq!(parse_dmy("00/05/2024"), Err(DateError::Day));
        assert_eq!(parse_dmy("32/05/2024"), Err(DateError::Day));
        assert_eq!(parse_dmy("15/00/2024"), Err(DateError::Month));
        assert_eq!(parse_dmy("15/13/2024"), Err(DateError::Month));
        assert_eq!(parse_dmy("15/05/1899"), Err(DateError::Year));
        assert_eq!(parse_dmy("15/05/2101"), Err(DateError::Year));
    }

    #[test]
    fn malformed_strings_are_rejected() {
        for s in ["", "2024-05-15", "15/05", "15/05/2024/1", "aa/bb/cccc"] {
            assert_eq!(parse_dmy(s), Err(DateError::Format), "input: {s:?}");
        }
    }

    #[test]
    fn iso_timestamp_display_and_writeback() {
        // Opening the edit modal on 2025-07-23T00:00:00Z shows 23/07/2025,
        // and saving it unchanged re-submits the same calendar date.
        let shown = iso_to_dmy("2025-07-23T00:00:00Z").unwrap();
        assert_eq!(shown, "23/07/2025");
        let saved = dmy_to_iso(&shown).unwrap();
        assert!(saved.starts_with("2025-07-23T"));
    }

    #[test]
    fn short_display_formats_dates_and_passes_through_other_text() {
        assert_eq!(display_short_date("2025-07-23T00:00:00Z"), "23 Jul 2025");
        assert_eq!(display_short_date("2025-01-05"), "5 Jan 2025");
        assert_eq!(display_short_date("soon"), "soon");
    }
}
