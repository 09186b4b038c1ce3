//! Validation for to-do entries submitted through the main page form.

use chrono::{NaiveDate, NaiveDateTime, TimeZone, Utc};

use crate::error::CoreError;
use crate::types::Timestamp;

/// Longest accepted to-do text, in characters.
pub const MAX_CONTENT_LENGTH: usize = 500;

/// Formats accepted for the due date. The first is what a browser's
/// `datetime-local` input submits.
const DUE_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

/// Trim and check the to-do text.
pub fn validate_content(raw: &str) -> Result<String, CoreError> {
    let content = raw.trim();
    if content.is_empty() {
        return Err(CoreError::Validation("Die Aufgabe darf nicht leer sein.".into()));
    }
    if content.chars().count() > MAX_CONTENT_LENGTH {
        return Err(CoreError::Validation(format!(
            "Die Aufgabe darf höchstens {MAX_CONTENT_LENGTH} Zeichen lang sein."
        )));
    }
    Ok(content.to_string())
}

/// Parse a due date from form input. Times are taken as UTC; a bare date
/// means midnight.
pub fn parse_due(raw: &str) -> Result<Timestamp, CoreError> {
    parse_timestamp(raw)
        .ok_or_else(|| CoreError::Validation("Ungültiges Fälligkeitsdatum.".into()))
}

/// Parse a form timestamp in any of the accepted formats, as UTC.
pub(crate) fn parse_timestamp(raw: &str) -> Option<Timestamp> {
    let raw = raw.trim();

    let naive = DUE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })?;

    Some(Utc.from_utc_datetime(&naive))
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use chrono::{Datelike, Timelike};

    use super::*;

    #[test]
    fn test_content_is_trimmed() {
        assert_eq!(validate_content("  Training buchen ").unwrap(), "Training buchen");
    }

    #[test]
    fn test_blank_content_is_rejected() {
        assert_matches!(validate_content("   "), Err(CoreError::Validation(_)));
    }

    #[test]
    fn test_overlong_content_is_rejected() {
        let raw = "x".repeat(MAX_CONTENT_LENGTH + 1);
        assert_matches!(validate_content(&raw), Err(CoreError::Validation(_)));
        assert!(validate_content(&"x".repeat(MAX_CONTENT_LENGTH)).is_ok());
    }

    #[test]
    fn test_datetime_local_input_parses() {
        let due = parse_due("2024-05-01T14:30").unwrap();
        assert_eq!((due.year(), due.month(), due.day()), (2024, 5, 1));
        assert_eq!((due.hour(), due.minute()), (14, 30));
    }

    #[test]
    fn test_bare_date_is_midnight() {
        let due = parse_due("2024-05-01").unwrap();
        assert_eq!((due.hour(), due.minute(), due.second()), (0, 0, 0));
    }

    #[test]
    fn test_garbage_due_is_rejected() {
        assert_matches!(parse_due("tomorrow"), Err(CoreError::Validation(_)));
        assert_matches!(parse_due(""), Err(CoreError::Validation(_)));
    }
}
