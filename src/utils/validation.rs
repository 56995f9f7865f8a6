use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;
use utoipa::ToSchema;

/// Upper bound for free-text fields such as `reason` and `comment`.
pub const MAX_TEXT_LEN: usize = 500;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FieldError {
    #[schema(example = "end_date", value_type = String)]
    pub field: &'static str,
    #[schema(example = "end_date cannot be before start_date")]
    pub message: String,
}

/// Every field that failed validation for a single payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field,
            message: message.into(),
        });
    }

    /// Collects the result of a single field check.
    pub fn check<T>(&mut self, field: &'static str, result: Result<T, String>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(message) => {
                self.push(field, message);
                None
            }
        }
    }

    #[cfg(test)]
    pub fn has_field(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages = self
            .errors
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "{}", messages)
    }
}

impl std::error::Error for ValidationError {}

/// Trims `value` and rejects it if nothing is left.
pub fn non_blank(value: &str, message: &str) -> Result<String, String> {
    let cleaned = value.trim();
    if cleaned.is_empty() {
        return Err(message.to_string());
    }
    Ok(cleaned.to_string())
}

/// Length is counted in characters, not bytes.
pub fn max_chars(field: &str, value: Option<&str>, max: usize) -> Result<(), String> {
    match value {
        Some(v) if v.chars().count() > max => Err(format!(
            "{} must be at most {} characters",
            field, max
        )),
        _ => Ok(()),
    }
}

pub fn min_id(field: &str, value: u64, min: u64) -> Result<u64, String> {
    if value < min {
        return Err(format!(
            "{} must be greater than or equal to {}",
            field, min
        ));
    }
    Ok(value)
}

pub fn date_order(start: NaiveDate, end: NaiveDate) -> Result<(), String> {
    if end < start {
        return Err("end_date cannot be before start_date".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[rstest]
    #[case("Ann", Ok("Ann".to_string()))]
    #[case("  Ann  ", Ok("Ann".to_string()))]
    #[case("", Err("empty".to_string()))]
    #[case(" \t\n", Err("empty".to_string()))]
    fn non_blank_trims_and_rejects_whitespace(
        #[case] input: &str,
        #[case] expected: Result<String, String>,
    ) {
        assert_eq!(non_blank(input, "empty"), expected);
    }

    #[test]
    fn max_chars_counts_characters() {
        let exact = "é".repeat(MAX_TEXT_LEN);
        assert!(max_chars("reason", Some(&exact), MAX_TEXT_LEN).is_ok());

        let over = "a".repeat(MAX_TEXT_LEN + 1);
        let err = max_chars("reason", Some(&over), MAX_TEXT_LEN).unwrap_err();
        assert_eq!(err, "reason must be at most 500 characters");

        assert!(max_chars("reason", None, MAX_TEXT_LEN).is_ok());
    }

    #[rstest]
    #[case("2024-01-10", "2024-01-12", true)]
    #[case("2024-01-10", "2024-01-10", true)]
    #[case("2024-01-10", "2024-01-09", false)]
    fn date_order_allows_same_day(#[case] start: &str, #[case] end: &str, #[case] ok: bool) {
        assert_eq!(date_order(date(start), date(end)).is_ok(), ok);
    }

    #[test]
    fn min_id_rejects_zero() {
        assert_eq!(min_id("employee_id", 1, 1), Ok(1));
        assert!(min_id("employee_id", 0, 1).is_err());
    }

    #[test]
    fn collects_every_failing_field() {
        let mut errors = ValidationError::default();
        errors.check("a", Err::<(), _>("first".to_string()));
        errors.check("b", Ok::<_, String>(()));
        errors.check("c", Err::<(), _>("second".to_string()));

        assert!(errors.has_field("a"));
        assert!(!errors.has_field("b"));
        assert_eq!(errors.to_string(), "a: first; c: second");
        assert!(!errors.is_empty());
    }
}
