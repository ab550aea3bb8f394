//! Input validation helpers
//!
//! Centralized text length constants and validation functions shared by
//! reference-data records, rooms and form submission.

use rust_decimal::Decimal;
use shared::error::{AppError, ErrorCode};

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: room type, amenity, area, view type, etc.
pub const MAX_NAME_LEN: usize = 200;

/// Descriptions and deletion reasons
pub const MAX_NOTE_LEN: usize = 500;

/// Short identifiers: room numbers, meal plan codes
pub const MAX_SHORT_TEXT_LEN: usize = 32;

/// URLs / image paths
pub const MAX_URL_LEN: usize = 2048;

/// Upper bound for percentage surcharges
pub const MAX_PERCENTAGE: Decimal = Decimal::ONE_HUNDRED;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::required(field));
    }
    validate_text_len(value, field, max_len)
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value {
        validate_text_len(v, field, max_len)?;
    }
    Ok(())
}

/// Validate the length of a possibly empty string.
pub fn validate_text_len(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.len() > max_len {
        return Err(AppError::invalid_field(
            field,
            format!("{field} is too long ({} chars, max {max_len})", value.len()),
        ));
    }
    Ok(())
}

/// Validate that a count (capacity and the like) is a positive integer.
pub fn validate_positive(value: u32, field: &str) -> Result<(), AppError> {
    if value == 0 {
        return Err(AppError::with_message(
            ErrorCode::ValueOutOfRange,
            format!("{field} must be a positive integer"),
        )
        .with_detail("field", field));
    }
    Ok(())
}

/// Validate that a money amount is not negative.
pub fn validate_non_negative(value: Decimal, field: &str) -> Result<(), AppError> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(AppError::with_message(
            ErrorCode::ValueOutOfRange,
            format!("{field} must not be negative"),
        )
        .with_detail("field", field));
    }
    Ok(())
}

/// Validate that a percentage lies in `0..=100`.
pub fn validate_percentage(value: Decimal, field: &str) -> Result<(), AppError> {
    validate_non_negative(value, field)?;
    if value > MAX_PERCENTAGE {
        return Err(AppError::with_message(
            ErrorCode::ValueOutOfRange,
            format!("{field} must not exceed 100%"),
        )
        .with_detail("field", field));
    }
    Ok(())
}

/// Validate a list of names: no blank entries, no duplicates.
pub fn validate_name_list(values: &[String], field: &str) -> Result<(), AppError> {
    for (i, v) in values.iter().enumerate() {
        validate_required_text(v, field, MAX_NAME_LEN)?;
        if values[..i].contains(v) {
            return Err(AppError::invalid_field(
                field,
                format!("{field} contains '{v}' more than once"),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_text() {
        assert!(validate_required_text("Suite", "name", MAX_NAME_LEN).is_ok());

        let err = validate_required_text("   ", "name", MAX_NAME_LEN).unwrap_err();
        assert_eq!(err.code, ErrorCode::RequiredField);

        let long = "x".repeat(MAX_NAME_LEN + 1);
        let err = validate_required_text(&long, "name", MAX_NAME_LEN).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.detail("field").unwrap(), "name");
    }

    #[test]
    fn test_optional_text() {
        assert!(validate_optional_text(&None, "image_url", MAX_URL_LEN).is_ok());
        assert!(validate_optional_text(&Some("a".into()), "image_url", 1).is_ok());
        assert!(validate_optional_text(&Some("ab".into()), "image_url", 1).is_err());
    }

    #[test]
    fn test_positive() {
        assert!(validate_positive(1, "capacity").is_ok());
        let err = validate_positive(0, "capacity").unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);
    }

    #[test]
    fn test_money_and_percentage() {
        assert!(validate_non_negative(Decimal::ZERO, "price").is_ok());
        assert!(validate_non_negative(Decimal::new(-1, 2), "price").is_err());
        assert!(validate_percentage(Decimal::new(100, 0), "surcharge").is_ok());
        assert!(validate_percentage(Decimal::new(10001, 2), "surcharge").is_err());
    }

    #[test]
    fn test_name_list() {
        let ok = vec!["Wi-Fi".to_string(), "Safe".to_string()];
        assert!(validate_name_list(&ok, "amenities").is_ok());

        let dup = vec!["Wi-Fi".to_string(), "Wi-Fi".to_string()];
        assert!(validate_name_list(&dup, "amenities").is_err());

        let blank = vec![" ".to_string()];
        assert!(validate_name_list(&blank, "amenities").is_err());
    }
}
