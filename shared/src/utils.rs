//! # Shared Utility Functions
//!
//! Formatting and input checks used by both the terminal and the web client.
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::{format_amount, format_percent};
//!
//! assert_eq!(format_amount(1234567.891), "1,234,567.89");
//! assert_eq!(format_percent(96.5), "96.50%");
//! ```

use chrono::DateTime;

use crate::error::ClientError;

/// Smallest amount the backend accepts for a bet or a deposit.
pub const MIN_AMOUNT: f64 = 0.01;

/// Format a number with comma separators and a fixed number of decimals.
///
/// ```rust
/// use shared::utils::format_number;
///
/// assert_eq!(format_number(1234567.89, 2), "1,234,567.89");
/// assert_eq!(format_number(-1500.0, 0), "-1,500");
/// ```
pub fn format_number(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.prec$}", value.abs(), prec = decimals);
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((integer, decimal)) => (integer, decimal),
        None => (formatted.as_str(), ""),
    };

    let mut grouped = String::new();
    for (i, ch) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let integer_with_commas: String = grouped.chars().rev().collect();

    let sign = if value < 0.0 && formatted.chars().any(|c| c != '0' && c != '.') {
        "-"
    } else {
        ""
    };

    if decimal_part.is_empty() {
        format!("{}{}", sign, integer_with_commas)
    } else {
        format!("{}{}.{}", sign, integer_with_commas, decimal_part)
    }
}

/// Money amount with two decimals.
pub fn format_amount(value: f64) -> String {
    format_number(value, 2)
}

/// Percentage with two decimals (`96.5` -> `"96.50%"`).
pub fn format_percent(value: f64) -> String {
    format!("{:.2}%", value)
}

/// Signed percentage difference (`1.25` -> `"+1.25%"`).
pub fn format_signed_percent(value: f64) -> String {
    if value >= 0.0 {
        format!("+{:.2}%", value)
    } else {
        format!("{:.2}%", value)
    }
}

/// Render epoch milliseconds as `YYYY-MM-DD HH:MM:SS` (UTC).
pub fn format_timestamp_millis(millis: i64) -> String {
    DateTime::from_timestamp_millis(millis)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// Reels joined for display.
pub fn format_reels(symbols: &[String]) -> String {
    symbols.join(" | ")
}

/// Check a bet or deposit amount before it is sent.
pub fn validate_amount(amount: f64) -> Result<f64, ClientError> {
    if !amount.is_finite() {
        return Err(ClientError::Validation("Amount must be a number".to_string()));
    }
    if amount < MIN_AMOUNT {
        return Err(ClientError::Validation(format!(
            "Amount must be at least {}",
            format_amount(MIN_AMOUNT)
        )));
    }
    Ok(amount)
}

/// Parse user-typed amount text.
pub fn parse_amount(input: &str) -> Result<f64, ClientError> {
    let amount = input
        .trim()
        .replace(',', "")
        .parse::<f64>()
        .map_err(|_| ClientError::Validation(format!("Invalid amount: {}", input.trim())))?;
    validate_amount(amount)
}

/// Check login/register fields before they are sent.
pub fn validate_credentials(username: &str, password: &str) -> Result<(), ClientError> {
    if username.trim().is_empty() {
        return Err(ClientError::Validation("Username is required".to_string()));
    }
    if password.is_empty() {
        return Err(ClientError::Validation("Password is required".to_string()));
    }
    Ok(())
}

/// Percent-encode a single path segment such as a game code.
pub fn encode_segment(segment: &str) -> String {
    urlencoding::encode(segment).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(1234567.89, 2), "1,234,567.89");
        assert_eq!(format_number(100.0, 2), "100.00");
        assert_eq!(format_number(999.999, 2), "1,000.00");
        assert_eq!(format_number(-0.001, 2), "0.00");
    }

    #[test]
    fn test_format_signed_percent() {
        assert_eq!(format_signed_percent(1.25), "+1.25%");
        assert_eq!(format_signed_percent(-3.5), "-3.50%");
    }

    #[test]
    fn test_format_timestamp_millis() {
        assert_eq!(format_timestamp_millis(0), "1970-01-01 00:00:00");
        assert_eq!(format_timestamp_millis(1_700_000_000_000), "2023-11-14 22:13:20");
    }

    #[test]
    fn test_validate_amount() {
        assert_eq!(validate_amount(0.01), Ok(0.01));
        assert!(validate_amount(0.0).is_err());
        assert!(validate_amount(-5.0).is_err());
        assert!(validate_amount(f64::NAN).is_err());
        assert!(validate_amount(f64::INFINITY).is_err());
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount(" 1,000.50 "), Ok(1000.5));
        assert!(matches!(parse_amount("ten"), Err(ClientError::Validation(_))));
    }

    #[test]
    fn test_validate_credentials() {
        assert!(validate_credentials("alice", "secret").is_ok());
        assert!(validate_credentials("  ", "secret").is_err());
        assert!(validate_credentials("alice", "").is_err());
    }

    #[test]
    fn test_encode_segment() {
        assert_eq!(encode_segment("0000"), "0000");
        assert_eq!(encode_segment("a/b c"), "a%2Fb%20c");
    }
}
