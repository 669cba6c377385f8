//! Data-entry form handling
//!
//! Converts raw form strings into the `/add-data` payload. Numeric fields
//! are read leniently (longest numeric prefix, otherwise NaN) and are not
//! validated here; the API owns validation and reports back through its
//! `{error}` body.

use crate::types::FormEntryPayload;
use crate::view::FormFields;

/// Lenient float parsing with browser `parseFloat` semantics.
///
/// Leading whitespace is skipped and the longest numeric prefix is used:
/// `"12abc"` is 12, `".5"` is 0.5, `"1e3x"` is 1000. Input without a numeric
/// prefix yields NaN.
pub fn parse_float(input: &str) -> f64 {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let len = bytes.len();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    if s[end..].starts_with("Infinity") {
        return if s.starts_with('-') { f64::NEG_INFINITY } else { f64::INFINITY };
    }

    let int_start = end;
    while end < len && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut mantissa_digits = end - int_start;

    if end < len && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < len && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        if mantissa_digits > 0 || frac_end > frac_start {
            mantissa_digits += frac_end - frac_start;
            end = frac_end;
        }
    }

    if mantissa_digits == 0 {
        return f64::NAN;
    }

    // Exponent only counts when it has digits
    if end < len && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < len && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let digits_start = exp_end;
        while exp_end < len && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > digits_start {
            end = exp_end;
        }
    }

    s[..end].parse().unwrap_or(f64::NAN)
}

impl FormEntryPayload {
    /// Build a fresh payload from the current form values
    pub fn from_fields(fields: &FormFields) -> Self {
        Self {
            date: fields.date.clone(),
            revenue: parse_float(&fields.revenue),
            expenses: parse_float(&fields.expenses),
            inventory_cost: parse_float(&fields.inventory),
            category: fields.category.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_numbers() {
        assert_eq!(parse_float("1500"), 1500.0);
        assert_eq!(parse_float("1500.25"), 1500.25);
        assert_eq!(parse_float("-42"), -42.0);
        assert_eq!(parse_float("+3.5"), 3.5);
        assert_eq!(parse_float("  7"), 7.0);
    }

    #[test]
    fn test_parse_prefixes() {
        assert_eq!(parse_float("12abc"), 12.0);
        assert_eq!(parse_float("5."), 5.0);
        assert_eq!(parse_float(".5"), 0.5);
        assert_eq!(parse_float("1e3x"), 1000.0);
        assert_eq!(parse_float("2e"), 2.0);
        assert_eq!(parse_float("2e+"), 2.0);
        assert_eq!(parse_float("1,234.50"), 1.0);
        assert_eq!(parse_float("-Infinity"), f64::NEG_INFINITY);
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        assert!(parse_float("").is_nan());
        assert!(parse_float("abc").is_nan());
        assert!(parse_float(".").is_nan());
        assert!(parse_float("-").is_nan());
        assert!(parse_float("$100").is_nan());
        assert!(parse_float("inf").is_nan());
        assert!(parse_float("NaN").is_nan());
    }

    #[test]
    fn test_payload_from_fields() {
        let fields = FormFields {
            date: "2026-03-01".into(),
            revenue: "2500".into(),
            expenses: "1800.5".into(),
            inventory: "".into(),
            category: "Retail".into(),
        };

        let payload = FormEntryPayload::from_fields(&fields);
        assert_eq!(payload.date, "2026-03-01");
        assert_eq!(payload.revenue, 2500.0);
        assert_eq!(payload.expenses, 1800.5);
        assert!(payload.inventory_cost.is_nan());
        assert_eq!(payload.category, "Retail");
    }
}
