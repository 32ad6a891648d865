//! Permissive numeric coercion for user-typed form input.

/// Parses a decimal from raw text, if the text holds a finite number.
pub fn parse_decimal(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Coerces raw text to a non-negative decimal, falling back on empty,
/// non-numeric, or negative input. Mirrors forgiving spreadsheet-like
/// editing: this path never errors.
pub fn parse_non_negative_or(raw: &str, fallback: f64) -> f64 {
    match parse_decimal(raw) {
        Some(value) if value >= 0.0 => value,
        _ => fallback,
    }
}
