//! Number → result text.
//!
//! The shortest decimal that parses back to the same `f64`. Magnitudes at
//! or above `1e21` or below `1e-6` switch to exponent notation (`1e21`,
//! `1.5e-7`), matching the thresholds calculator users expect. Negative
//! zero prints as `0`.

/// Lower bound (inclusive) for plain decimal notation.
const PLAIN_MIN: f64 = 1e-6;
/// Upper bound (exclusive) for plain decimal notation.
const PLAIN_MAX: f64 = 1e21;

/// Format a finite result for display and history.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let magnitude = value.abs();
    if (PLAIN_MIN..PLAIN_MAX).contains(&magnitude) {
        format!("{value}")
    } else {
        format!("{value:e}")
    }
}
