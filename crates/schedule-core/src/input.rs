// File: crates/schedule-core/src/input.rs
// Summary: Numeric input helpers (live digit grouping, amount parsing) and the installment toggle.

use crate::error::{ChartError, ChartResult};
use crate::format::group_digits;

/// Live-format a numeric field: whitespace dropped, `,` read as the decimal
/// point, integer digits grouped by three with a space.
///
/// A trailing `.` is kept so the user can keep typing the fraction.
pub fn format_with_spaces(raw: &str) -> String {
    let mut int_part = String::new();
    let mut frac_part = String::new();
    let mut seen_point = false;
    for ch in raw.chars() {
        match ch {
            '0'..='9' if seen_point => frac_part.push(ch),
            '0'..='9' => int_part.push(ch),
            '.' | ',' if !seen_point => seen_point = true,
            _ => {}
        }
    }
    let mut out = group_digits(&int_part, ' ');
    if seen_point {
        out.push('.');
        out.push_str(&frac_part);
    }
    out
}

/// Parse a user-entered amount such as `"1 234,5"`. Blank input is zero.
pub fn parse_amount(raw: &str) -> ChartResult<f64> {
    let cleaned: String = raw
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == ',' { '.' } else { c })
        .collect();
    if cleaned.is_empty() {
        return Ok(0.0);
    }
    cleaned
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ChartError::InvalidInput(raw.to_string()))
}

/// The interest-rate field paired with the installment toggle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RateField {
    pub value: String,
    pub required: bool,
    pub disabled: bool,
}

impl Default for RateField {
    fn default() -> Self {
        Self { value: String::new(), required: true, disabled: false }
    }
}

impl RateField {
    /// Installment mode on: the rate is cleared and locked. Off: editable and required again.
    pub fn set_installment_mode(&mut self, on: bool) {
        if on {
            self.value.clear();
        }
        self.disabled = on;
        self.required = !on;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ignores_letters_and_extra_points() {
        assert_eq!(format_with_spaces("12a34"), "1 234");
        assert_eq!(format_with_spaces("1.2.3"), "1.23");
        assert_eq!(format_with_spaces("1 000 000"), "1 000 000");
        assert_eq!(format_with_spaces("12."), "12.");
    }

    #[test]
    fn parses_grouped_amounts() {
        assert_eq!(parse_amount("1 234,5").unwrap(), 1234.5);
        assert_eq!(parse_amount("  ").unwrap(), 0.0);
        assert!(parse_amount("12abc").is_err());
    }
}
