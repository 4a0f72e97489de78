// File: crates/schedule-core/src/format.rs
// Summary: Pure label formatters for dates and money amounts.

use serde::{Deserialize, Serialize};

/// Number locale used by axis labels and tooltips.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumberFormat {
    pub group_separator: char,
    pub decimal_separator: char,
    pub currency_symbol: String,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            group_separator: ' ',
            decimal_separator: '.',
            currency_symbol: "₽".to_string(),
        }
    }
}

impl NumberFormat {
    /// `#,##0.00`: thousands grouping, always two fractional digits.
    ///
    /// Rounds the stored binary value, so `1.115` (really `1.11499...`) prints as `1.11`.
    pub fn money(&self, value: f64) -> String {
        let value = if value.is_finite() { value } else { 0.0 };
        let fixed = format!("{:.2}", value.abs());
        let (whole, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
        let is_zero = whole.bytes().chain(frac.bytes()).all(|b| b == b'0');
        let mut out = String::with_capacity(fixed.len() + whole.len() / 3 + 1);
        if value < 0.0 && !is_zero {
            out.push('-');
        }
        out.push_str(&group_digits(whole, self.group_separator));
        out.push(self.decimal_separator);
        out.push_str(frac);
        out
    }

    /// `#,##0`: grouped, no fractional digits. Rounds half away from zero.
    pub fn money_axis(&self, value: f64) -> String {
        let rounded = value.round();
        let rounded = if rounded.is_finite() { rounded } else { 0.0 };
        let negative = rounded < 0.0;
        let digits = (rounded.abs() as u128).to_string();
        let grouped = group_digits(&digits, self.group_separator);
        if negative && digits != "0" { format!("-{grouped}") } else { grouped }
    }

    /// Money amount followed by the currency symbol, as shown in tooltips.
    pub fn money_with_currency(&self, value: f64) -> String {
        if self.currency_symbol.is_empty() {
            self.money(value)
        } else {
            format!("{} {}", self.money(value), self.currency_symbol)
        }
    }
}

/// Insert `separator` between every group of three digits, counting from the right.
pub fn group_digits(digits: &str, separator: char) -> String {
    let len = digits.chars().count();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}

fn year_month(iso_date: &str) -> (&str, &str) {
    let mut parts = iso_date.trim().split('-');
    let year = parts.next().unwrap_or("");
    let month = parts.next().unwrap_or("");
    (year, month)
}

/// `"2025-03"` (or `"2025-03-14"`) to `"03.2025"`.
pub fn month_label(iso_date: &str) -> String {
    let (year, month) = year_month(iso_date);
    match month.parse::<u32>() {
        Ok(m) => format!("{m:02}.{year}"),
        Err(_) => format!("{month}.{year}"),
    }
}

/// `"2025-03"` to `"2025"`.
pub fn year_label(iso_date: &str) -> String {
    year_month(iso_date).0.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_from_the_right() {
        assert_eq!(group_digits("1", ' '), "1");
        assert_eq!(group_digits("123", ' '), "123");
        assert_eq!(group_digits("1234", ' '), "1 234");
        assert_eq!(group_digits("1234567", ','), "1,234,567");
    }

    #[test]
    fn negative_zero_has_no_sign() {
        let f = NumberFormat::default();
        assert_eq!(f.money(-0.001), "0.00");
        assert_eq!(f.money_axis(-0.2), "0");
    }
}
