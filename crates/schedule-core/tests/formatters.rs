// File: crates/schedule-core/tests/formatters.rs
// Purpose: Date and money label formatting.

use schedule_core::{month_label, year_label, NumberFormat};

#[test]
fn month_and_year_labels() {
    assert_eq!(month_label("2025-03"), "03.2025");
    assert_eq!(year_label("2025-03"), "2025");
    // Full ISO dates from the calculator payload
    assert_eq!(month_label("2031-11-28"), "11.2031");
    assert_eq!(year_label("2031-11-28"), "2031");
}

#[test]
fn money_has_two_decimals_and_groups() {
    let f = NumberFormat::default();
    assert_eq!(f.money(0.0), "0.00");
    assert_eq!(f.money(0.5), "0.50");
    assert_eq!(f.money(999.999), "1 000.00");
    assert_eq!(f.money(1234567.891), "1 234 567.89");
    assert_eq!(f.money(-1500.0), "-1 500.00");
}

#[test]
fn money_rounds_the_stored_value() {
    let f = NumberFormat::default();
    // 1.115 and 2.675 are stored just below the half cent
    assert_eq!(f.money(1.115), "1.11");
    assert_eq!(f.money(2.675), "2.67");
    assert_eq!(f.money(1234.5678), "1 234.57");
    assert_eq!(f.money(-0.004), "0.00");
    assert_eq!(f.money(f64::INFINITY), "0.00");
    assert_eq!(f.money_with_currency(1.115), "1.11 ₽");
}

#[test]
fn axis_money_is_rounded_integer() {
    let f = NumberFormat::default();
    assert_eq!(f.money_axis(0.0), "0");
    assert_eq!(f.money_axis(1234.5), "1 235");
    assert_eq!(f.money_axis(987654.2), "987 654");
    assert_eq!(f.money_axis(f64::NAN), "0");
}

#[test]
fn locale_is_configurable() {
    let f = NumberFormat { group_separator: ',', decimal_separator: '.', currency_symbol: "$".into() };
    assert_eq!(f.money(1234.5), "1,234.50");
    assert_eq!(f.money_with_currency(1234.5), "1,234.50 $");

    let de = NumberFormat { group_separator: '.', decimal_separator: ',', currency_symbol: String::new() };
    assert_eq!(de.money(1234.5), "1.234,50");
    assert_eq!(de.money_with_currency(1234.5), "1.234,50");
}

#[test]
fn default_currency_suffix() {
    assert_eq!(NumberFormat::default().money_with_currency(2500.0), "2 500.00 ₽");
}
