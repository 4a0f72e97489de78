// File: crates/schedule-core/tests/input.rs
// Purpose: Live digit grouping of numeric inputs and the installment toggle.

use schedule_core::{format_with_spaces, parse_amount, RateField};

#[test]
fn groups_digits_with_spaces() {
    assert_eq!(format_with_spaces("1234567"), "1 234 567");
    assert_eq!(format_with_spaces("1234567.89"), "1 234 567.89");
    assert_eq!(format_with_spaces(""), "");
    assert_eq!(format_with_spaces("1,5"), "1.5");
}

#[test]
fn reformatting_is_stable() {
    let once = format_with_spaces("9876543,21");
    assert_eq!(once, "9 876 543.21");
    assert_eq!(format_with_spaces(&once), once);
    assert_eq!(parse_amount(&once).unwrap(), 9876543.21);
}

#[test]
fn installment_mode_clears_and_disables_rate() {
    let mut rate = RateField { value: "12.5".into(), ..RateField::default() };
    assert!(rate.required && !rate.disabled);

    rate.set_installment_mode(true);
    assert_eq!(rate.value, "");
    assert!(rate.disabled);
    assert!(!rate.required);

    rate.set_installment_mode(false);
    assert_eq!(rate.value, "");
    assert!(!rate.disabled);
    assert!(rate.required);
}
