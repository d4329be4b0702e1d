#![forbid(unsafe_code)]
use turnos::{day_abbreviation, days_in_month, month_name, AggregateError, Period};

#[test]
fn february_follows_leap_years() {
    assert_eq!(days_in_month(2024, 2).unwrap(), 29);
    assert_eq!(days_in_month(2025, 2).unwrap(), 28);
    assert_eq!(days_in_month(1900, 2).unwrap(), 28);
    assert_eq!(days_in_month(2000, 2).unwrap(), 29);
    assert_eq!(days_in_month(2025, 4).unwrap(), 30);
    assert_eq!(days_in_month(2025, 12).unwrap(), 31);
}

#[test]
fn invalid_month_is_rejected() {
    assert_eq!(days_in_month(2025, 0), Err(AggregateError::InvalidMonth(0)));
    assert_eq!(days_in_month(2025, 13), Err(AggregateError::InvalidMonth(13)));
    assert!(Period::new(2025, 13).is_err());
}

#[test]
fn day_letters_are_sunday_first() {
    // 2024-01-07 est un dimanche
    let week: Vec<_> = (7..=13)
        .map(|d| day_abbreviation(d, 1, 2024).unwrap())
        .collect();
    assert_eq!(week, ["D", "L", "M", "M", "J", "V", "S"]);
}

#[test]
fn day_letters_repeat_every_week() {
    for day in 1..=24 {
        assert_eq!(
            day_abbreviation(day, 3, 2025).unwrap(),
            day_abbreviation(day + 7, 3, 2025).unwrap()
        );
    }
}

#[test]
fn day_letter_rejects_impossible_dates() {
    assert!(matches!(
        day_abbreviation(30, 2, 2024),
        Err(AggregateError::InvalidDate { day: 30, .. })
    ));
}

#[test]
fn month_names_are_lowercase_spanish() {
    assert_eq!(month_name(1).unwrap(), "enero");
    assert_eq!(month_name(9).unwrap(), "septiembre");
    assert!(month_name(0).is_err());
}

#[test]
fn period_parses_and_orders() {
    let a: Period = "2024-12".parse().unwrap();
    let b: Period = "2025-01".parse().unwrap();
    assert!(a < b);
    assert_eq!(a.to_string(), "2024-12");
    assert!("2025".parse::<Period>().is_err());
    assert!("2025-00".parse::<Period>().is_err());
}
