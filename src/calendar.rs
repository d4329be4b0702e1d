use crate::aggregator::AggregateError;
use chrono::{Datelike, NaiveDate};

/// Initiales des jours, dimanche en premier. Mardi et mercredi partagent `M`.
const DAY_LETTERS: [&str; 7] = ["D", "L", "M", "M", "J", "V", "S"];

const MONTH_NAMES: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

/// Nombre de jours du mois selon le calendrier grégorien.
pub fn days_in_month(year: i32, month: u32) -> Result<u32, AggregateError> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Ok(31),
        4 | 6 | 9 | 11 => Ok(30),
        2 if is_leap_year(year) => Ok(29),
        2 => Ok(28),
        _ => Err(AggregateError::InvalidMonth(month)),
    }
}

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Initiale du jour de la semaine pour une date du calendrier.
pub fn day_abbreviation(day: u32, month: u32, year: i32) -> Result<&'static str, AggregateError> {
    let date = NaiveDate::from_ymd_opt(year, month, day)
        .ok_or(AggregateError::InvalidDate { year, month, day })?;
    let idx = date.weekday().num_days_from_sunday() as usize;
    Ok(DAY_LETTERS[idx])
}

/// Nom du mois en minuscules, pour les noms de fichiers.
pub fn month_name(month: u32) -> Result<&'static str, AggregateError> {
    month
        .checked_sub(1)
        .and_then(|idx| MONTH_NAMES.get(idx as usize))
        .copied()
        .ok_or(AggregateError::InvalidMonth(month))
}
