use crate::model::Period;

/// Cherche la période la plus proche parmi celles disponibles.
///
/// Ordre : correspondance exacte, puis (`fallback_year`, `month`), puis
/// (`year`, `fallback_month`), puis la première de l'année `year`, puis la
/// première du mois `month`.
pub fn find_period(
    periods: &[Period],
    year: i32,
    month: u32,
    fallback_year: Option<i32>,
    fallback_month: Option<u32>,
) -> Option<Period> {
    let matching = |y: i32, m: u32| {
        periods
            .iter()
            .find(|p| p.year() == y && p.month() == m)
            .copied()
    };

    matching(year, month)
        .or_else(|| fallback_year.and_then(|fy| matching(fy, month)))
        .or_else(|| fallback_month.and_then(|fm| matching(year, fm)))
        .or_else(|| periods.iter().find(|p| p.year() == year).copied())
        .or_else(|| periods.iter().find(|p| p.month() == month).copied())
}
