/// Heures arrondies au centième, sans zéros superflus : `8`, `7.5`, `0.3`.
pub(crate) fn format_hours(hours: f64) -> String {
    let rounded = (hours * 100.0).round() / 100.0;
    if rounded.fract() == 0.0 && rounded.abs() < 1e15 {
        let mut buf = itoa::Buffer::new();
        buf.format(rounded as i64).to_owned()
    } else if rounded.is_finite() {
        let text = format!("{rounded:.2}");
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        hours.to_string()
    }
}

pub(super) fn add_hours(acc: &mut [f64], day: u32, hours: f64) {
    if let Some(slot) = day.checked_sub(1).and_then(|i| acc.get_mut(i as usize)) {
        *slot += hours;
    }
}
