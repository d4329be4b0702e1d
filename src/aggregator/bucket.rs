use crate::model::{DayBucket, DayRecord};
use std::collections::BTreeMap;

/// Regroupe les entrées par jour. Un créneau normal écrase le précédent du même jour.
pub fn bucket_days(records: &[DayRecord]) -> BTreeMap<u32, DayBucket> {
    let mut out: BTreeMap<u32, DayBucket> = BTreeMap::new();
    for record in records {
        let bucket = out.entry(record.day).or_default();
        if record.is_novelty {
            bucket.novelties.push(record.clone());
        } else {
            bucket.normal = Some(record.clone());
        }
    }
    out
}

/// Somme des heures du jour `day` ; les nouveautés comptent seulement si demandé.
pub fn sum_hours_for_day(records: &[DayRecord], day: u32, include_novelties: bool) -> f64 {
    records
        .iter()
        .filter(|r| r.day == day && (include_novelties || !r.is_novelty))
        .map(|r| r.hours)
        .sum()
}

pub fn sum_novelty_hours(novelties: &[DayRecord]) -> f64 {
    novelties.iter().map(|r| r.hours).sum()
}

/// Justifications non vides jointes par ` / `.
pub fn join_justifications(novelties: &[DayRecord]) -> String {
    novelties
        .iter()
        .filter_map(DayRecord::code)
        .collect::<Vec<_>>()
        .join(" / ")
}
