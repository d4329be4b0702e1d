use super::DuplicateShift;
use crate::model::StaffMember;
use std::collections::BTreeMap;

pub(super) fn detect_duplicate_shifts(staff: &[StaffMember]) -> Vec<DuplicateShift> {
    let mut out = Vec::new();

    for member in staff {
        let mut per_day: BTreeMap<u32, usize> = BTreeMap::new();
        for record in member.records.iter().filter(|r| !r.is_novelty) {
            *per_day.entry(record.day).or_default() += 1;
        }

        out.extend(
            per_day
                .into_iter()
                .filter(|(_, count)| *count > 1)
                .map(|(day, count)| DuplicateShift {
                    staff: member.id.clone(),
                    day,
                    count,
                }),
        );
    }

    out
}
