use super::bucket::{bucket_days, join_justifications, sum_novelty_hours};
use super::types::{Cell, DayHeader, GridLabels, GridRow, RowKind, ScheduleGrid};
use super::{util, AggregateOptions};
use crate::calendar;
use crate::model::{Period, StaffMember};

pub(super) fn build_grid(
    period: Period,
    staff: &[StaffMember],
    opts: &AggregateOptions,
) -> ScheduleGrid {
    let days = (1..=period.days())
        .map(|day| DayHeader {
            day,
            // tous les jours 1..=days() existent dans la période
            abbreviation: calendar::day_abbreviation(day, period.month(), period.year())
                .unwrap_or(""),
        })
        .collect();

    ScheduleGrid {
        period,
        days,
        rows: build_rows(
            period,
            staff,
            opts.hours_per_shift,
            opts.include_novelties,
            &opts.labels,
        ),
    }
}

pub(super) fn build_rows(
    period: Period,
    staff: &[StaffMember],
    hours_per_shift: f64,
    include_novelties: bool,
    labels: &GridLabels,
) -> Vec<GridRow> {
    if staff.is_empty() {
        return Vec::new();
    }

    let day_count = period.days();
    let mut day_totals = vec![0.0_f64; day_count as usize];
    let mut rows = Vec::with_capacity(staff.len() * 4 + 1);

    for member in staff {
        let buckets = bucket_days(&member.records);

        let mut codes = Vec::with_capacity(day_count as usize);
        let mut hours = Vec::with_capacity(day_count as usize);
        let mut justifications = Vec::new();
        let mut novelty_hours = Vec::new();

        for day in 1..=day_count {
            let bucket = buckets.get(&day);
            let normal = bucket.and_then(|b| b.normal.as_ref());

            codes.push(
                normal
                    .and_then(|r| r.code())
                    .map(|c| Cell::Text(c.to_string()))
                    .unwrap_or(Cell::Empty),
            );

            let shift_hours = if normal.is_some() { hours_per_shift } else { 0.0 };
            hours.push(Cell::Hours(shift_hours));
            util::add_hours(&mut day_totals, day, shift_hours);

            if include_novelties {
                let novelties = bucket.map(|b| b.novelties.as_slice()).unwrap_or(&[]);
                let text = join_justifications(novelties);
                justifications.push(if text.is_empty() {
                    Cell::Empty
                } else {
                    Cell::Text(text)
                });
                let extra = sum_novelty_hours(novelties);
                novelty_hours.push(Cell::Hours(extra));
                util::add_hours(&mut day_totals, day, extra);
            }
        }

        rows.push(GridRow {
            kind: RowKind::Shifts,
            staff: Some(member.id.clone()),
            label: member.display_name.clone(),
            cells: codes,
            total: Cell::Empty,
        });
        rows.push(hours_row(RowKind::Hours, member, &labels.hours, hours));

        if include_novelties {
            rows.push(GridRow {
                kind: RowKind::Justifications,
                staff: Some(member.id.clone()),
                label: labels.justification.clone(),
                cells: justifications,
                total: Cell::Empty,
            });
            rows.push(hours_row(
                RowKind::NoveltyHours,
                member,
                &labels.novelty_hours,
                novelty_hours,
            ));
        }
    }

    let grand_total: f64 = day_totals.iter().sum();
    rows.push(GridRow {
        kind: RowKind::DayTotals,
        staff: None,
        label: labels.day_totals.clone(),
        cells: day_totals.into_iter().map(Cell::Hours).collect(),
        total: Cell::Hours(grand_total),
    });

    rows
}

fn hours_row(kind: RowKind, member: &StaffMember, label: &str, cells: Vec<Cell>) -> GridRow {
    let total: f64 = cells.iter().filter_map(Cell::hours).sum();
    GridRow {
        kind,
        staff: Some(member.id.clone()),
        label: label.to_string(),
        cells,
        total: Cell::Hours(total),
    }
}
