mod bucket;
mod duplicates;
mod grid;
mod period;
mod types;
pub(crate) mod util;

pub use bucket::{bucket_days, join_justifications, sum_hours_for_day, sum_novelty_hours};
pub use period::find_period;
pub use types::{
    AggregateError, AggregateOptions, Cell, DayHeader, DuplicateShift, GridLabels, GridRow,
    RowKind, ScheduleGrid,
};

use crate::io::{self, CsvExport};
use crate::model::{Period, StaffMember};

/// Lignes de la grille avec les libellés par défaut.
///
/// Pour chaque membre, dans l'ordre fourni : codes, heures, puis (si
/// `include_novelties`) justifications et heures de nouveautés. Une ligne de
/// totaux journaliers termine la séquence. Sans personnel : aucune ligne.
pub fn build_grid_rows(
    period: Period,
    staff: &[StaffMember],
    hours_per_shift: f64,
    include_novelties: bool,
) -> Vec<GridRow> {
    grid::build_rows(
        period,
        staff,
        hours_per_shift,
        include_novelties,
        &GridLabels::default(),
    )
}

pub fn build_grid(period: Period, staff: &[StaffMember], opts: &AggregateOptions) -> ScheduleGrid {
    grid::build_grid(period, staff, opts)
}

/// Membres ayant plusieurs créneaux normaux le même jour.
pub fn detect_duplicate_shifts(staff: &[StaffMember]) -> Vec<DuplicateShift> {
    duplicates::detect_duplicate_shifts(staff)
}

/// Agrégateur : options figées, grille et export CSV d'une période.
#[derive(Debug, Clone, Default)]
pub struct ScheduleAggregator {
    opts: AggregateOptions,
}

impl ScheduleAggregator {
    pub fn new(opts: AggregateOptions) -> Self {
        Self { opts }
    }

    pub fn options(&self) -> &AggregateOptions {
        &self.opts
    }

    pub fn grid(&self, period: Period, staff: &[StaffMember]) -> ScheduleGrid {
        #[cfg(feature = "logging")]
        tracing::debug!(
            %period,
            staff = staff.len(),
            include_novelties = self.opts.include_novelties,
            "building schedule grid"
        );
        grid::build_grid(period, staff, &self.opts)
    }

    pub fn to_csv(&self, period: Period, staff: &[StaffMember]) -> anyhow::Result<String> {
        let grid = self.grid(period, staff);
        io::to_csv(&grid.rows, period.days(), &self.opts.labels)
    }

    /// Contenu CSV et nom de fichier dérivé de `filename_template`.
    pub fn export(
        &self,
        period: Period,
        staff: &[StaffMember],
        filename_template: &str,
    ) -> anyhow::Result<CsvExport> {
        let grid = self.grid(period, staff);
        io::export_csv(&grid, &self.opts.labels, filename_template)
    }
}
