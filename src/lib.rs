#![forbid(unsafe_code)]
//! Turnos — agrégation des plannings mensuels du personnel hospitalier.
//!
//! - Regroupement par jour : créneaux normaux et nouveautés (absences justifiées).
//! - Grille d'affichage et totaux journaliers.
//! - Export CSV (toujours entre guillemets) et nom de fichier dérivé de la période.
//! - Calcul pur en mémoire ; les entrées/sorties restent dans `io` et `storage`.

pub mod aggregator;
pub mod calendar;
pub mod io;
pub mod model;
pub mod storage;

pub use aggregator::{
    bucket_days, build_grid, build_grid_rows, detect_duplicate_shifts, find_period,
    join_justifications, sum_hours_for_day, sum_novelty_hours, AggregateError, AggregateOptions,
    Cell, DuplicateShift, GridLabels, GridRow, RowKind, ScheduleAggregator, ScheduleGrid,
};
pub use calendar::{day_abbreviation, days_in_month, month_name};
pub use io::{render_filename, to_csv, CsvExport, DEFAULT_FILENAME_TEMPLATE};
pub use model::{DayBucket, DayRecord, Period, ScheduleSnapshot, StaffId, StaffMember};
pub use storage::{DirectorySink, ExportSink, JsonSnapshotStore, SnapshotStore};
