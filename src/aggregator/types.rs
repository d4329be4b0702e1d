use super::util::format_hours;
use crate::model::{Period, StaffId};
use std::fmt;
use thiserror::Error;

/// Libellés de la grille et de l'en-tête CSV.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridLabels {
    pub professional: String,
    pub total_hours: String,
    pub hours: String,
    pub justification: String,
    pub novelty_hours: String,
    pub day_totals: String,
}

impl Default for GridLabels {
    fn default() -> Self {
        Self {
            professional: "Profesional".into(),
            total_hours: "Total Horas".into(),
            hours: "Horas".into(),
            justification: "Justificación".into(),
            novelty_hours: "Horas novedad".into(),
            day_totals: "Total horas por día".into(),
        }
    }
}

/// Options d'agrégation
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateOptions {
    pub hours_per_shift: f64,
    pub include_novelties: bool,
    pub labels: GridLabels,
}

impl Default for AggregateOptions {
    fn default() -> Self {
        Self {
            hours_per_shift: 8.0,
            include_novelties: false,
            labels: GridLabels::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Shifts,
    Hours,
    Justifications,
    NoveltyHours,
    DayTotals,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Hours(f64),
}

impl Cell {
    pub fn hours(&self) -> Option<f64> {
        match self {
            Cell::Hours(h) => Some(*h),
            _ => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => Ok(()),
            Cell::Text(s) => f.write_str(s),
            Cell::Hours(h) => f.write_str(&format_hours(*h)),
        }
    }
}

/// Ligne de la grille : un libellé, une cellule par jour, un total.
#[derive(Debug, Clone, PartialEq)]
pub struct GridRow {
    pub kind: RowKind,
    /// `None` pour la ligne des totaux journaliers.
    pub staff: Option<StaffId>,
    pub label: String,
    pub cells: Vec<Cell>,
    pub total: Cell,
}

impl GridRow {
    /// Cellule du jour `day` (1-indexé).
    pub fn cell(&self, day: u32) -> Option<&Cell> {
        day.checked_sub(1).and_then(|i| self.cells.get(i as usize))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayHeader {
    pub day: u32,
    pub abbreviation: &'static str,
}

/// Grille d'affichage complète d'une période.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleGrid {
    pub period: Period,
    pub days: Vec<DayHeader>,
    pub rows: Vec<GridRow>,
}

impl ScheduleGrid {
    pub fn day_totals(&self) -> Option<&GridRow> {
        self.rows.iter().rev().find(|r| r.kind == RowKind::DayTotals)
    }
}

/// Plusieurs créneaux normaux le même jour pour un même membre.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateShift {
    pub staff: StaffId,
    pub day: u32,
    pub count: usize,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AggregateError {
    #[error("invalid month: {0} (expected 1..=12)")]
    InvalidMonth(u32),
    #[error("invalid date: {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },
    #[error("invalid period: {0} (expected YYYY-MM)")]
    InvalidPeriod(String),
    #[error("day {day} out of range for period {period}")]
    DayOutOfRange { day: u32, period: Period },
    #[error("invalid hours on day {day}: {hours}")]
    InvalidHours { day: u32, hours: f64 },
}
