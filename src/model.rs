use crate::aggregator::AggregateError;
use crate::calendar;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Période de planification (année, mois 1..=12), triée par (année, mois).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPeriod")]
pub struct Period {
    year: i32,
    month: u32,
}

#[derive(Deserialize)]
struct RawPeriod {
    year: i32,
    month: u32,
}

impl TryFrom<RawPeriod> for Period {
    type Error = AggregateError;

    fn try_from(raw: RawPeriod) -> Result<Self, Self::Error> {
        Period::new(raw.year, raw.month)
    }
}

impl Period {
    /// Crée une période en validant le mois.
    pub fn new(year: i32, month: u32) -> Result<Self, AggregateError> {
        if !(1..=12).contains(&month) {
            return Err(AggregateError::InvalidMonth(month));
        }
        Ok(Self { year, month })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Nombre de jours du mois (années bissextiles comprises).
    pub fn days(&self) -> u32 {
        // le mois est validé à la construction
        calendar::days_in_month(self.year, self.month).unwrap_or(0)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for Period {
    type Err = AggregateError;

    /// Format `YYYY-MM`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || AggregateError::InvalidPeriod(s.to_string());
        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        Period::new(year, month)
    }
}

/// Identifiant fort pour un membre du personnel
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StaffId(String);

impl StaffId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Entrée journalière : créneau normal ou nouveauté (absence justifiée).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayRecord {
    pub day: u32,
    #[serde(default)]
    pub is_novelty: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attention_type_code: Option<String>,
    #[serde(default)]
    pub hours: f64,
}

impl DayRecord {
    /// Créneau normal avec son code d'attention.
    pub fn shift<C: Into<String>>(day: u32, code: C, hours: f64) -> Self {
        Self {
            day,
            is_novelty: false,
            attention_type_code: Some(code.into()),
            hours,
        }
    }

    /// Nouveauté avec son texte de justification.
    pub fn novelty<C: Into<String>>(day: u32, justification: C, hours: f64) -> Self {
        Self {
            day,
            is_novelty: true,
            attention_type_code: Some(justification.into()),
            hours,
        }
    }

    /// Code tel quel, sauf s'il est vide ou blanc.
    pub fn code(&self) -> Option<&str> {
        self.attention_type_code
            .as_deref()
            .filter(|c| !c.trim().is_empty())
    }

    /// Vérifie que le jour existe dans la période et que les heures sont valides.
    pub fn validate_for(&self, period: Period) -> Result<(), AggregateError> {
        if self.day == 0 || self.day > period.days() {
            return Err(AggregateError::DayOutOfRange {
                day: self.day,
                period,
            });
        }
        if !self.hours.is_finite() || self.hours < 0.0 {
            return Err(AggregateError::InvalidHours {
                day: self.day,
                hours: self.hours,
            });
        }
        Ok(())
    }
}

/// Membre du personnel et ses entrées pour la période active.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffMember {
    pub id: StaffId,
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub records: Vec<DayRecord>,
}

impl StaffMember {
    pub fn new<D: Into<String>>(id: StaffId, display_name: D) -> Self {
        Self {
            id,
            display_name: display_name.into(),
            records: Vec::new(),
        }
    }

    pub fn with_records(mut self, records: Vec<DayRecord>) -> Self {
        self.records = records;
        self
    }
}

/// Regroupement d'un jour : au plus un créneau normal, des nouveautés.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DayBucket {
    pub normal: Option<DayRecord>,
    pub novelties: Vec<DayRecord>,
}

/// Résultat matérialisé d'une requête (période, établissement, type de personnel).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleSnapshot {
    pub period: Period,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facility: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personnel_type: Option<String>,
    #[serde(default)]
    pub staff: Vec<StaffMember>,
}

impl ScheduleSnapshot {
    pub fn new(period: Period) -> Self {
        Self {
            period,
            facility: None,
            personnel_type: None,
            staff: Vec::new(),
        }
    }

    pub fn find_staff_by_id<'a>(&'a self, id: &StaffId) -> Option<&'a StaffMember> {
        self.staff.iter().find(|s| &s.id == id)
    }

    /// Toutes les entrées hors période, par membre.
    pub fn invalid_records(&self) -> Vec<(&StaffMember, &DayRecord, AggregateError)> {
        let mut out = Vec::new();
        for member in &self.staff {
            for record in &member.records {
                if let Err(err) = record.validate_for(self.period) {
                    out.push((member, record, err));
                }
            }
        }
        out
    }
}
