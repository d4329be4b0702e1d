use crate::aggregator::{GridLabels, GridRow, ScheduleGrid};
use crate::calendar;
use crate::model::{DayRecord, Period, StaffId, StaffMember};
use anyhow::{anyhow, bail, Context};
use csv::{QuoteStyle, ReaderBuilder, Terminator, WriterBuilder};
use std::collections::HashMap;
use std::path::Path;

/// Clé de regroupement à l'import : identifiant explicite ou, à défaut, nom affiché.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum StaffKey {
    Id(String),
    Name(String),
}

pub const DEFAULT_FILENAME_TEMPLATE: &str = "turnos_{{month}}_{{year}}.csv";

/// Export prêt à être enregistré : nom de fichier et contenu CSV.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvExport {
    pub file_name: String,
    pub contents: String,
}

/// Rendu CSV : en-tête `Profesional,1..N,Total Horas` puis une ligne par `GridRow`.
///
/// Tous les champs sont entre guillemets, les guillemets internes doublés,
/// lignes séparées par `\n` sans terminateur final.
pub fn to_csv(rows: &[GridRow], days: u32, labels: &GridLabels) -> anyhow::Result<String> {
    let mut w = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    let mut header = Vec::with_capacity(days as usize + 2);
    header.push(labels.professional.clone());
    let mut buf = itoa::Buffer::new();
    header.extend((1..=days).map(|d| buf.format(d).to_owned()));
    header.push(labels.total_hours.clone());
    w.write_record(&header)?;

    for row in rows {
        let mut record = Vec::with_capacity(row.cells.len() + 2);
        record.push(row.label.clone());
        record.extend(row.cells.iter().map(ToString::to_string));
        record.push(row.total.to_string());
        w.write_record(&record)
            .with_context(|| format!("writing csv row {}", row.label))?;
    }

    let bytes = w
        .into_inner()
        .map_err(|err| anyhow!("flushing csv buffer: {}", err.error()))?;
    let mut out = String::from_utf8(bytes).context("csv output is not utf-8")?;
    if out.ends_with('\n') {
        out.pop();
    }
    Ok(out)
}

/// Nom de fichier : `{{month}}` → mois en minuscules, `{{year}}` → année.
pub fn render_filename(template: &str, period: Period) -> String {
    let month = calendar::month_name(period.month()).unwrap_or_default();
    template
        .replace("{{month}}", month)
        .replace("{{year}}", &period.year().to_string())
}

pub fn export_csv(
    grid: &ScheduleGrid,
    labels: &GridLabels,
    filename_template: &str,
) -> anyhow::Result<CsvExport> {
    let contents = to_csv(&grid.rows, grid.days.len() as u32, labels)?;
    Ok(CsvExport {
        file_name: render_filename(filename_template, grid.period),
        contents,
    })
}

/// Import d'entrées journalières depuis CSV:
/// header `staff_id,display_name,day,is_novelty,attention_type_code,hours`
///
/// Les lignes d'un même membre sont regroupées dans l'ordre d'apparition.
pub fn import_records_csv<P: AsRef<Path>>(
    path: P,
    period: Period,
) -> anyhow::Result<Vec<StaffMember>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;
    let mut out: Vec<StaffMember> = Vec::new();
    let mut index: HashMap<StaffKey, usize> = HashMap::new();

    for rec in rdr.records() {
        let rec = rec?;
        let line = rec.position().map(|p| p.line()).unwrap_or(0);
        let staff_id = rec.get(0).unwrap_or("").trim();
        let display = rec.get(1).context("missing display_name")?.trim();
        if display.is_empty() {
            bail!("invalid record on line {line}: empty display_name");
        }
        let day: u32 = rec
            .get(2)
            .context("missing day")?
            .trim()
            .parse()
            .with_context(|| format!("invalid day on line {line}"))?;
        let is_novelty = match rec.get(3).map(str::trim) {
            Some(flag) if !flag.is_empty() => parse_bool(flag)
                .with_context(|| format!("invalid is_novelty value on line {line}"))?,
            _ => false,
        };
        let code = rec
            .get(4)
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string);
        let hours = match rec.get(5).map(str::trim) {
            Some(h) if !h.is_empty() => h
                .parse::<f64>()
                .with_context(|| format!("invalid hours on line {line}"))?,
            _ => 0.0,
        };

        let record = DayRecord {
            day,
            is_novelty,
            attention_type_code: code,
            hours,
        };
        record
            .validate_for(period)
            .with_context(|| format!("invalid record on line {line}"))?;

        let key = if staff_id.is_empty() {
            StaffKey::Name(display.to_string())
        } else {
            StaffKey::Id(staff_id.to_string())
        };
        let pos = *index.entry(key).or_insert_with(|| {
            let id = if staff_id.is_empty() {
                StaffId::random()
            } else {
                StaffId::new(staff_id)
            };
            out.push(StaffMember::new(id, display));
            out.len() - 1
        });
        out[pos].records.push(record);
    }

    #[cfg(feature = "logging")]
    tracing::info!(staff = out.len(), %period, "imported day records");

    Ok(out)
}

fn parse_bool(s: &str) -> anyhow::Result<bool> {
    match s.to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" | "si" | "sí" => Ok(true),
        "false" | "0" | "no" | "n" => Ok(false),
        _ => bail!("expected boolean"),
    }
}
