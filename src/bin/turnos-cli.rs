#![forbid(unsafe_code)]
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};
use turnos::{
    aggregator::{self, AggregateOptions, GridLabels, ScheduleAggregator, ScheduleGrid},
    io,
    model::{Period, ScheduleSnapshot},
    storage::{DirectorySink, ExportSink, JsonSnapshotStore, SnapshotStore},
};

/// CLI de consultation et d'export des plannings mensuels
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Fichier JSON du snapshot (période + personnel)
    #[arg(long, global = true, default_value = "snapshot.json")]
    snapshot: String,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(clap::Args, Debug)]
struct GridArgs {
    /// Heures comptées par créneau normal
    #[arg(long, default_value_t = 8.0)]
    hours_per_shift: f64,
    /// Affiche les lignes de nouveautés (justifications et heures)
    #[arg(long)]
    novelties: bool,
}

impl GridArgs {
    fn options(&self) -> Result<AggregateOptions> {
        if !self.hours_per_shift.is_finite() || self.hours_per_shift < 0.0 {
            bail!("--hours-per-shift must be a non-negative number");
        }
        Ok(AggregateOptions {
            hours_per_shift: self.hours_per_shift,
            include_novelties: self.novelties,
            ..AggregateOptions::default()
        })
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Construire un snapshot depuis un CSV d'entrées journalières
    Import {
        #[arg(long)]
        csv: String,
        /// Période YYYY-MM
        #[arg(long)]
        period: Period,
        #[arg(long)]
        facility: Option<String>,
        #[arg(long)]
        personnel_type: Option<String>,
    },

    /// Afficher la grille du mois
    Grid {
        #[command(flatten)]
        grid: GridArgs,
    },

    /// Exporter la grille en CSV
    Export {
        #[command(flatten)]
        grid: GridArgs,
        #[arg(long, default_value = ".")]
        out_dir: String,
        /// `{{month}}` et `{{year}}` sont remplacés
        #[arg(long, default_value = io::DEFAULT_FILENAME_TEMPLATE)]
        filename_template: String,
    },

    /// Vérifier les doublons et les jours hors période
    Check,

    /// Choisir la période disponible la plus proche
    Period {
        /// liste "YYYY-MM,YYYY-MM,..."
        #[arg(long)]
        available: String,
        #[arg(long)]
        year: i32,
        #[arg(long)]
        month: u32,
        #[arg(long)]
        fallback_year: Option<i32>,
        #[arg(long)]
        fallback_month: Option<u32>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let store = JsonSnapshotStore::open(&cli.snapshot)?;

    let code = match cli.cmd {
        Commands::Import {
            csv,
            period,
            facility,
            personnel_type,
        } => {
            let staff = io::import_records_csv(&csv, period)?;
            let snapshot = ScheduleSnapshot {
                period,
                facility,
                personnel_type,
                staff,
            };
            store.save(&snapshot)?;
            println!(
                "{} staff member(s) imported for {} into {}",
                snapshot.staff.len(),
                period,
                store.path().display()
            );
            0
        }
        Commands::Grid { grid } => {
            let snapshot = store.load()?;
            let aggregator = ScheduleAggregator::new(grid.options()?);
            let grid = aggregator.grid(snapshot.period, &snapshot.staff);
            print!("{}", render_table(&grid, &aggregator.options().labels));
            0
        }
        Commands::Export {
            grid,
            out_dir,
            filename_template,
        } => {
            let snapshot = store.load()?;
            let aggregator = ScheduleAggregator::new(grid.options()?);
            let export = aggregator.export(snapshot.period, &snapshot.staff, &filename_template)?;
            let sink = DirectorySink::new(&out_dir);
            let path = sink.write(&export.file_name, &export.contents)?;
            println!("{}", path.display());
            0
        }
        Commands::Check => {
            let snapshot = store.load()?;
            let duplicates = aggregator::detect_duplicate_shifts(&snapshot.staff);
            let invalid = snapshot.invalid_records();
            if duplicates.is_empty() && invalid.is_empty() {
                println!("OK: no issues");
                0
            } else {
                for d in &duplicates {
                    let name = snapshot
                        .find_staff_by_id(&d.staff)
                        .map(|s| s.display_name.as_str())
                        .unwrap_or("-");
                    eprintln!(
                        "duplicate shift: {} ({}) day {} has {} normal records",
                        name,
                        d.staff.as_str(),
                        d.day,
                        d.count
                    );
                }
                for (member, _, err) in &invalid {
                    eprintln!("invalid record: {} ({}): {}", member.display_name, member.id.as_str(), err);
                }
                eprintln!("Found {} issue(s)", duplicates.len() + invalid.len());
                // Code 2 = WARNING
                2
            }
        }
        Commands::Period {
            available,
            year,
            month,
            fallback_year,
            fallback_month,
        } => {
            let periods = available
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(|s| s.parse::<Period>().with_context(|| format!("invalid period {s}")))
                .collect::<Result<Vec<_>>>()?;
            match aggregator::find_period(&periods, year, month, fallback_year, fallback_month) {
                Some(p) => {
                    println!("{p}");
                    0
                }
                None => {
                    println!("none");
                    2
                }
            }
        }
    };

    std::process::exit(code);
}

/// Tableau texte aligné : en-tête jours + initiales, puis une ligne par `GridRow`.
fn render_table(grid: &ScheduleGrid, labels: &GridLabels) -> String {
    let mut lines: Vec<Vec<String>> = Vec::with_capacity(grid.rows.len() + 2);

    let mut days = vec![labels.professional.clone()];
    days.extend(grid.days.iter().map(|d| d.day.to_string()));
    days.push(labels.total_hours.clone());
    lines.push(days);

    let mut letters = vec![String::new()];
    letters.extend(grid.days.iter().map(|d| d.abbreviation.to_string()));
    letters.push(String::new());
    lines.push(letters);

    for row in &grid.rows {
        let mut line = vec![row.label.clone()];
        line.extend(row.cells.iter().map(ToString::to_string));
        line.push(row.total.to_string());
        lines.push(line);
    }

    let columns = lines.iter().map(Vec::len).max().unwrap_or(0);
    let widths: Vec<usize> = (0..columns)
        .map(|c| {
            lines
                .iter()
                .filter_map(|l| l.get(c))
                .map(|s| s.chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    for line in &lines {
        let cells: Vec<String> = line
            .iter()
            .enumerate()
            .map(|(i, cell)| format!("{:<width$}", cell, width = widths[i]))
            .collect();
        out.push_str(cells.join(" | ").trim_end());
        out.push('\n');
    }
    out
}
