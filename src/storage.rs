use crate::model::ScheduleSnapshot;
use anyhow::Context;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

pub trait SnapshotStore {
    /// Charge un snapshot depuis un support.
    fn load(&self) -> anyhow::Result<ScheduleSnapshot>;
    /// Sauvegarde de manière atomique.
    fn save(&self, snapshot: &ScheduleSnapshot) -> anyhow::Result<()>;
}

/// Destination des exports (l'équivalent d'un « enregistrer sous »).
pub trait ExportSink {
    fn write(&self, file_name: &str, contents: &str) -> anyhow::Result<PathBuf>;
}

pub struct JsonSnapshotStore {
    path: PathBuf,
}

impl JsonSnapshotStore {
    pub fn open<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        Ok(Self {
            path: path.as_ref().to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStore for JsonSnapshotStore {
    fn load(&self) -> anyhow::Result<ScheduleSnapshot> {
        let data =
            fs::read(&self.path).with_context(|| format!("reading {}", self.path.display()))?;
        let snapshot: ScheduleSnapshot = serde_json::from_slice(&data)
            .with_context(|| format!("parsing {}", self.path.display()))?;
        Ok(snapshot)
    }

    fn save(&self, snapshot: &ScheduleSnapshot) -> anyhow::Result<()> {
        let json = serde_json::to_vec_pretty(snapshot)?;
        write_atomic(&self.path, &json)
    }
}

/// Écrit les exports dans un répertoire, un fichier par export.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }
}

impl ExportSink for DirectorySink {
    fn write(&self, file_name: &str, contents: &str) -> anyhow::Result<PathBuf> {
        if file_name.is_empty() || file_name.contains(['/', '\\']) {
            anyhow::bail!("invalid export file name: {file_name:?}");
        }
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("creating export directory {}", self.dir.display()))?;
        let path = self.dir.join(file_name);
        write_atomic(&path, contents.as_bytes())?;
        #[cfg(feature = "logging")]
        tracing::info!(path = %path.display(), bytes = contents.len(), "export written");
        Ok(path)
    }
}

fn write_atomic(path: &Path, data: &[u8]) -> anyhow::Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(parent).with_context(|| "creating temp file")?;
    tmp.write_all(data)?;
    tmp.flush()?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).with_context(|| "atomic rename")?;
    Ok(())
}
