//! Snapshot file I/O
//!
//! Snapshots are read from JSON or YAML, chosen by file extension. Writes go
//! through a temp file and a rename so a crash never leaves a half-written
//! snapshot behind.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::{PaydayError, PaydayResult};
use crate::models::UserSnapshot;

/// Serialization format of a snapshot file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotFormat {
    Json,
    Yaml,
}

impl SnapshotFormat {
    /// Pick the format from the file extension
    pub fn from_path(path: &Path) -> PaydayResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match ext.as_deref() {
            Some("json") => Ok(Self::Json),
            Some("yaml") | Some("yml") => Ok(Self::Yaml),
            _ => Err(PaydayError::Validation(format!(
                "Unsupported snapshot file '{}': expected .json, .yaml or .yml",
                path.display()
            ))),
        }
    }
}

/// A file holding either one snapshot or a list of them
#[derive(Deserialize)]
#[serde(untagged)]
enum SnapshotFile {
    Many(Vec<UserSnapshot>),
    One(Box<UserSnapshot>),
}

/// Read every snapshot in a file
pub fn read_snapshots<P: AsRef<Path>>(path: P) -> PaydayResult<Vec<UserSnapshot>> {
    let path = path.as_ref();
    let format = SnapshotFormat::from_path(path)?;

    let file = File::open(path)
        .map_err(|e| PaydayError::Io(format!("Failed to open {}: {}", path.display(), e)))?;
    let reader = BufReader::new(file);

    let parsed: SnapshotFile = match format {
        SnapshotFormat::Json => serde_json::from_reader(reader)
            .map_err(|e| PaydayError::Json(format!("Failed to parse {}: {}", path.display(), e)))?,
        SnapshotFormat::Yaml => serde_yaml::from_reader(reader)
            .map_err(|e| PaydayError::Yaml(format!("Failed to parse {}: {}", path.display(), e)))?,
    };

    let snapshots = match parsed {
        SnapshotFile::Many(list) => list,
        SnapshotFile::One(single) => vec![*single],
    };
    debug!(path = %path.display(), count = snapshots.len(), "loaded snapshots");

    Ok(snapshots)
}

/// Read a file expected to hold exactly one snapshot
pub fn read_snapshot<P: AsRef<Path>>(path: P) -> PaydayResult<UserSnapshot> {
    let path = path.as_ref();
    let mut snapshots = read_snapshots(path)?;

    if snapshots.len() != 1 {
        return Err(PaydayError::Validation(format!(
            "Expected one snapshot in {}, found {}",
            path.display(),
            snapshots.len()
        )));
    }

    Ok(snapshots.remove(0))
}

/// Write a snapshot atomically (write to temp, then rename)
pub fn write_snapshot_atomic<P: AsRef<Path>>(path: P, snapshot: &UserSnapshot) -> PaydayResult<()> {
    let path = path.as_ref();
    let format = SnapshotFormat::from_path(path)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            PaydayError::Io(format!("Failed to create directory {}: {}", parent.display(), e))
        })?;
    }

    let mut temp_name = path.as_os_str().to_os_string();
    temp_name.push(".tmp");
    let temp_path = std::path::PathBuf::from(temp_name);

    let file = File::create(&temp_path)
        .map_err(|e| PaydayError::Io(format!("Failed to create temp file: {}", e)))?;
    let mut writer = BufWriter::new(file);

    match format {
        SnapshotFormat::Json => serde_json::to_writer_pretty(&mut writer, snapshot)?,
        SnapshotFormat::Yaml => serde_yaml::to_writer(&mut writer, snapshot)?,
    }

    writer.flush()?;
    writer.get_ref().sync_all()?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        PaydayError::Io(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}
