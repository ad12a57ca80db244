use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use builder_engine::ProgressSettings;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use thiserror::Error;

use super::logging::LogDestination;

const SETTINGS_FILENAME: &str = ".builder_settings.ron";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("could not access {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not parse {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
    #[error("could not serialize settings: {0}")]
    Serialize(#[from] ron::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub tick_interval_ms: u64,
    pub log_destination: LogDestination,
    pub log_level: String,
    /// Generator output to open when no path is given on the command line.
    pub project_path: Option<PathBuf>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            tick_interval_ms: 3000,
            log_destination: LogDestination::default(),
            log_level: "info".to_string(),
            project_path: None,
        }
    }
}

impl AppSettings {
    pub fn progress_settings(&self) -> ProgressSettings {
        ProgressSettings::with_interval(Duration::from_millis(self.tick_interval_ms))
    }

    /// Unknown level names fall back to `Info`.
    pub fn level_filter(&self) -> LevelFilter {
        LevelFilter::from_str(&self.log_level).unwrap_or(LevelFilter::Info)
    }
}

pub fn settings_path(dir: &Path) -> PathBuf {
    dir.join(SETTINGS_FILENAME)
}

/// A missing file yields defaults; anything unreadable is an error so the
/// caller can report it once logging is up.
pub fn load_settings(dir: &Path) -> Result<AppSettings, SettingsError> {
    let path = settings_path(dir);
    let content = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Ok(AppSettings::default());
        }
        Err(source) => return Err(SettingsError::Io { path, source }),
    };

    ron::from_str(&content).map_err(|source| SettingsError::Parse { path, source })
}

pub fn save_settings(dir: &Path, settings: &AppSettings) -> Result<PathBuf, SettingsError> {
    let content = ron::ser::to_string_pretty(settings, ron::ser::PrettyConfig::new())?;
    let target = settings_path(dir);
    let io_err = |source: io::Error| SettingsError::Io {
        path: target.clone(),
        source,
    };

    // Write beside the target and rename so readers never see a torn file.
    let mut tmp = NamedTempFile::new_in(dir).map_err(io_err)?;
    tmp.write_all(content.as_bytes()).map_err(io_err)?;
    tmp.flush().map_err(io_err)?;
    tmp.persist(&target).map_err(|err| io_err(err.error))?;
    Ok(target)
}
