use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use inspector_core::DEFAULT_WAIT;
use inspector_engine::DEFAULT_SERVICE_URL;
use inspector_logging::LogDestination;
use log::LevelFilter;
use serde::{Deserialize, Serialize};

pub(crate) const CONFIG_FILENAME: &str = "inspector.ron";

#[derive(Debug, thiserror::Error)]
pub(crate) enum ConfigError {
    #[error("failed to read {path:?}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: ron::error::SpannedError,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct InspectorConfig {
    pub service_url: String,
    /// Use the script endpoint when no script option is given.
    pub lua_enabled: bool,
    pub wait: f64,
    pub max_response_bytes: u64,
    pub artifact_dir: Option<PathBuf>,
    pub log_destination: LogDestination,
    pub log_level: String,
}

impl Default for InspectorConfig {
    fn default() -> Self {
        Self {
            service_url: DEFAULT_SERVICE_URL.to_string(),
            lua_enabled: false,
            wait: DEFAULT_WAIT,
            max_response_bytes: 64 * 1024 * 1024,
            artifact_dir: None,
            log_destination: LogDestination::Terminal,
            log_level: "info".to_string(),
        }
    }
}

impl InspectorConfig {
    /// Unknown level names fall back to `Info`.
    pub fn level_filter(&self) -> LevelFilter {
        LevelFilter::from_str(&self.log_level).unwrap_or(LevelFilter::Info)
    }
}

/// Reads the configuration file. A missing file is not an error.
pub(crate) fn load(path: Option<&Path>) -> Result<InspectorConfig, ConfigError> {
    let path = path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILENAME));
    let content = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Ok(InspectorConfig::default());
        }
        Err(source) => return Err(ConfigError::Read { path, source }),
    };
    ron::from_str(&content).map_err(|source| ConfigError::Parse { path, source })
}
