//! User configuration (`config.toml`).
//!
//! ```toml
//! [evaluation]
//! empty_cells = "zero"   # or "reject"
//! ```

use cellgrid_engine::engine::{EmptyCellPolicy, EvalOptions};
use directories::ProjectDirs;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::{CellgridError, Result};

const MAX_CONFIG_FILE_BYTES: u64 = 1_048_576; // 1 MiB

#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub evaluation: EvaluationConfig,
}

#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EvaluationConfig {
    #[serde(default)]
    pub empty_cells: EmptyCellPolicy,
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Read and parse a config file, refusing oversized files.
    pub fn read(path: &Path) -> Result<Self> {
        let size = std::fs::metadata(path)?.len();
        if size > MAX_CONFIG_FILE_BYTES {
            return Err(CellgridError::ConfigTooLarge {
                path: path.to_path_buf(),
                size,
                max: MAX_CONFIG_FILE_BYTES,
            });
        }
        Self::from_toml_str(&std::fs::read_to_string(path)?)
    }

    pub fn eval_options(&self) -> EvalOptions {
        EvalOptions {
            empty_cells: self.evaluation.empty_cells,
        }
    }
}

/// Load configuration from `config_file`, or from the user config directory.
///
/// Never fails: problems are returned as warnings and defaults are used.
/// A missing user config is not worth a warning; a missing explicit file is.
pub fn load_config(config_file: Option<&Path>) -> (Config, Vec<String>) {
    let mut warnings = Vec::new();
    let Some(path) = config_file.map(Path::to_path_buf).or_else(user_config_path) else {
        return (Config::default(), warnings);
    };

    if !path.exists() {
        if config_file.is_some() {
            warnings.push(format!("Config file not found: {}", path.display()));
        }
        return (Config::default(), warnings);
    }

    match Config::read(&path) {
        Ok(config) => {
            tracing::debug!(path = %path.display(), ?config, "loaded config");
            (config, warnings)
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "ignoring config");
            warnings.push(format!("Failed to load {}: {}", path.display(), err));
            (Config::default(), warnings)
        }
    }
}

pub fn user_config_path() -> Option<PathBuf> {
    let proj = ProjectDirs::from("", "", "cellgrid")?;
    let mut path = proj.config_dir().to_path_buf();
    path.push("config.toml");
    Some(path)
}
