use crate::error::{OrderReportError, Result};
use crate::reader::DEFAULT_SKIP_ROWS;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Persisted defaults. CLI flags override these; these override the
/// built-in defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory the timestamped default report name is written into.
    pub output_dir: Option<PathBuf>,
    /// Banner rows before the header row.
    #[serde(default = "default_skip_rows")]
    pub skip_rows: usize,
    /// Worksheet to read; the first sheet when unset.
    pub sheet: Option<String>,
}

fn default_skip_rows() -> usize {
    DEFAULT_SKIP_ROWS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: None,
            skip_rows: DEFAULT_SKIP_ROWS,
            sheet: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| OrderReportError::Config("home directory not found".into()))?;
        Ok(home.join(".config").join("order-report").join("config.json"))
    }

    pub fn set_output_dir(&mut self, dir: PathBuf) -> Result<()> {
        self.output_dir = Some(dir);
        self.save()
    }
}
