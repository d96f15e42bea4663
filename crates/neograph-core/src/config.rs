//! Solver configuration
//!
//! Read from `--config <path>` when given, otherwise from `config.toml` in
//! `$NEOGRAPH_CONFIG_DIR` or the platform config directory (`neograph/`).
//! A missing default file means built-in defaults.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{GraphError, Result};
use tracing::debug;

pub use types::{
    CanvasConfig, SolverConfig, DEFAULT_BUCKET_COUNT, DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH,
    DEFAULT_ITERATIONS,
};

const CONFIG_DIR: &str = "neograph";
const CONFIG_FILE: &str = "config.toml";
pub const CONFIG_DIR_ENV_VAR: &str = "NEOGRAPH_CONFIG_DIR";

impl SolverConfig {
    /// Default location of the configuration file
    pub fn config_path() -> Result<PathBuf> {
        // Allow environment variable override for testing
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    GraphError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load and validate configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            GraphError::Other(format!(
                "failed to read config from {}: {}",
                path.display(),
                e
            ))
        })?;
        let config: SolverConfig = toml::from_str(&content)?;
        config.validate()?;
        debug!(path = %path.display(), strategy = %config.strategy, "loaded config");
        Ok(config)
    }

    /// Load from `explicit` if given (it must exist), else from the default
    /// location if a file is there, else defaults
    pub fn load_or_default(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(&path)
    }

    /// Save configuration to a file, creating parent directories
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| GraphError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.bucket < 1 {
            return Err(GraphError::InvalidBucketCount {
                bucket: self.bucket,
            });
        }
        if self.iterations < 1 {
            crate::bail_invalid!("config iterations", self.iterations);
        }
        if self.canvas.width == 0 || self.canvas.height == 0 {
            crate::bail_invalid!(
                "config canvas",
                format!("{}x{}", self.canvas.width, self.canvas.height)
            );
        }
        Ok(())
    }
}
