//! Global lovedir configuration.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_SERVER_PORT, DEFAULT_START_DATE, JOURNAL_FILE};
use crate::error::{LoveDirError, LoveDirResult};

static DEFAULT_DATA_DIR: &str = "~/.local/share/lovedir";

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

fn default_start_date() -> String {
    DEFAULT_START_DATE.to_string()
}

fn default_server_port() -> u16 {
    DEFAULT_SERVER_PORT
}

/// Configuration at ~/.config/lovedir/config.toml
///
/// Every key can be overridden from the environment with a `LOVEDIR_` prefix,
/// e.g. `LOVEDIR_DATA_DIR=/tmp/love`.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LoveDirConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// The day the relationship started, for "days together".
    #[serde(default = "default_start_date")]
    pub start_date: String,

    #[serde(default = "default_server_port")]
    pub server_port: u16,

    /// Base URL uploaded files are served under. Defaults to the local server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_base_url: Option<String>,
}

impl Default for LoveDirConfig {
    fn default() -> Self {
        LoveDirConfig {
            data_dir: default_data_dir(),
            start_date: default_start_date(),
            server_port: default_server_port(),
            public_base_url: None,
        }
    }
}

impl LoveDirConfig {
    pub fn config_path() -> LoveDirResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| LoveDirError::Config("Could not determine config directory".into()))?
            .join("lovedir");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the config, writing a commented default file first if there is none.
    pub fn load() -> LoveDirResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// Load the config from `path`, layering `LOVEDIR_*` environment variables on top.
    /// A missing file yields the defaults.
    pub fn load_from(path: &Path) -> LoveDirResult<Self> {
        Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(Environment::with_prefix("LOVEDIR"))
            .build()
            .map_err(|e| LoveDirError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| LoveDirError::Config(e.to_string()))
    }

    /// Data directory with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.data_dir.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    pub fn journal_path(&self) -> PathBuf {
        self.data_path().join(JOURNAL_FILE)
    }

    /// Where the upload server keeps blobs.
    pub fn blob_path(&self) -> PathBuf {
        self.data_path().join("blobs")
    }

    pub fn public_base_url(&self) -> String {
        match &self.public_base_url {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => format!("http://127.0.0.1:{}/blobs", self.server_port),
        }
    }

    /// The effective config rendered as TOML.
    pub fn to_toml(&self) -> LoveDirResult<String> {
        toml::to_string_pretty(self).map_err(|e| LoveDirError::Config(e.to_string()))
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> LoveDirResult<()> {
        let contents = format!(
            "\
# lovedir configuration

# Where the journal and uploaded photos live:
# data_dir = \"{}\"

# The day it all started (used by `lovedir together`):
# start_date = \"{}\"

# Port for lovedir-server:
# server_port = {}

# Public URL prefix for uploaded files:
# public_base_url = \"https://photos.example.com\"
",
            DEFAULT_DATA_DIR, DEFAULT_START_DATE, DEFAULT_SERVER_PORT
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                LoveDirError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| LoveDirError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
