use schouw_layout::PageSettings;
use schouw_render_lopdf::DEFAULT_TITLE;
use schouw_storage::DEFAULT_FILE_PREFIX;
use schouw_types::format::DEFAULT_DATE_FORMAT;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Location of the configuration file used when none is given explicitly.
pub const DEFAULT_CONFIG_FILE: &str = "config/default";
/// Prefix of environment overrides, e.g. `SCHOUW__STORAGE__OUTPUT_DIR`.
pub const ENV_PREFIX: &str = "SCHOUW";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub page: PageSettings,
    pub report: ReportSettings,
    pub storage: StorageSettings,
    pub database: DatabaseSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReportSettings {
    pub title: String,
    /// Leading part of every generated file name.
    pub file_prefix: String,
    /// `chrono` strftime pattern shared by the PDF and the CSV.
    pub date_format: String,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            file_prefix: DEFAULT_FILE_PREFIX.to_string(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    pub output_dir: PathBuf,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("public/reports"),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseSettings {
    pub max_connections: u32,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self { max_connections: 5 }
    }
}

impl ReportConfig {
    /// Loads configuration from `path` (which must exist) or, without one,
    /// from `config/default.toml` if present. Environment variables are
    /// always layered on top.
    pub fn load(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder();

        match path {
            Some(path) => {
                log::debug!("Loading configuration from {}", path.display());
                builder = builder.add_source(config::File::from(path).required(true));
            }
            None => {
                builder = builder
                    .add_source(config::File::with_name(DEFAULT_CONFIG_FILE).required(false));
            }
        }

        // Always layer environment variables on top
        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }
}
