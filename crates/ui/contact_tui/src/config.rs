use std::path::{Path, PathBuf};
use std::{env, fs};

use contact_form::DEFAULT_PHONE_PREFIX;
use directories::ProjectDirs;
use lazy_static::lazy_static;
use serde::Deserialize;
use tracing::warn;

pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FormConfig {
    /// Prefix every phone number has to start with.
    pub phone_prefix: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            phone_prefix: DEFAULT_PHONE_PREFIX.to_string(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive; `RUST_LOG` wins when set.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub form: FormConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

lazy_static! {
    pub static ref PROJECT_NAME: String = env!("CARGO_CRATE_NAME").to_uppercase();
    pub static ref DATA_FOLDER: Option<PathBuf> =
        env::var(format!("{}_DATA", PROJECT_NAME.clone()))
            .ok()
            .map(PathBuf::from);
    pub static ref CONFIG_FOLDER: Option<PathBuf> =
        env::var(format!("{}_CONFIG", PROJECT_NAME.clone()))
            .ok()
            .map(PathBuf::from);
}

const CONFIG_FILES: [(&str, config::FileFormat); 2] = [
    ("config.json5", config::FileFormat::Json5),
    ("config.toml", config::FileFormat::Toml),
];

impl Config {
    /// Load from the config directory, then `explicit` (if given), then
    /// `CONTACT_*` environment variables (`CONTACT_FORM__PHONE_PREFIX=...`).
    pub fn new(explicit: Option<&Path>) -> Result<Self, config::ConfigError> {
        Self::load(&get_config_dir(), explicit)
    }

    pub fn load(config_dir: &Path, explicit: Option<&Path>) -> Result<Self, config::ConfigError> {
        Self::load_with_env(config_dir, explicit, None)
    }

    /// Like [`Config::load`], but reads the `CONTACT_*` variables from `env`
    /// instead of the process environment when given.
    fn load_with_env(
        config_dir: &Path,
        explicit: Option<&Path>,
        env: Option<config::Map<String, String>>,
    ) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder()
            .set_default("form.phone_prefix", DEFAULT_PHONE_PREFIX)?
            .set_default("logging.level", DEFAULT_LOG_LEVEL)?;

        let mut found_config = false;
        for (file, format) in &CONFIG_FILES {
            let path = config_dir.join(file);
            if path.exists() {
                found_config = true;
            }
            builder = builder.add_source(config::File::from(path).format(*format).required(false));
        }
        if let Some(path) = explicit {
            builder = builder.add_source(config::File::from(path.to_path_buf()).required(true));
            found_config = true;
        }
        if !found_config {
            warn!("No configuration file found, using defaults");
        }

        // `CONTACT_FORM__PHONE_PREFIX`: one underscore after the prefix, two between sections.
        builder = builder.add_source(
            config::Environment::with_prefix("CONTACT")
                .prefix_separator("_")
                .separator("__")
                .source(env),
        );

        builder.build()?.try_deserialize()
    }
}

pub fn get_data_dir() -> PathBuf {
    if let Some(s) = DATA_FOLDER.clone() {
        s
    } else if let Some(proj_dirs) = project_directory() {
        proj_dirs.data_local_dir().to_path_buf()
    } else {
        PathBuf::from(".").join(".data")
    }
}

pub fn get_config_dir() -> PathBuf {
    if let Some(s) = CONFIG_FOLDER.clone() {
        s
    } else if let Some(proj_dirs) = project_directory() {
        proj_dirs.config_local_dir().to_path_buf()
    } else {
        PathBuf::from(".").join(".config")
    }
}

fn project_directory() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "chicken105", env!("CARGO_PKG_NAME"))
}

pub fn ensure_data_dir_exists() -> std::io::Result<PathBuf> {
    let data_dir = get_data_dir();
    if !data_dir.exists() {
        fs::create_dir_all(&data_dir)?;
    }
    Ok(data_dir)
}
