//! Handles the configuration of melodeon.
//!
//! this module is responsible for parsing the Melodeon.toml file, and layering environment variables and
//! command line overrides on top of it.

use config::{Config, ConfigError, Environment, File};
use melodeon_library::EmptyPolicy;
use serde::Deserialize;

use std::{path::PathBuf, str::FromStr};

pub static DEFAULT_CONFIG: &str = include_str!("../Melodeon.toml");

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Settings {
    /// What level of logging to use.
    /// Default is "info".
    #[serde(default = "default_log_level")]
    #[serde(deserialize_with = "de_log_level")]
    pub log_level: log::LevelFilter,
    /// Settings for the library model
    #[serde(default)]
    pub library: LibrarySettings,
}

impl Default for Settings {
    #[inline]
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            library: LibrarySettings::default(),
        }
    }
}

impl Settings {
    /// Load settings from the config file, environment variables, and CLI arguments.
    ///
    /// The config file is located at the path specified by the `--config` flag.
    ///
    /// The environment variables are prefixed with `MELODEON_`, nested keys are separated by `__`.
    ///
    /// # Arguments
    ///
    /// * `config` - path to the config file
    /// * `catalog` - overrides `library.catalog`
    /// * `log_level` - overrides `log_level`
    ///
    /// # Errors
    ///
    /// This function will return an error if the config file is not found or if the config file is
    /// invalid.
    #[inline]
    pub fn init(
        config: PathBuf,
        catalog: Option<PathBuf>,
        log_level: Option<log::LevelFilter>,
    ) -> Result<Self, ConfigError> {
        let s = Config::builder()
            .add_source(File::from(config))
            .add_source(
                Environment::with_prefix("MELODEON")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        let mut settings: Self = s.try_deserialize()?;

        if let Some(catalog) = catalog {
            settings.library.catalog = Some(catalog);
        }

        if let Some(path) = &mut settings.library.catalog {
            *path = shellexpand::tilde(&path.to_string_lossy())
                .into_owned()
                .into();
        }

        if let Some(log_level) = log_level {
            settings.log_level = log_level;
        }

        Ok(settings)
    }

    /// Get the (default) path to the config file.
    /// If the config file does not exist at this path, it will be created with the default config.
    ///
    /// See [`crate::get_config_dir`] for more information about where this default path is located.
    ///
    /// # Errors
    ///
    /// This function will return an error if the system config directory (e.g., `~/.config` on linux) could not be found, or if the config file was missing and could not be created.
    #[inline]
    pub fn get_config_path() -> Result<PathBuf, std::io::Error> {
        match crate::get_config_dir() {
            Ok(config_dir) => {
                // if the config directory does not exist, create it
                if !config_dir.exists() {
                    std::fs::create_dir_all(&config_dir)?;
                }
                let config_file = config_dir.join("Melodeon.toml");

                if !config_file.exists() {
                    std::fs::write(&config_file, DEFAULT_CONFIG)?;
                }

                Ok(config_file)
            }
            Err(e) => Err(std::io::Error::new(std::io::ErrorKind::NotFound, e)),
        }
    }
}

#[derive(Clone, Debug, Deserialize, Default, PartialEq, Eq)]
pub struct LibrarySettings {
    /// What to do with albums and artists that lose their last track.
    /// "prune" - discard them
    /// "keep" - keep them, empty
    #[serde(default)]
    pub empty_policy: EmptyPolicy,
    /// The JSON file the extracted track metadata is read from.
    /// `~` is expanded to the home directory.
    #[serde(default)]
    pub catalog: Option<PathBuf>,
}

fn de_log_level<'de, D>(deserializer: D) -> Result<log::LevelFilter, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Ok(log::LevelFilter::from_str(&s).unwrap_or_else(|_| default_log_level()))
}

const fn default_log_level() -> log::LevelFilter {
    log::LevelFilter::Info
}
