//! Configuration loading from files (std only).
//!
//! Documents are read in two passes: TOML is parsed with every axis kept as
//! raw settings text, then each text is decoded and the result validated.
//! A decode failure is reported against its axis number instead of as a
//! TOML syntax error.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{ConfigError, Error, Result};
use crate::format::UnitSystem;

use super::{AxisEntry, AxisSettings, ControllerConfig, MountType};

/// Controller document before axis settings are decoded.
#[derive(Debug, Deserialize)]
struct ConfigDocument {
    #[serde(default)]
    mount: MountType,
    #[serde(default)]
    units: UnitSystem,
    #[serde(default, rename = "axis")]
    axes: Vec<AxisText>,
}

#[derive(Debug, Deserialize)]
struct AxisText {
    axis: u8,
    settings: String,
}

impl ConfigDocument {
    /// Decode every axis text into a controller configuration.
    fn decode(self) -> core::result::Result<ControllerConfig, ConfigError> {
        let mut config = ControllerConfig {
            mount: self.mount,
            units: self.units,
            ..Default::default()
        };
        let count = self.axes.len();

        for entry in self.axes {
            let settings = AxisSettings::decode(&entry.settings).map_err(|error| ConfigError::UndecodableAxis {
                axis: entry.axis,
                error,
            })?;
            config
                .axes
                .push(AxisEntry {
                    axis: entry.axis,
                    settings,
                })
                .map_err(|_| ConfigError::TooManyAxes(count))?;
        }

        Ok(config)
    }
}

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed, or validated.
///
/// # Example
///
/// ```rust,ignore
/// use mount_settings::load_config;
///
/// let config = load_config("controller.toml")?;
/// ```
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<ControllerConfig> {
    let content = fs::read_to_string(path.as_ref()).map_err(|e| {
        let msg = heapless::String::try_from(e.to_string().as_str()).unwrap_or_default();
        Error::Config(ConfigError::IoError(msg))
    })?;

    parse_config(&content)
}

/// Parse configuration from a TOML string.
///
/// One bad axis rejects the whole document.
///
/// # Errors
///
/// - `ConfigError::ParseError` if the TOML is invalid
/// - `ConfigError::UndecodableAxis` if an axis settings string does not decode
/// - `ConfigError::TooManyAxes` if more than five axes are listed
/// - `ConfigError::DuplicateAxis` or `ConfigError::InvalidAxis` from validation
pub fn parse_config(content: &str) -> Result<ControllerConfig> {
    let doc: ConfigDocument = toml::from_str(content).map_err(|e| {
        let msg = heapless::String::try_from(e.message()).unwrap_or_default();
        Error::Config(ConfigError::ParseError(msg))
    })?;
    let config = doc.decode()?;

    super::validation::validate_config(&config)?;

    Ok(config)
}
