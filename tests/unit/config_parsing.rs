//! Unit tests for TOML configuration parsing.

use mount_settings::config::{parse_config, validate_config, ControllerConfig, MountType};
use mount_settings::error::{AxisSettingsError, ConfigError, Error};
use mount_settings::format::UnitSystem;

/// Test parsing a valid controller configuration from TOML.
#[test]
fn test_parse_controller_config() {
    let toml_str = r#"
mount = "equatorial"
units = "imperial"

[[axis]]
axis = 1
settings = "12800,16,800,0,-180,180"

[[axis]]
axis = 2
settings = "12800,16,800,1,-90,90"
"#;

    let config: ControllerConfig = toml::from_str(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.mount, MountType::Equatorial);
    assert_eq!(config.units, UnitSystem::Imperial);
    assert_eq!(config.axes.len(), 2);
    assert!(config.axis(2).expect("Axis not found").is_reversed());
    assert!(validate_config(&config).is_ok());
}

/// Test that undecodable settings text is rejected during parsing.
#[test]
fn test_bad_settings_text_rejected() {
    let toml_str = r#"
[[axis]]
axis = 1
settings = "12800,16,800,0,-180,abc"
"#;

    let result: Result<ControllerConfig, _> = toml::from_str(toml_str);
    assert!(result.is_err(), "Should reject non-numeric field");
}

/// Test validation fails for settings that decode but violate limits.
#[test]
fn test_invalid_axis_rejected() {
    let toml_str = r#"
mount = "alt_azimuth"

[[axis]]
axis = 2
settings = "1000,16,800,0,-100,100"
"#;

    let result = parse_config(toml_str);
    assert_eq!(
        result.map(|_| ()),
        Err(Error::Config(ConfigError::InvalidAxis {
            axis: 2,
            error: AxisSettingsError::MinOutOfRange(-100),
        }))
    );
}

/// Test duplicate axes are rejected.
#[test]
fn test_duplicate_axis_rejected() {
    let toml_str = r#"
[[axis]]
axis = 1
settings = "12800,16,800,0,-180,180"

[[axis]]
axis = 1
settings = "12800,16,800,0,-180,180"
"#;

    assert!(matches!(
        parse_config(toml_str),
        Err(Error::Config(ConfigError::DuplicateAxis(1)))
    ));
}

/// Test that empty configuration is valid.
#[test]
fn test_empty_config_is_valid() {
    let config = ControllerConfig::default();
    assert!(validate_config(&config).is_ok());
}
