//! Configuration module for mount-settings.
//!
//! Provides the axis settings record, its validation against axis and mount
//! geometry, and the controller configuration loaded from TOML files (with
//! `std` feature) or pre-parsed data.

mod axis;
mod limits;
#[cfg(feature = "std")]
mod loader;
mod mount;
mod system;
pub mod units;
mod validation;

pub use axis::{AxisSettings, FIELD_COUNT, FIELD_DELIMITER, SETTINGS_CAPACITY};
pub use limits::AxisLimits;
pub use mount::{Axis, MountType};
pub use system::{AxisEntry, ControllerConfig};
pub use validation::{check_axis_settings, validate_axis_settings, validate_config};

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};

// Re-export unit types at config level
pub use units::{Celsius, Hectopascals, Microsteps, OFF};
