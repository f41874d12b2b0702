//! # mount-settings
//!
//! Settings codecs and display formatting for telescope mount controllers.
//!
//! ## Features
//!
//! - **Checked parsing**: integer and decimal parsing that reports failure
//!   instead of guessing, plus canonical number text
//! - **Axis settings**: decode `steps,microsteps,irun,reverse,min,max` text
//!   and validate it against axis and mount geometry
//! - **Interval codec**: intervalometer delays from fractions of a second to
//!   hours, stored in one byte
//! - **Coordinate text**: degrees/minutes/seconds formatting and parsing
//! - **Locale readings**: temperature and pressure in metric or imperial units
//! - **no_std compatible**: everything but file loading works without the
//!   standard library and without allocation
//!
//! ## Quick Start
//!
//! ```rust
//! use mount_settings::{validate_axis_settings, AxisSettings, MountType};
//!
//! let settings = AxisSettings::decode("12800,16,800,0,-180,180")?;
//! assert!(validate_axis_settings(1, MountType::Equatorial, &settings));
//! # Ok::<(), mount_settings::error::ParseError>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O and TOML parsing
//! - `alloc`: Enables heap allocation for no_std with allocator
//! - `defmt`: Enables defmt logging and `defmt::Format` on public types

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Core modules
pub mod config;
pub mod error;
pub mod format;
pub mod interval;
pub mod num;

// Re-exports for ergonomic API
pub use config::{
    check_axis_settings, validate_axis_settings, validate_config, Axis, AxisSettings, ControllerConfig,
    MountType,
};
pub use error::{Error, Result};
pub use format::{format_dms, locale_pressure, locale_temperature, parse_dms, DmsStyle, LocaleReading, UnitSystem};
pub use interval::{byte_to_time, relative_error, time_to_byte, CompactInterval};
pub use num::{parse_int, strip_num};

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::{load_config, parse_config};
