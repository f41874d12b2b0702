//! Unit test harness for mount-settings.
//!
//! This module organizes unit tests for each component of the library.

mod config_parsing;
mod settings_decoding;
mod settings_validation;
