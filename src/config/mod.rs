//! Configuration module
//!
//! Handles loading settings from YAML files and environment variables.
//! Settings are constructed once at startup and passed explicitly; there is
//! no global configuration state.

mod settings;

pub use settings::*;
