//! Configuration module for Payday
//!
//! This module provides configuration management including:
//! - platform path resolution
//! - user settings persistence

pub mod paths;
pub mod settings;

pub use paths::PaydayPaths;
pub use settings::Settings;
