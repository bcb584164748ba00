//! Configuration module for spendr
//!
//! This module provides configuration management including:
//! - Data directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::SpendrPaths;
pub use settings::{CategoryMatch, Settings};
