//! Configuration and file management for dbug-overlay
//!
//! This crate provides:
//! - File path utilities for config and log files
//! - Configuration file loading (TOML)
//! - Overlay configuration (OverlayConfig)

pub mod config_file;
pub mod overlay_config;
pub mod paths;

pub use config_file::load_config_file;
pub use overlay_config::OverlayConfig;
pub use paths::{app_config_path, cache_dir, config_dir};
