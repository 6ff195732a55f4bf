//! Overlay configuration
//!
//! Configuration loaded from .dbug-overlay.toml.

use dbug_core::{Color, OverlayOptions, Precision, TickSettings};
use serde::{Deserialize, Serialize};

/// Overlay configuration loaded from .dbug-overlay.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct OverlayConfig {
    /// Show the overlay and accept log writes
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Prefix each line with the producer's name
    #[serde(default = "default_true")]
    pub show_names: bool,

    /// Digits after the decimal point for floats
    #[serde(default = "default_precision")]
    pub float_precision: usize,

    /// Digits after the decimal point for vector components
    #[serde(default = "default_precision")]
    pub vector_precision: usize,

    /// Overlay text color as `#RRGGBB`
    #[serde(default = "default_text_color")]
    pub text_color: String,

    /// Ticks to wait for registrations before output starts
    #[serde(default = "default_grace_ticks")]
    pub grace_ticks: u32,

    /// Keep writes made during the grace period instead of dropping them
    #[serde(default)]
    pub queue_until_ready: bool,

    /// Milliseconds between ticks in the terminal host
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,

    /// Reserve line buffer room for this many producers
    #[serde(default)]
    pub expected_producers: usize,
}

fn default_true() -> bool {
    true
}

fn default_precision() -> usize {
    2
}

fn default_text_color() -> String {
    Color::WHITE.to_hex()
}

fn default_grace_ticks() -> u32 {
    1
}

fn default_tick_interval_ms() -> u64 {
    16
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            show_names: default_true(),
            float_precision: default_precision(),
            vector_precision: default_precision(),
            text_color: default_text_color(),
            grace_ticks: default_grace_ticks(),
            queue_until_ready: false,
            tick_interval_ms: default_tick_interval_ms(),
            expected_producers: 0,
        }
    }
}

impl OverlayConfig {
    /// Load config from CWD first, then home directory, or use defaults
    pub fn load() -> Self {
        if let Some(content) = crate::load_config_file() {
            match toml::from_str(&content) {
                Ok(config) => {
                    log::info!("Loaded overlay config from file");
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse config file: {}", e);
                }
            }
        }

        log::debug!("Using default overlay config");
        Self::default()
    }

    /// Parsed text color, black when the configured value is invalid
    pub fn text_color(&self) -> Color {
        Color::from_hex(&self.text_color).unwrap_or_else(|e| {
            log::warn!("Invalid text_color {:?}: {}", self.text_color, e);
            Color::BLACK
        })
    }

    /// Settings for the next tick
    pub fn settings(&self) -> TickSettings {
        TickSettings {
            enabled: self.enabled,
            show_names: self.show_names,
            precision: Precision {
                float: self.float_precision,
                vector: self.vector_precision,
            },
            text_color: self.text_color(),
        }
    }

    /// Options for constructing the overlay context
    pub fn overlay_options(&self) -> OverlayOptions {
        OverlayOptions {
            grace_ticks: self.grace_ticks,
            queue_until_ready: self.queue_until_ready,
            expected_producers: self.expected_producers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = OverlayConfig::default();
        assert!(config.enabled);
        assert!(config.show_names);
        assert_eq!(config.float_precision, 2);
        assert_eq!(config.vector_precision, 2);
        assert_eq!(config.text_color, "#FFFFFF");
        assert_eq!(config.grace_ticks, 1);
        assert!(!config.queue_until_ready);
    }

    #[test]
    fn test_config_deserialize_partial() {
        let toml = r##"
            show_names = false
            float_precision = 1
            text_color = "#00FF00"
        "##;
        let config: OverlayConfig = toml::from_str(toml).unwrap();
        assert!(!config.show_names);
        assert_eq!(config.float_precision, 1);
        assert_eq!(config.text_color(), Color::GREEN);
        // Other fields should use defaults
        assert!(config.enabled);
        assert_eq!(config.vector_precision, 2);
        assert_eq!(config.tick_interval_ms, 16);
    }

    #[test]
    fn test_empty_file_is_default() {
        let config: OverlayConfig = toml::from_str("").unwrap();
        assert_eq!(config, OverlayConfig::default());
    }

    #[test]
    fn test_settings_conversion() {
        let config = OverlayConfig {
            float_precision: 0,
            vector_precision: 3,
            text_color: "ff0000".to_string(),
            ..Default::default()
        };
        let settings = config.settings();
        assert_eq!(settings.precision, Precision { float: 0, vector: 3 });
        assert_eq!(settings.text_color, Color::RED);
    }

    #[test]
    fn test_invalid_text_color_falls_back_to_black() {
        let config = OverlayConfig {
            text_color: "not a color".to_string(),
            ..Default::default()
        };
        assert_eq!(config.text_color(), Color::BLACK);
    }

    #[test]
    fn test_overlay_options() {
        let config: OverlayConfig = toml::from_str(
            r#"
            grace_ticks = 0
            queue_until_ready = true
            expected_producers = 8
        "#,
        )
        .unwrap();
        assert_eq!(
            config.overlay_options(),
            OverlayOptions {
                grace_ticks: 0,
                queue_until_ready: true,
                expected_producers: 8,
            }
        );
    }
}
