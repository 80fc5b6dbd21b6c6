//! Demo configuration
//!
//! Stored as YAML in the user's config directory.
//! Default location: ~/.config/notch-demo/config.yaml

use notch_core::{LabelStyle, Rgba, SliderConfig};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const APP_NAME: &str = "notch-demo";

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub window_width: f32,
    pub window_height: f32,
    /// Margin between the window edge and the slider
    pub padding: f32,
    pub slider: SliderConfig,
}

impl Default for DemoConfig {
    fn default() -> Self {
        let window_width = 400.0;
        let padding = 20.0;

        let mut slider = SliderConfig {
            maximum_value: 1000.0,
            value: 300.0,
            width: f64::from(window_width - 2.0 * padding),
            label_style: LabelStyle::Follow,
            ..SliderConfig::default()
        };
        slider.colors.track_highlight_tint = Rgba::from_rgb8(102, 162, 220).to_hex();

        Self {
            window_width,
            window_height: 240.0,
            padding,
            slider,
        }
    }
}

pub fn default_config_path() -> PathBuf {
    notch_core::config::default_config_path(APP_NAME, "config.yaml")
}

/// Resolve the config path from command line arguments
///
/// `--config <path>` overrides the default location.
pub fn config_path_from_args(args: &[String]) -> PathBuf {
    args.iter()
        .position(|arg| arg == "--config")
        .and_then(|i| args.get(i + 1))
        .map(PathBuf::from)
        .unwrap_or_else(default_config_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use notch_core::config::{load_config, save_config};
    use tempfile::TempDir;

    #[test]
    fn test_default_config_builds() {
        let config = DemoConfig::default();
        let view = config.slider.build().unwrap();
        assert_eq!(view.value(), 300.0);
        assert_eq!(view.value_text(), "300");
        assert_eq!(view.width(), 360.0);
        assert!(view.title().is_empty());
        assert_eq!(
            view.control().appearance().track_highlight_tint(),
            Rgba::from_rgb8(102, 162, 220)
        );
    }

    #[test]
    fn test_config_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("config.yaml");

        let mut config = DemoConfig::default();
        config.slider.title = "Distance".to_string();
        config.slider.step = Some(25.0);
        save_config(&config, &path).unwrap();

        let loaded: DemoConfig = load_config(&path);
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let yaml = "window_height: 300\nslider:\n  value: 42\n";
        let config: DemoConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.window_height, 300.0);
        assert_eq!(config.window_width, 400.0);
        assert_eq!(config.slider.value, 42.0);
        // nested struct falls back to the library defaults, not the demo's
        assert_eq!(config.slider.maximum_value, SliderConfig::default().maximum_value);
    }

    #[test]
    fn test_config_flag() {
        let args: Vec<String> = ["notch-demo", "--config", "/tmp/slider.yaml"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(config_path_from_args(&args), PathBuf::from("/tmp/slider.yaml"));

        let args = vec!["notch-demo".to_string(), "--config".to_string()];
        assert_eq!(config_path_from_args(&args), default_config_path());
    }
}
