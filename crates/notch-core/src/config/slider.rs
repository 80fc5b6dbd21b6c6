//! Serializable slider configuration

use crate::color::{parse_hex_color, Rgba};
use crate::error::SliderResult;
use crate::format::ValueFormat;
use crate::label::{LabelStyle, SliderView, DEFAULT_SPACING, DEFAULT_THUMB_SIZE};
use crate::slider::{
    SliderRange, DEFAULT_THUMB_BORDER, DEFAULT_THUMB_BORDER_WIDTH, DEFAULT_THUMB_TINT,
    DEFAULT_TRACK_HIGHLIGHT_TINT, DEFAULT_TRACK_TINT,
};
use serde::{Deserialize, Serialize};

/// Everything needed to build a [`SliderView`]
///
/// Invariants are not checked on deserialization; [`SliderConfig::build`]
/// validates and fails on the first violated one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderConfig {
    /// Optional title shown above the value label (empty = hidden)
    pub title: String,
    pub minimum_value: f64,
    pub maximum_value: f64,
    /// Initial value, clamped into range
    pub value: f64,
    /// Snap step; `None`, zero or negative disables snapping
    pub step: Option<f64>,
    /// View width in pixels
    pub width: f64,
    /// Thumb width/height in pixels (must be > 0)
    pub thumb_size: f64,
    /// Vertical spacing between rows in pixels
    pub spacing: f64,
    pub label_style: LabelStyle,
    pub format: ValueFormat,
    pub colors: SliderColors,
    /// Thumb outline width in pixels (must be >= 0)
    pub thumb_border_width: f64,
    /// 0.0 square .. 1.0 round, clamped
    pub curvaceousness: f64,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            minimum_value: 0.0,
            maximum_value: 1000.0,
            value: 0.0,
            step: None,
            width: 320.0,
            thumb_size: DEFAULT_THUMB_SIZE,
            spacing: DEFAULT_SPACING,
            label_style: LabelStyle::default(),
            format: ValueFormat::default(),
            colors: SliderColors::default(),
            thumb_border_width: DEFAULT_THUMB_BORDER_WIDTH,
            curvaceousness: 1.0,
        }
    }
}

impl SliderConfig {
    /// Build a view, validating range, sizes and widths
    pub fn build(&self) -> SliderResult<SliderView> {
        let range = SliderRange::new(self.minimum_value, self.maximum_value)?;

        let mut view = SliderView::new(self.width);
        view.set_thumb_size(self.thumb_size)?;
        view.set_spacing(self.spacing)?;
        view.set_thumb_border_width(self.thumb_border_width)?;

        view.set_range(range);
        view.set_step(self.step);
        view.set_value(self.value);

        view.set_title(self.title.clone());
        view.set_label_style(self.label_style);
        view.set_format(self.format.clone());

        view.set_track_tint(self.colors.track_tint());
        view.set_track_highlight_tint(self.colors.track_highlight_tint());
        view.set_thumb_tint(self.colors.thumb_tint());
        view.set_thumb_border_color(self.colors.thumb_border());
        view.set_curvaceousness(self.curvaceousness);

        log::debug!(
            "SliderConfig::build: '{}' {}..{} = {} (step {:?})",
            self.title,
            view.control().minimum_value(),
            view.control().maximum_value(),
            view.value(),
            view.control().step()
        );
        Ok(view)
    }
}

/// Slider colors as hex strings (`#RRGGBB` or `#RRGGBBAA`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderColors {
    pub track_tint: String,
    pub track_highlight_tint: String,
    pub thumb_tint: String,
    pub thumb_border: String,
}

impl Default for SliderColors {
    fn default() -> Self {
        Self {
            track_tint: DEFAULT_TRACK_TINT.to_hex(),
            track_highlight_tint: DEFAULT_TRACK_HIGHLIGHT_TINT.to_hex(),
            thumb_tint: DEFAULT_THUMB_TINT.to_hex(),
            thumb_border: DEFAULT_THUMB_BORDER.to_hex(),
        }
    }
}

impl SliderColors {
    pub fn track_tint(&self) -> Rgba {
        color_or("track_tint", &self.track_tint, DEFAULT_TRACK_TINT)
    }

    pub fn track_highlight_tint(&self) -> Rgba {
        color_or(
            "track_highlight_tint",
            &self.track_highlight_tint,
            DEFAULT_TRACK_HIGHLIGHT_TINT,
        )
    }

    pub fn thumb_tint(&self) -> Rgba {
        color_or("thumb_tint", &self.thumb_tint, DEFAULT_THUMB_TINT)
    }

    pub fn thumb_border(&self) -> Rgba {
        color_or("thumb_border", &self.thumb_border, DEFAULT_THUMB_BORDER)
    }
}

fn color_or(field: &str, hex: &str, fallback: Rgba) -> Rgba {
    parse_hex_color(hex).unwrap_or_else(|| {
        log::warn!("Invalid hex color '{}' for {}, using {}", hex, field, fallback.to_hex());
        fallback
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{load_config, save_config};
    use crate::error::SliderError;

    #[test]
    fn test_default_builds() {
        let view = SliderConfig::default().build().unwrap();
        assert_eq!(view.control().maximum_value(), 1000.0);
        assert_eq!(view.value(), 0.0);
        assert_eq!(view.control().appearance().curvaceousness(), 1.0);
    }

    #[test]
    fn test_build_rejects_inverted_range() {
        let config = SliderConfig {
            minimum_value: 10.0,
            maximum_value: 10.0,
            ..SliderConfig::default()
        };
        assert_eq!(
            config.build().unwrap_err(),
            SliderError::InvalidRange {
                minimum: 10.0,
                maximum: 10.0
            }
        );
    }

    #[test]
    fn test_build_rejects_bad_sizes() {
        let config = SliderConfig {
            thumb_size: 0.0,
            ..SliderConfig::default()
        };
        assert!(matches!(config.build(), Err(SliderError::NonPositive { .. })));

        let config = SliderConfig {
            thumb_border_width: -2.0,
            ..SliderConfig::default()
        };
        assert!(matches!(config.build(), Err(SliderError::Negative { .. })));
    }

    #[test]
    fn test_build_applies_everything() {
        let config = SliderConfig {
            title: "Budget".to_string(),
            minimum_value: 100.0,
            maximum_value: 500.0,
            value: 900.0,
            step: Some(-3.0),
            curvaceousness: 7.0,
            colors: SliderColors {
                track_highlight_tint: "#66A2DC".to_string(),
                thumb_tint: "nope".to_string(),
                ..SliderColors::default()
            },
            format: ValueFormat {
                suffix: " €".to_string(),
                ..ValueFormat::default()
            },
            ..SliderConfig::default()
        };
        let view = config.build().unwrap();

        assert_eq!(view.value(), 500.0);
        assert_eq!(view.value_text(), "500 €");
        assert_eq!(view.control().step(), None);
        assert_eq!(view.control().appearance().curvaceousness(), 1.0);
        assert_eq!(
            view.control().appearance().track_highlight_tint(),
            Rgba::from_rgb8(102, 162, 220)
        );
        assert_eq!(view.control().appearance().thumb_tint(), DEFAULT_THUMB_TINT);
        assert!(view.frames().title.is_some());
    }

    #[test]
    fn test_yaml_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("slider.yaml");
        let config = SliderConfig {
            title: "Radius".to_string(),
            step: Some(25.0),
            label_style: LabelStyle::Sticky,
            ..SliderConfig::default()
        };

        save_config(&config, &path).unwrap();
        let loaded: SliderConfig = load_config(&path);
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config: SliderConfig =
            serde_yaml::from_str("maximum_value: 50\nstep: 5\nlabel_style: sticky\n").unwrap();
        assert_eq!(config.maximum_value, 50.0);
        assert_eq!(config.step, Some(5.0));
        assert_eq!(config.label_style, LabelStyle::Sticky);
        assert_eq!(config.thumb_size, DEFAULT_THUMB_SIZE);
        assert_eq!(config.colors, SliderColors::default());
    }
}
