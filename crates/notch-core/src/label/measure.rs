//! Text measurement used for label layout

/// Width of a single line of text
///
/// The toolkit layer can supply a real font measurer; the core only needs
/// widths to place the value label.
pub trait TextMeasure {
    fn text_width(&self, text: &str, font_size: f64) -> f64;
}

/// Width estimate from character count
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApproximateMeasure {
    /// Average glyph advance as a fraction of the font size
    pub char_width_factor: f64,
}

impl Default for ApproximateMeasure {
    fn default() -> Self {
        Self {
            char_width_factor: 0.6,
        }
    }
}

impl TextMeasure for ApproximateMeasure {
    fn text_width(&self, text: &str, font_size: f64) -> f64 {
        text.chars().count() as f64 * font_size * self.char_width_factor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approximate_width() {
        let measure = ApproximateMeasure::default();
        assert!((measure.text_width("300", 10.0) - 18.0).abs() < 1e-9);
        assert_eq!(measure.text_width("", 14.0), 0.0);
    }
}
