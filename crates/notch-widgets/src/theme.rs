//! Colors and conversions between notch-core and iced types

use iced::{Color, Point, Size};
use notch_core::Rgba;

/// Title label color
pub const TITLE_TEXT_COLOR: Color = Color::from_rgb(0.15, 0.15, 0.17);
/// Value label color
pub const VALUE_TEXT_COLOR: Color = Color::from_rgb(0.3, 0.3, 0.33);

pub fn to_color(rgba: Rgba) -> Color {
    Color::from_rgba(rgba.r, rgba.g, rgba.b, rgba.a)
}

pub fn to_point(point: notch_core::Point) -> Point {
    Point::new(point.x as f32, point.y as f32)
}

pub fn from_point(point: Point) -> notch_core::Point {
    notch_core::Point::new(f64::from(point.x), f64::from(point.y))
}

pub fn to_size(size: notch_core::Size) -> Size {
    Size::new(size.width as f32, size.height as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_color() {
        let color = to_color(Rgba::from_rgba(0.0, 0.45, 0.94, 0.5));
        assert_eq!(color.g, 0.45);
        assert_eq!(color.a, 0.5);
    }

    #[test]
    fn test_point_roundtrip() {
        let point = Point::new(12.5, -3.0);
        assert_eq!(to_point(from_point(point)), point);
    }
}
