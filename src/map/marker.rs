//! Marker styling.

use maud::Render;

use crate::{geojson::GeoLocation, prelude::*};

/// Named CSS color understood by Leaflet.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Blue,
    Brown,
    Green,
    Orange,
    Red,
}

/// Tsunami risk wins over any magnitude.
pub fn earthquake_color(is_tsunami: bool, magnitude: Option<f64>) -> Color {
    if is_tsunami {
        return Color::Blue;
    }
    match magnitude {
        Some(magnitude) if magnitude >= 5.0 => Color::Red,
        Some(magnitude) if magnitude >= 3.0 => Color::Orange,
        _ => Color::Green,
    }
}

/// Radius in pixels, never below 2 so that micro-quakes remain visible.
pub fn earthquake_radius(magnitude: Option<f64>) -> f64 {
    magnitude.map_or(MIN_RADIUS, |magnitude| (2.0 * magnitude).max(MIN_RADIUS))
}

const MIN_RADIUS: f64 = 2.0;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Popup {
    pub html: String,
    pub max_width: u32,
}

impl Popup {
    pub const MAX_WIDTH: u32 = 300;

    pub fn new(content: &impl Render) -> Self {
        Self { html: content.render().into_string(), max_width: Self::MAX_WIDTH }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CircleMarker {
    pub location: GeoLocation,
    pub radius: f64,
    pub color: Color,
    pub fill_opacity: f64,
    pub tooltip: String,
    pub popup: Popup,
}

#[derive(Debug, Serialize)]
pub struct PinMarker {
    pub location: GeoLocation,
    pub color: Color,
    pub popup: Popup,
}

/// Path options for a GeoJSON overlay.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PathStyle {
    pub color: Color,
    pub fill_color: Color,
    pub weight: u32,
    pub fill_opacity: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tsunami_is_always_blue() {
        for magnitude in [None, Some(-1.0), Some(0.0), Some(2.9), Some(3.0), Some(4.9), Some(5.0), Some(9.5)] {
            assert_eq!(earthquake_color(true, magnitude), Color::Blue, "{magnitude:?}");
        }
    }

    #[test]
    fn magnitude_thresholds_ok() {
        assert_eq!(earthquake_color(false, Some(9.1)), Color::Red);
        assert_eq!(earthquake_color(false, Some(5.0)), Color::Red);
        assert_eq!(earthquake_color(false, Some(4.99)), Color::Orange);
        assert_eq!(earthquake_color(false, Some(4.0)), Color::Orange);
        assert_eq!(earthquake_color(false, Some(3.0)), Color::Orange);
        assert_eq!(earthquake_color(false, Some(2.99)), Color::Green);
        assert_eq!(earthquake_color(false, Some(-0.5)), Color::Green);
        assert_eq!(earthquake_color(false, None), Color::Green);
    }

    #[test]
    fn radius_ok() {
        assert_eq!(earthquake_radius(Some(6.0)), 12.0);
        assert_eq!(earthquake_radius(Some(4.0)), 8.0);
        assert_eq!(earthquake_radius(Some(1.0)), 2.0);
        assert_eq!(earthquake_radius(Some(0.4)), 2.0);
        assert_eq!(earthquake_radius(Some(-1.2)), 2.0);
        assert_eq!(earthquake_radius(None), 2.0);
    }

    #[test]
    fn radius_is_max_of_floor_and_double_magnitude() {
        for tenths in -20..=100 {
            let magnitude = f64::from(tenths) / 10.0;
            assert_eq!(earthquake_radius(Some(magnitude)), (2.0 * magnitude).max(2.0));
        }
    }

    #[test]
    fn color_serializes_as_css_name() -> Result {
        assert_eq!(serde_json::to_string(&Color::Orange)?, r#""orange""#);
        Ok(())
    }
}
