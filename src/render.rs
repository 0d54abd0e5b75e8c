//! Popup and tooltip markup.

use maud::{Markup, html};

use crate::feed::{NOT_AVAILABLE, earthquake::EarthquakeRecord, flood::FloodEvent};

/// Timestamps are shown in UTC with millisecond precision.
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

pub fn earthquake_popup(record: &EarthquakeRecord) -> Markup {
    html! {
        b { "Place:" } " " (record.place) br;
        b { "Magnitude:" } " " (magnitude(record.magnitude)) br;
        b { "Time:" } " " (record.time.format(TIME_FORMAT)) br;
        b { "Tsunami:" } " " (record.tsunami_label()) br;
        a href=(record.url) target="_blank" rel="noopener" { "More info" }
    }
}

pub fn flood_popup(event: &FloodEvent) -> Markup {
    html! {
        b { "Flood Alert:" } " " (event.name) br;
        b { "Country:" } " " (event.country) br;
        b { "Alert Level:" } " "
        @match &event.alert_level {
            Some(alert_level) => (alert_level),
            None => (NOT_AVAILABLE),
        }
    }
}

pub fn drought_tooltip(name: Option<&str>) -> Markup {
    html! {
        b { "Region:" } " " (name.unwrap_or(NOT_AVAILABLE))
    }
}

/// Whole magnitudes keep one decimal place: `4.0`, not `4`.
pub fn magnitude(magnitude: Option<f64>) -> Markup {
    html! {
        @match magnitude {
            Some(magnitude) if magnitude.fract() == 0.0 => (format!("{magnitude:.1}")),
            Some(magnitude) => (magnitude),
            None => (NOT_AVAILABLE),
        }
    }
}
