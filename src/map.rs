//! Scene builder: the map accumulates layers and warnings, then gets finalized once.

pub mod marker;

use maud::html;
use serde_json::{Value, json};

use self::marker::{
    CircleMarker,
    Color,
    PathStyle,
    PinMarker,
    Popup,
    earthquake_color,
    earthquake_radius,
};
use crate::{
    feed::{drought::DroughtZone, earthquake::EarthquakeRecord, flood::FloodEvent},
    geojson::GeoLocation,
    prelude::*,
    render,
};

/// Page section a warning belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Section {
    Earthquakes,
    Floods,
    DroughtZones,
}

impl Section {
    pub const ALL: [Self; 3] = [Self::Earthquakes, Self::Floods, Self::DroughtZones];

    pub const fn heading(self) -> &'static str {
        match self {
            Self::Earthquakes => "📍 Earthquakes & Tsunami Alerts",
            Self::Floods => "🌊 Flood Alerts (GDACS)",
            Self::DroughtZones => "🌵 Drought-Prone Areas",
        }
    }

    pub const fn layer_name(self) -> &'static str {
        match self {
            Self::Earthquakes => "Earthquakes",
            Self::Floods => "Flood Alerts",
            Self::DroughtZones => "Drought Zones",
        }
    }
}

#[derive(Debug)]
pub struct Warning {
    pub section: Section,
    pub message: &'static str,
}

/// Named, toggleable overlay.
#[derive(Debug, Serialize)]
pub struct Layer {
    pub name: &'static str,

    #[serde(flatten)]
    pub overlay: Overlay,
}

#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Overlay {
    Circles { markers: Vec<CircleMarker> },
    Pins { markers: Vec<PinMarker> },
    GeoJson { style: PathStyle, data: Value },
}

#[derive(Debug, Serialize)]
pub struct View {
    pub center: GeoLocation,
    pub zoom: u8,
}

impl Default for View {
    fn default() -> Self {
        Self { center: GeoLocation::builder().latitude(10.0).longitude(20.0).build(), zoom: 2 }
    }
}

#[must_use]
#[derive(Debug, Default)]
pub struct MapBuilder {
    view: View,
    layers: Vec<Layer>,
    warnings: Vec<Warning>,
}

impl MapBuilder {
    pub fn add_earthquakes(&mut self, records: &[EarthquakeRecord]) {
        let markers = records
            .iter()
            .map(|record| CircleMarker {
                location: record.location,
                radius: earthquake_radius(record.magnitude),
                color: earthquake_color(record.is_tsunami, record.magnitude),
                fill_opacity: 0.7,
                tooltip: html! { (record.place) }.into_string(),
                popup: Popup::new(&render::earthquake_popup(record)),
            })
            .collect();
        self.push_layer(Section::Earthquakes, Overlay::Circles { markers });
    }

    pub fn add_floods(&mut self, events: &[FloodEvent]) {
        let markers = events
            .iter()
            .map(|event| PinMarker {
                location: event.location,
                color: Color::Blue,
                popup: Popup::new(&render::flood_popup(event)),
            })
            .collect();
        self.push_layer(Section::Floods, Overlay::Pins { markers });
    }

    pub fn add_drought_zones(&mut self, zones: &[DroughtZone]) {
        let features: Vec<Value> = zones
            .iter()
            .map(|zone| {
                json!({
                    "type": "Feature",
                    "geometry": zone.geometry,
                    "properties": {
                        "tooltip": render::drought_tooltip(zone.name.as_deref()).into_string(),
                    },
                })
            })
            .collect();
        let style = PathStyle {
            color: Color::Brown,
            fill_color: Color::Brown,
            weight: 1,
            fill_opacity: 0.2,
        };
        let data = json!({ "type": "FeatureCollection", "features": features });
        self.push_layer(Section::DroughtZones, Overlay::GeoJson { style, data });
    }

    /// Show the warning under the section heading instead of its layer.
    pub fn warn(&mut self, section: Section, message: &'static str) {
        self.warnings.push(Warning { section, message });
    }

    /// Attach the layer control and freeze the map.
    pub fn finalize(self) -> Map {
        debug!(n_layers = self.layers.len(), n_warnings = self.warnings.len(), "Finalizing the map");
        Map { view: self.view, layers: self.layers, layer_control: true, warnings: self.warnings }
    }

    fn push_layer(&mut self, section: Section, overlay: Overlay) {
        self.layers.push(Layer { name: section.layer_name(), overlay });
    }
}

#[must_use]
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Map {
    pub view: View,
    pub layers: Vec<Layer>,
    pub layer_control: bool,

    #[serde(skip)]
    pub warnings: Vec<Warning>,
}

impl Map {
    #[cfg(test)]
    pub fn layer(&self, section: Section) -> Option<&Layer> {
        self.layers.iter().find(|layer| layer.name == section.layer_name())
    }

    pub fn warnings(&self, section: Section) -> impl Iterator<Item = &'static str> + '_ {
        self.warnings.iter().filter(move |warning| warning.section == section).map(|warning| warning.message)
    }
}
