//! The standalone HTML page: headings, warnings, the map widget and the raw data table.

use maud::{DOCTYPE, Markup, PreEscaped, Render, html};

use crate::{
    feed::earthquake::EarthquakeRecord,
    map::{Map, Section},
    prelude::*,
    render,
};

pub const MAP_WIDTH: u32 = 1200;
pub const MAP_HEIGHT: u32 = 700;

const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";

#[must_use]
pub struct Page {
    pub map: Map,
    pub earthquakes: Vec<EarthquakeRecord>,
}

impl Page {
    pub fn render(&self) -> Result<Markup> {
        let map = script_safe(&serde_json::to_string(&self.map).context("failed to serialize the map")?);
        Ok(html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="utf-8";
                    meta name="viewport" content="width=device-width, initial-scale=1";
                    title { "Live Multi-Disaster Map" }
                    link rel="stylesheet" href=(LEAFLET_CSS);
                    script src=(LEAFLET_JS) {}
                    style { (PreEscaped(include_str!("page/style.css"))) }
                }
                body {
                    h1 { "🌐 Live Multi-Disaster Tracker" }
                    p.caption { "Earthquakes, Tsunami Alerts, Floods & Drought-Prone Areas" }
                    @for section in Section::ALL {
                        h2 { (section.heading()) }
                        @for warning in self.map.warnings(section) {
                            div.warning role="alert" { (warning) }
                        }
                    }
                    div #map style=(format!("width: {MAP_WIDTH}px; height: {MAP_HEIGHT}px;")) {}
                    details {
                        summary { "📊 View Earthquake Data" }
                        (EarthquakeTable(&self.earthquakes))
                    }
                    script {
                        (PreEscaped("const MAP = ")) (PreEscaped(map)) (PreEscaped(";\n"))
                        (PreEscaped(include_str!("page/map.js")))
                    }
                }
            }
        })
    }
}

/// Raw earthquake records for inspection.
struct EarthquakeTable<'a>(&'a [EarthquakeRecord]);

impl Render for EarthquakeTable<'_> {
    fn render(&self) -> Markup {
        html! {
            table {
                thead {
                    tr {
                        th { "Place" } th { "Magnitude" } th { "Time" } th { "Longitude" }
                        th { "Latitude" } th { "URL" } th { "Tsunami" }
                    }
                }
                tbody {
                    @for record in self.0 {
                        tr {
                            td { (record.place) }
                            td { (render::magnitude(record.magnitude)) }
                            td { (record.time.format(render::TIME_FORMAT)) }
                            td { (record.location.longitude) }
                            td { (record.location.latitude) }
                            td { a href=(record.url) target="_blank" rel="noopener" { (record.url) } }
                            td { (record.tsunami_label()) }
                        }
                    }
                }
            }
        }
    }
}

/// Keep embedded JSON from closing the surrounding `<script>` element.
fn script_safe(json: &str) -> String {
    json.replace("</", r"<\/").replace("<!--", r"<\!--")
}
