//! [GDACS][1] flood alerts.
//!
//! [1]: https://www.gdacs.org/gdacsapi/swagger/index.html

use std::fmt::{Display, Formatter};

use bon::Builder;

use crate::{
    client::Client,
    feed::NOT_AVAILABLE,
    geojson::{Feature, FeatureCollection, GeoLocation},
    prelude::*,
};

/// Active flood event.
#[must_use]
#[derive(Clone, Debug, Builder)]
pub struct FloodEvent {
    #[builder(into)]
    pub name: String,

    #[builder(into)]
    pub country: String,

    pub alert_level: Option<AlertLevel>,
    pub location: GeoLocation,
}

/// GDACS alert level.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AlertLevel {
    Green,
    Orange,
    Red,

    /// Anything GDACS may come up with, kept verbatim.
    Other(String),
}

impl From<String> for AlertLevel {
    fn from(level: String) -> Self {
        if level.eq_ignore_ascii_case("green") {
            Self::Green
        } else if level.eq_ignore_ascii_case("orange") {
            Self::Orange
        } else if level.eq_ignore_ascii_case("red") {
            Self::Red
        } else {
            Self::Other(level)
        }
    }
}

impl Display for AlertLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Green => f.write_str("Green"),
            Self::Orange => f.write_str("Orange"),
            Self::Red => f.write_str("Red"),
            Self::Other(level) => f.write_str(level),
        }
    }
}

#[instrument(skip_all, fields(url = %url))]
pub async fn fetch(client: &Client, url: &Url) -> Result<Vec<FloodEvent>> {
    info!("🔎 Fetching flood alerts…");
    let collection = client
        .get_json::<FeatureCollection<Properties>>(url)
        .await
        .context("failed to fetch the flood alerts")?;
    let events = normalize(collection);
    info!(n_events = events.len(), "🌊 Fetched");
    Ok(events)
}

fn normalize(collection: FeatureCollection<Properties>) -> Vec<FloodEvent> {
    collection.features.into_iter().filter_map(into_event).collect()
}

fn into_event(feature: Feature<Properties>) -> Option<FloodEvent> {
    let properties = feature.properties;
    let Some(location) = feature.geometry.as_ref().and_then(|point| point.location()) else {
        warn!(name = ?properties.eventname, "Skipping a flood alert without a location");
        return None;
    };
    Some(
        FloodEvent::builder()
            .name(properties.eventname.unwrap_or_else(|| NOT_AVAILABLE.to_string()))
            .country(properties.country.unwrap_or_else(|| NOT_AVAILABLE.to_string()))
            .maybe_alert_level(properties.alertlevel.map(AlertLevel::from))
            .location(location)
            .build(),
    )
}

#[derive(Debug, Deserialize)]
struct Properties {
    #[serde(default)]
    eventname: Option<String>,

    #[serde(default)]
    country: Option<String>,

    #[serde(default)]
    alertlevel: Option<String>,
}
