//! [USGS real-time earthquake feed][1].
//!
//! [1]: https://earthquake.usgs.gov/earthquakes/feed/v1.0/geojson.php

use bon::Builder;
use serde_json::Value;

use crate::{
    client::Client,
    feed::NOT_AVAILABLE,
    geojson::{Feature, FeatureCollection, GeoLocation},
    prelude::*,
};

/// Single seismic event.
#[must_use]
#[derive(Clone, Debug, Builder)]
pub struct EarthquakeRecord {
    #[builder(into)]
    pub place: String,

    /// USGS occasionally publishes events before the magnitude is computed.
    pub magnitude: Option<f64>,

    pub time: DateTime<Utc>,
    pub location: GeoLocation,
    pub url: Url,
    pub is_tsunami: bool,
}

impl EarthquakeRecord {
    pub const fn tsunami_label(&self) -> &'static str {
        if self.is_tsunami { "Yes" } else { "No" }
    }
}

/// Fetch the feed and normalize every located event.
///
/// There is no fallback for this feed: the page is not worth rendering without it.
#[instrument(skip_all, fields(url = %url))]
pub async fn fetch(client: &Client, url: &Url) -> Result<Vec<EarthquakeRecord>> {
    info!("🔎 Fetching earthquakes…");
    let collection = client
        .get_json::<FeatureCollection<Properties>>(url)
        .await
        .context("failed to fetch the earthquake feed")?;
    let records = normalize(collection);
    info!(n_records = records.len(), "🌋 Fetched");
    Ok(records)
}

fn normalize(collection: FeatureCollection<Properties>) -> Vec<EarthquakeRecord> {
    collection.features.into_iter().filter_map(into_record).collect()
}

fn into_record(feature: Feature<Properties>) -> Option<EarthquakeRecord> {
    let properties = feature.properties;
    let Some(location) = feature.geometry.as_ref().and_then(|point| point.location()) else {
        warn!(place = ?properties.place, "Skipping an earthquake without a location");
        return None;
    };
    let Some(time) = DateTime::from_timestamp_millis(properties.time) else {
        warn!(properties.time, "Skipping an earthquake with an out-of-range timestamp");
        return None;
    };
    Some(
        EarthquakeRecord::builder()
            .place(properties.place.unwrap_or_else(|| NOT_AVAILABLE.to_string()))
            .maybe_magnitude(properties.mag)
            .time(time)
            .location(location)
            .url(properties.url)
            .is_tsunami(is_tsunami(properties.tsunami.as_ref()))
            .build(),
    )
}

/// The flag is raised only when the source value equals one.
fn is_tsunami(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Number(number)) => number.as_f64() == Some(1.0),
        Some(Value::Bool(flag)) => *flag,
        _ => false,
    }
}

#[derive(Debug, Deserialize)]
struct Properties {
    #[serde(default)]
    place: Option<String>,

    #[serde(default)]
    mag: Option<f64>,

    /// Milliseconds since the Unix epoch.
    time: i64,

    #[serde(default)]
    tsunami: Option<Value>,

    url: Url,
}
