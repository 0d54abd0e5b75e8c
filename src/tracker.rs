//! Sequential fetch → transform → render pipeline.

use std::path::PathBuf;

use bon::Builder;

use crate::{
    client::Client,
    feed::{drought, earthquake, flood},
    map::{MapBuilder, Section},
    page::Page,
    prelude::*,
};

pub const FLOOD_WARNING: &str = "⚠️ Unable to fetch flood data from GDACS.";
pub const DROUGHT_WARNING: &str = "⚠️ Please upload a valid drought_prone_areas.geojson file.";

#[must_use]
#[derive(Builder)]
pub struct Tracker {
    client: Client,
    earthquake_feed_url: Url,
    flood_feed_url: Url,

    #[builder(into)]
    drought_zones_path: PathBuf,
}

impl Tracker {
    /// Run every step once and compose the page.
    ///
    /// Only the earthquake feed is fatal, the other sources degrade to a warning.
    pub async fn run(&self) -> Result<Page> {
        let mut map = MapBuilder::default();
        let earthquakes = earthquake::fetch(&self.client, &self.earthquake_feed_url).await?;
        map.add_earthquakes(&earthquakes);
        self.add_floods(&mut map).await;
        self.add_drought_zones(&mut map).await;
        Ok(Page { map: map.finalize(), earthquakes })
    }

    async fn add_floods(&self, map: &mut MapBuilder) {
        match flood::fetch(&self.client, &self.flood_feed_url).await {
            Ok(events) => map.add_floods(&events),
            Err(error) => {
                warn!("Failed to fetch the flood alerts: {error:#}");
                map.warn(Section::Floods, FLOOD_WARNING);
            }
        }
    }

    async fn add_drought_zones(&self, map: &mut MapBuilder) {
        match drought::load(&self.drought_zones_path).await {
            Ok(zones) => map.add_drought_zones(&zones),
            Err(error) => {
                warn!("Failed to load the drought zones: {error:#}");
                map.warn(Section::DroughtZones, DROUGHT_WARNING);
            }
        }
    }
}
