//! Drought-prone regions from a static GeoJSON file.

use std::{
    io,
    path::{Path, PathBuf},
};

use crate::{
    geojson::{Feature, FeatureCollection, Geometry},
    prelude::*,
};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read `{}`: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to parse `{}`: {source}", .path.display())]
    Parse { path: PathBuf, source: serde_json::Error },
}

#[must_use]
#[derive(Clone, Debug)]
pub struct DroughtZone {
    pub name: Option<String>,

    pub geometry: Geometry,
}

#[instrument(skip_all, fields(path = %path.display()))]
pub async fn load(path: &Path) -> Result<Vec<DroughtZone>, Error> {
    info!("📂 Loading drought zones…");
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| Error::Read { path: path.to_path_buf(), source })?;
    let zones = parse(&text).map_err(|source| Error::Parse { path: path.to_path_buf(), source })?;
    info!(n_zones = zones.len(), "🌵 Loaded");
    Ok(zones)
}

fn parse(text: &str) -> Result<Vec<DroughtZone>, serde_json::Error> {
    let collection: FeatureCollection<Properties, Geometry> = serde_json::from_str(text)?;
    Ok(collection.features.into_iter().filter_map(into_zone).collect())
}

fn into_zone(feature: Feature<Properties, Geometry>) -> Option<DroughtZone> {
    let Some(geometry) = feature.geometry else {
        warn!(name = ?feature.properties.name, "Skipping a drought zone without geometry");
        return None;
    };
    Some(DroughtZone { name: feature.properties.name, geometry })
}

#[derive(Debug, Deserialize)]
struct Properties {
    #[serde(default)]
    name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_ok() -> Result {
        // language=json
        let zones = parse(
            r#"
            {
              "type": "FeatureCollection",
              "features": [
                {
                  "type": "Feature",
                  "properties": {"name": "Sahel"},
                  "geometry": {"type": "Polygon", "coordinates": [[[-17.0, 12.0], [38.0, 12.0], [38.0, 18.0], [-17.0, 18.0], [-17.0, 12.0]]]}
                },
                {
                  "type": "Feature",
                  "properties": {},
                  "geometry": {"type": "MultiPolygon", "coordinates": [[[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]]]}
                },
                {"type": "Feature", "properties": {"name": "Ghost"}, "geometry": null}
              ]
            }
            "#,
        )?;
        assert_eq!(zones.len(), 2);
        assert_eq!(zones[0].name.as_deref(), Some("Sahel"));
        assert!(matches!(zones[0].geometry, Geometry::Polygon { .. }));
        assert_eq!(zones[1].name, None);
        assert!(matches!(zones[1].geometry, Geometry::MultiPolygon { .. }));
        Ok(())
    }

    #[test]
    fn not_a_collection_err() {
        // language=json
        assert!(parse(r#"{"type": "Polygon", "coordinates": []}"#).is_err());
        assert!(parse("drought").is_err());
    }

    #[test]
    fn invalid_geometry_err() {
        // language=json
        let result = parse(
            r#"{"type": "FeatureCollection", "features": [{"type": "Feature", "properties": {"name": "Answer"}, "geometry": 42}]}"#,
        );
        assert!(result.is_err());

        // language=json
        let result = parse(
            r#"{"type": "FeatureCollection", "features": [{"type": "Feature", "properties": {"name": "Fruit"}, "geometry": {"type": "Banana"}}]}"#,
        );
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn invalid_file_err() -> Result {
        let path = std::env::temp_dir().join(format!("disastermap-{}-invalid.geojson", std::process::id()));
        // language=json
        tokio::fs::write(
            &path,
            r#"{"type": "FeatureCollection", "features": [{"type": "Feature", "properties": {}, "geometry": {"type": "Polygon", "coordinates": [[7]]}}]}"#,
        )
        .await?;
        let result = load(&path).await;
        tokio::fs::remove_file(&path).await?;
        assert!(matches!(result, Err(Error::Parse { .. })), "{result:?}");
        Ok(())
    }

    #[tokio::test]
    async fn missing_file_err() {
        let result = load(Path::new("definitely/missing/drought_prone_areas.geojson")).await;
        assert!(matches!(result, Err(Error::Read { .. })), "{result:?}");
    }
}
