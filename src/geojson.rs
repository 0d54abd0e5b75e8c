//! The subset of [GeoJSON][1] the feeds speak.
//!
//! [1]: https://datatracker.ietf.org/doc/html/rfc7946

use bon::Builder;
use monostate::MustBe;

use crate::prelude::*;

#[derive(Deserialize)]
#[must_use]
pub struct FeatureCollection<P, G = Point> {
    #[serde(rename = "type")]
    #[allow(dead_code)]
    pub type_: MustBe!("FeatureCollection"),

    /// Some feeds omit the array altogether when there is nothing to report.
    #[serde(default = "Vec::new")]
    pub features: Vec<Feature<P, G>>,
}

#[derive(Debug, Deserialize)]
#[must_use]
pub struct Feature<P, G = Point> {
    /// Missing or `null` geometry.
    pub geometry: Option<G>,

    pub properties: P,
}

#[derive(Debug, Deserialize)]
pub struct Point {
    pub coordinates: Vec<f64>,
}

impl Point {
    /// GeoJSON orders positions as `[longitude, latitude, elevation?]`.
    pub fn location(&self) -> Option<GeoLocation> {
        match *self.coordinates.as_slice() {
            [longitude, latitude, ..] => {
                Some(GeoLocation::builder().latitude(latitude).longitude(longitude).build())
            }
            _ => None,
        }
    }
}

/// Any GeoJSON geometry, with positions checked so that Leaflet can draw it.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Point { coordinates: Position },
    MultiPoint { coordinates: Vec<Position> },
    LineString { coordinates: Vec<Position> },
    MultiLineString { coordinates: Vec<Vec<Position>> },
    Polygon { coordinates: Vec<Vec<Position>> },
    MultiPolygon { coordinates: Vec<Vec<Vec<Position>>> },
    GeometryCollection { geometries: Vec<Geometry> },
}

/// `[longitude, latitude, elevation?]`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(try_from = "Vec<f64>")]
pub struct Position(Vec<f64>);

impl TryFrom<Vec<f64>> for Position {
    type Error = String;

    fn try_from(coordinates: Vec<f64>) -> Result<Self, Self::Error> {
        if coordinates.len() < 2 {
            return Err(format!("a position needs at least two coordinates, got {coordinates:?}"));
        }
        if coordinates.iter().any(|coordinate| !coordinate.is_finite()) {
            return Err(format!("non-finite coordinate in {coordinates:?}"));
        }
        Ok(Self(coordinates))
    }
}

impl Serialize for Position {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

/// Serialized the way Leaflet accepts a `LatLng`.
#[derive(Copy, Clone, Debug, PartialEq, Builder, Serialize)]
pub struct GeoLocation {
    #[serde(rename = "lat")]
    pub latitude: f64,

    #[serde(rename = "lng")]
    pub longitude: f64,
}
