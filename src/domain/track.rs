use crate::domain::GeoPoint;
use serde::Deserialize;

/// An ordered sequence of samples along a road.
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct Track {
    #[serde(default)]
    name: String,
    points: Vec<GeoPoint>,
}

impl Track {
    pub fn new(name: impl Into<String>, points: Vec<GeoPoint>) -> Self {
        Track { name: name.into(), points }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }
}
