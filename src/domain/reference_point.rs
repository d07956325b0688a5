use crate::domain::GeoPoint;
use serde::Deserialize;

/// A named point a moving sample is tracked against, for instance a city.
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct ReferencePoint {
    #[serde(rename = "name")]
    id: String,
    #[serde(flatten)]
    point: GeoPoint,
}

impl ReferencePoint {
    pub fn new(id: impl Into<String>, point: GeoPoint) -> Self {
        ReferencePoint { id: id.into(), point }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn point(&self) -> GeoPoint {
        self.point
    }
}
