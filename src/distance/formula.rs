use crate::domain::GeoPoint;
use serde::Deserialize;

/// Mean Earth radius in meters, both formulas assume a spherical Earth.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// The great-circle distance formula used for a whole tracking session.
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceFormula {
    #[default]
    Haversine,
    VincentySpherical,
}

impl DistanceFormula {
    /// Returns the distance between `a` and `b` in meters.
    pub fn distance(&self, a: GeoPoint, b: GeoPoint) -> f64 {
        match self {
            DistanceFormula::Haversine => haversine(a, b),
            DistanceFormula::VincentySpherical => vincenty_spherical(a, b),
        }
    }
}

/// Great-circle distance in meters using the Haversine formula.
pub fn haversine(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat_from = a.latitude().to_radians();
    let lat_to = b.latitude().to_radians();
    let lat_delta = lat_to - lat_from;
    let lon_delta = (b.longitude() - a.longitude()).to_radians();

    let h = (lat_delta / 2.0).sin().powi(2) + lat_from.cos() * lat_to.cos() * (lon_delta / 2.0).sin().powi(2);
    // Rounding can push h slightly past 1 for antipodal points, asin would return NaN
    let angle = 2.0 * h.sqrt().clamp(0.0, 1.0).asin();

    angle * EARTH_RADIUS_M
}

/// Great-circle distance in meters using the special case of the Vincenty formula for a sphere.
pub fn vincenty_spherical(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat_from = a.latitude().to_radians();
    let lat_to = b.latitude().to_radians();
    let lon_delta = (b.longitude() - a.longitude()).to_radians();

    let (sin_from, cos_from) = lat_from.sin_cos();
    let (sin_to, cos_to) = lat_to.sin_cos();
    let (sin_delta, cos_delta) = lon_delta.sin_cos();

    let y = (cos_to * sin_delta).powi(2) + (cos_from * sin_to - sin_from * cos_to * cos_delta).powi(2);
    let x = sin_from * sin_to + cos_from * cos_to * cos_delta;

    y.sqrt().atan2(x) * EARTH_RADIUS_M
}
