use thiserror::Error;

/// A latitude/longitude pair in degrees.
///
/// Latitude is expected in [-90, 90] and longitude in [-180, 180]. [`GeoPoint::new`] does not check this, use
/// [`GeoPoint::validated`] when the input comes from an untrusted source.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct GeoPoint {
    latitude: f64,
    longitude: f64,
}

impl GeoPoint {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        GeoPoint { latitude, longitude }
    }

    pub fn validated(latitude: f64, longitude: f64) -> Result<Self, GeoPointError> {
        // Negated range checks so NaN is rejected as well
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(GeoPointError::InvalidLatitude(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(GeoPointError::InvalidLongitude(longitude));
        }
        Ok(GeoPoint { latitude, longitude })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum GeoPointError {
    #[error("invalid latitude: {0}, must be between -90 and 90")]
    InvalidLatitude(f64),
    #[error("invalid longitude: {0}, must be between -180 and 180")]
    InvalidLongitude(f64),
}
