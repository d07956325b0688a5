use crate::domain::GeoPoint;
use serde::de::Error;
use serde::{Deserialize, Deserializer};

impl<'de> Deserialize<'de> for GeoPoint {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Debug, Deserialize)]
        pub struct Inner {
            latitude: f64,
            longitude: f64,
        }

        let inner = Inner::deserialize(deserializer)?;
        GeoPoint::validated(inner.latitude, inner.longitude).map_err(Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ReferencePoint;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    #[test]
    fn deserializes_a_geo_point() -> Result<(), serde_json::Error> {
        let point: GeoPoint = serde_json::from_value(json!({ "latitude": 50.0755, "longitude": 14.4378 }))?;

        assert_eq!(point, GeoPoint::new(50.0755, 14.4378));
        Ok(())
    }

    #[rstest]
    #[case(json!({ "latitude": 91.0, "longitude": 0.0 }), "invalid latitude: 91, must be between -90 and 90")]
    #[case(json!({ "latitude": 0.0, "longitude": -190.5 }), "invalid longitude: -190.5, must be between -180 and 180")]
    fn rejects_out_of_range_coordinates(#[case] value: serde_json::Value, #[case] message: &str) {
        let result = serde_json::from_value::<GeoPoint>(value);

        assert_eq!(result.unwrap_err().to_string(), message);
    }

    #[test]
    fn deserializes_a_flattened_reference_point() -> Result<(), serde_json::Error> {
        let reference: ReferencePoint = serde_json::from_value(json!({ "name": "Brno", "latitude": 49.1951, "longitude": 16.6068 }))?;

        assert_eq!(reference, ReferencePoint::new("Brno", GeoPoint::new(49.1951, 16.6068)));
        Ok(())
    }

    #[test]
    fn deserializes_integer_coordinates_of_a_flattened_reference_point() -> Result<(), serde_json::Error> {
        let reference: ReferencePoint = serde_json::from_str(r#"{ "name": "Null Island", "latitude": 0, "longitude": 15 }"#)?;

        assert_eq!(reference, ReferencePoint::new("Null Island", GeoPoint::new(0.0, 15.0)));
        Ok(())
    }

    #[test]
    fn rejects_a_flattened_reference_point_with_an_invalid_latitude() {
        let result = serde_json::from_value::<ReferencePoint>(json!({ "name": "Nowhere", "latitude": 120.0, "longitude": 0.0 }));

        assert!(result.is_err());
    }
}
