/// A trait to convert distances between meters and kilometers.
pub trait DistanceConversions {
    /// Returns the value in kilometers by treating `self` as the value in meters.
    fn meters_to_km(self) -> Self;

    /// Returns the value in meters by treating `self` as the value in kilometers.
    fn km_to_meters(self) -> Self;
}

macro_rules! impl_distance_conversions {
    ($($t:ty)*) => ($(
        impl DistanceConversions for $t {
            fn meters_to_km(self) -> $t {
                self / 1000.0
            }
            fn km_to_meters(self) -> $t {
                self * 1000.0
            }
        }
    )*)
}

impl_distance_conversions! { f32 f64 }

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, 0.0)]
    #[case(5000.0, 5.0)]
    #[case(343_500.0, 343.5)]
    fn meters_to_km_f64(#[case] input: f64, #[case] expected: f64) {
        assert_eq!(input.meters_to_km(), expected);
    }

    #[rstest]
    #[case(0.0, 0.0)]
    #[case(5.0, 5000.0)]
    #[case(0.25, 250.0)]
    fn km_to_meters_f64(#[case] input: f64, #[case] expected: f64) {
        assert_eq!(input.km_to_meters(), expected);
    }

    #[rstest]
    #[case(1500.0, 1.5)]
    fn meters_to_km_f32(#[case] input: f32, #[case] expected: f32) {
        assert_eq!(input.meters_to_km(), expected);
    }

    #[test]
    fn nan_stays_nan() {
        assert!(f64::NAN.meters_to_km().is_nan());
    }
}
