use crate::extensions::distance_ext::DistanceConversions;

/// Signals that a sample came within the threshold distance of a reference point for the first time in a session.
#[derive(Clone, PartialEq, Debug)]
pub struct ProximityEvent {
    reference_id: String,
    distance_km: f64,
    sample_index: usize,
}

impl ProximityEvent {
    pub fn new(reference_id: impl Into<String>, distance_km: f64, sample_index: usize) -> Self {
        ProximityEvent {
            reference_id: reference_id.into(),
            distance_km,
            sample_index,
        }
    }

    pub fn reference_id(&self) -> &str {
        &self.reference_id
    }

    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }

    pub fn distance_meters(&self) -> f64 {
        self.distance_km.km_to_meters()
    }

    pub fn sample_index(&self) -> usize {
        self.sample_index
    }
}
