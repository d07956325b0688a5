mod proximity_tracker;

pub use proximity_tracker::{DEFAULT_THRESHOLD_KM, ProximityTracker, SampleReport};
