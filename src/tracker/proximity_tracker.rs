use crate::distance::DistanceFormula;
use crate::domain::{GeoPoint, ProximityEvent, ReferencePoint};
use crate::extensions::distance_ext::DistanceConversions;
use std::collections::HashSet;
use tracing::{debug, trace};

pub const DEFAULT_THRESHOLD_KM: f64 = 5.0;

/// Tracks a moving position against a fixed set of reference points during one session.
///
/// Each reference point fires a [`ProximityEvent`] at most once per session: the first time a sample is within the
/// threshold distance. There is no transition back, a reference point that leaves the range and enters it again
/// stays silent. Start a new session by creating a new tracker.
#[derive(Debug)]
pub struct ProximityTracker<'a> {
    references: &'a [ReferencePoint],
    threshold_km: f64,
    formula: DistanceFormula,
    fired: HashSet<&'a str>,
}

impl<'a> ProximityTracker<'a> {
    pub fn new(references: &'a [ReferencePoint], threshold_km: f64, formula: DistanceFormula) -> Self {
        ProximityTracker {
            references,
            threshold_km,
            formula,
            fired: HashSet::with_capacity(references.len()),
        }
    }

    pub fn with_defaults(references: &'a [ReferencePoint]) -> Self {
        Self::new(references, DEFAULT_THRESHOLD_KM, DistanceFormula::default())
    }

    pub fn threshold_km(&self) -> f64 {
        self.threshold_km
    }

    pub fn formula(&self) -> DistanceFormula {
        self.formula
    }

    /// Returns whether the reference point with the given id already fired in this session.
    pub fn has_fired(&self, reference_id: &str) -> bool {
        self.fired.contains(reference_id)
    }

    /// Processes the sample at position `index` of the track.
    ///
    /// Samples must be passed in track order, the order decides which sample index fires an event.
    pub fn process(&mut self, sample: GeoPoint, index: usize) -> SampleReport<'a> {
        let mut distances = Vec::with_capacity(self.references.len());
        let mut events = Vec::new();

        for reference in self.references {
            let distance_km = self.formula.distance(sample, reference.point()).meters_to_km();
            trace!(index, reference = reference.id(), distance_km, "📏 Computed distance");
            distances.push(ReferenceDistance {
                reference_id: reference.id(),
                distance_km,
            });

            // NaN never compares as within range, degenerate samples cannot fire
            if distance_km <= self.threshold_km && self.fired.insert(reference.id()) {
                debug!(index, reference = reference.id(), "📍 Entered proximity of '{}' at {:.3} km", reference.id(), distance_km);
                events.push(ProximityEvent::new(reference.id(), distance_km, index));
            }
        }

        SampleReport { distances, events }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct ReferenceDistance<'a> {
    reference_id: &'a str,
    distance_km: f64,
}

impl<'a> ReferenceDistance<'a> {
    pub fn reference_id(&self) -> &'a str {
        self.reference_id
    }

    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }
}

/// The outcome of processing one sample: the distance to every reference point in reference order, and the events
/// that fired for this sample.
#[derive(Clone, PartialEq, Debug)]
pub struct SampleReport<'a> {
    distances: Vec<ReferenceDistance<'a>>,
    events: Vec<ProximityEvent>,
}

impl<'a> SampleReport<'a> {
    pub fn distances(&self) -> &[ReferenceDistance<'a>] {
        &self.distances
    }

    pub fn events(&self) -> &[ProximityEvent] {
        &self.events
    }

    pub fn into_events(self) -> Vec<ProximityEvent> {
        self.events
    }
}
