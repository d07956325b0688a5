use crate::app_config::Simulation;
use crate::domain::{GeoPoint, ProximityEvent, ReferencePoint, Track};
use crate::tracker::{ProximityTracker, SampleReport};
use ordered_float::OrderedFloat;
use std::time::Duration;
use tokio::time::{Instant, sleep};
use tracing::{debug, info, instrument};

/// Receives the outcome of a simulation, sample by sample.
pub trait Reporter {
    fn track_started(&mut self, track: &Track, references: &[ReferencePoint]);

    fn sample(&mut self, index: usize, sample: GeoPoint, report: &SampleReport);

    fn approaching(&mut self, event: &ProximityEvent);
}

#[derive(Debug)]
pub struct SimulationSummary {
    samples: usize,
    events: Vec<ProximityEvent>,
    elapsed: Duration,
}

impl SimulationSummary {
    pub fn samples(&self) -> usize {
        self.samples
    }

    pub fn events(&self) -> &[ProximityEvent] {
        &self.events
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }
}

/// Drives a single tracking session over every sample of the track, in track order.
#[instrument(fields(track = track.name()), skip_all)]
pub async fn simulate<R: Reporter>(track: &Track, references: &[ReferencePoint], settings: &Simulation, reporter: &mut R) -> SimulationSummary {
    info!("🚗 Simulation started");
    let start = Instant::now();

    reporter.track_started(track, references);
    let mut tracker = ProximityTracker::new(references, settings.threshold_km(), settings.formula());
    debug!(threshold_km = tracker.threshold_km(), formula = ?tracker.formula(), "🚗 Tracking {} cities", references.len());

    let mut events = Vec::new();
    for (index, sample) in track.points().iter().enumerate() {
        let report = tracker.process(*sample, index);
        reporter.sample(index, *sample, &report);
        for event in report.events() {
            reporter.approaching(event);
        }
        events.extend(report.into_events());

        if let Some(delay) = settings.step_delay() {
            if index + 1 < track.points().len() {
                sleep(delay).await;
            }
        }
    }

    let elapsed = Instant::now() - start;
    info!(elapsed = ?elapsed, "🚗 Simulation finished, {} approached", events.len());

    SimulationSummary {
        samples: track.points().len(),
        events,
        elapsed,
    }
}

/// Renders the simulation as a table per sample through `tracing`.
#[derive(Default, Debug)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn track_started(&mut self, track: &Track, references: &[ReferencePoint]) {
        let name = if track.name().is_empty() { "unnamed" } else { track.name() };
        info!("🛣️ Track name: {}, {} points, {} cities", name, track.points().len(), references.len());
    }

    fn sample(&mut self, index: usize, sample: GeoPoint, report: &SampleReport) {
        info!("📌 Current point #{} lat, lng: {:.5}, {:.5}", index, sample.latitude(), sample.longitude());
        info!("{}", format_header());
        for distance in report.distances() {
            info!("{}", format_row(distance.reference_id(), distance.distance_km()));
        }

        if let Some(nearest) = report.distances().iter().min_by_key(|d| OrderedFloat(d.distance_km())) {
            debug!("Nearest city is {} at {:.3} km", nearest.reference_id(), nearest.distance_km());
        }
    }

    fn approaching(&mut self, event: &ProximityEvent) {
        info!(sample = event.sample_index(), "🏁 City {} is approaching, {:.3} km away", event.reference_id(), event.distance_km());
    }
}

fn format_header() -> String {
    format!("| {:<30.30} | {:>13} |", "City name", "Distance [km]")
}

fn format_row(name: &str, distance_km: f64) -> String {
    format!("| {:<30.30} | {:>13.3} |", name, distance_km)
}
