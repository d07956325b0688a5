use crate::app_config::AppConfig;
use crate::simulation::{LogReporter, simulate};
use std::path::PathBuf;
use tracing::info;

mod app_config;
mod distance;
mod domain;
mod extensions;
mod geo_point_deserializer;
mod loader;
mod simulation;
mod tracker;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load()?;
    info!("✅  Loaded configuration");

    // The track file can be passed as the first argument
    let track_file = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| config.data().track_file().to_path_buf());

    let (cities, track) = tokio::try_join!(loader::load_cities(config.data().cities_file()), loader::load_track(&track_file))?;
    info!("✅  Loaded {} cities and track '{}'", cities.len(), track.name());

    let summary = simulate(&track, &cities, config.simulation(), &mut LogReporter).await;

    info!(
        "🔥 Simulation was successfully finished, {} points, {} cities approached, elapsed time: {:.2} ms",
        summary.samples(),
        summary.events().len(),
        summary.elapsed().as_secs_f64() * 1000.0
    );

    Ok(())
}
