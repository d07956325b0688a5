use crate::domain::{ReferencePoint, Track};
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::task::JoinError;
use tokio::{fs, task};
use tracing::{debug, info, instrument};

/// Loads the reference points (cities) from a JSON array of `{ "name", "latitude", "longitude" }` objects.
#[instrument]
pub async fn load_cities(path: &Path) -> Result<Vec<ReferencePoint>, LoaderError> {
    info!("🏙️ Loading cities...");
    let cities: Vec<ReferencePoint> = read_json(path).await?;

    let mut names = HashSet::with_capacity(cities.len());
    if let Some(duplicate) = cities.iter().find(|city| !names.insert(city.id())) {
        return Err(LoaderError::DuplicateReference {
            name: duplicate.id().to_string(),
            path: path.to_path_buf(),
        });
    }

    info!("🏙️ Loading cities... OK, {} loaded", cities.len());
    Ok(cities)
}

/// Loads a track from a JSON object with an optional `name` and a `points` array of coordinates.
#[instrument]
pub async fn load_track(path: &Path) -> Result<Track, LoaderError> {
    info!("🛣️ Loading track...");
    let track: Track = read_json(path).await?;
    info!("🛣️ Loading track... OK, '{}' with {} points", track.name(), track.points().len());
    Ok(track)
}

async fn read_json<T>(path: &Path) -> Result<T, LoaderError>
where
    T: DeserializeOwned + Send + 'static,
{
    check_path(path).await?;

    let content = fs::read_to_string(path).await.map_err(|e| LoaderError::Io {
        source: e,
        path: path.to_path_buf(),
    })?;
    debug!("Read {} bytes from '{}'", content.len(), path.display());

    let owned_path = path.to_path_buf();
    task::spawn_blocking(move || {
        serde_json::from_str(&content).map_err(|e| LoaderError::Json {
            source: e,
            path: owned_path,
        })
    })
    .await?
}

async fn check_path(path: &Path) -> Result<(), LoaderError> {
    if path.as_os_str().is_empty() {
        return Err(LoaderError::EmptyPath);
    }

    match fs::try_exists(path).await {
        Ok(true) => Ok(()),
        Ok(false) => Err(LoaderError::NotFound(path.to_path_buf())),
        Err(err) => Err(LoaderError::Io {
            source: err,
            path: path.to_path_buf(),
        }),
    }
}

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("the file path can not be empty")]
    EmptyPath,
    #[error("the file '{}' does not exist", .0.display())]
    NotFound(PathBuf),
    #[error("failed to read '{}': {}", path.display(), source)]
    Io { source: io::Error, path: PathBuf },
    #[error("failed to parse '{}': {}", path.display(), source)]
    Json { source: serde_json::Error, path: PathBuf },
    #[error("duplicate city '{}' in '{}'", name, path.display())]
    DuplicateReference { name: String, path: PathBuf },
    #[error(transparent)]
    JoinError(#[from] JoinError),
}
