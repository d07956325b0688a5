mod loader;

pub use loader::{load_cities, load_track};
