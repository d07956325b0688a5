mod geo_point;
mod proximity_event;
mod reference_point;
mod track;

pub use geo_point::GeoPoint;
pub use proximity_event::ProximityEvent;
pub use reference_point::ReferencePoint;
pub use track::Track;
