pub mod config;
pub mod error;
pub mod geo;
pub mod models;

pub use error::{GeoError, INVALID_DISTANCE};
pub use geo::{EARTH_RADIUS_KM, distance, haversine_km, is_valid_latitude, is_valid_longitude};
pub use models::coordinate::Coordinate;
