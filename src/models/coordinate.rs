use serde::{Deserialize, Serialize};

use crate::error::GeoError;
use crate::geo::{haversine_km, is_valid_latitude, is_valid_longitude};

/// A point on the globe in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lng: f64) -> Result<Self, GeoError> {
        if !is_valid_latitude(lat) || !is_valid_longitude(lng) {
            tracing::debug!(lat, lng, "rejected coordinate");
            return Err(GeoError::InvalidCoordinate { lat, lng });
        }

        Ok(Self { lat, lng })
    }

    pub fn distance_to(&self, other: &Coordinate) -> f64 {
        haversine_km(self, other)
    }
}
