use thiserror::Error;

/// Distance reported alongside a rejected coordinate by callers that keep
/// the `(-1, error)` convention.
pub const INVALID_DISTANCE: f64 = -1.0;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeoError {
    #[error("haversine: invalid latitude or longitude values (lat={lat}, lng={lng})")]
    InvalidCoordinate { lat: f64, lng: f64 },

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl GeoError {
    /// The `-1` placeholder distance; only coordinate rejections have one.
    pub fn sentinel(&self) -> Option<f64> {
        match self {
            GeoError::InvalidCoordinate { .. } => Some(INVALID_DISTANCE),
            GeoError::Config(_) => None,
        }
    }

    pub fn is_invalid_coordinate(&self) -> bool {
        matches!(self, GeoError::InvalidCoordinate { .. })
    }
}
