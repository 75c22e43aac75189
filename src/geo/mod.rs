use crate::error::GeoError;
use crate::models::coordinate::Coordinate;

pub const EARTH_RADIUS_KM: f64 = 6_371.0;

pub fn is_valid_latitude(lat: f64) -> bool {
    (-90.0..=90.0).contains(&lat)
}

pub fn is_valid_longitude(lng: f64) -> bool {
    (-180.0..=180.0).contains(&lng)
}

/// Great-circle distance in kilometers between two points given in degrees.
///
/// Every input is range-checked before any trigonometry runs; the first
/// offending pair is reported in [`GeoError::InvalidCoordinate`].
pub fn distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> Result<f64, GeoError> {
    let from = Coordinate::new(lat1, lon1)?;
    let to = Coordinate::new(lat2, lon2)?;

    Ok(haversine_km(&from, &to))
}

/// Haversine distance between two already-validated coordinates.
///
/// Rounding can push the haversine term a hair past 1 for nearly
/// antipodal points, so it is clamped to `[0, 1]` before the square roots.
pub fn haversine_km(from: &Coordinate, to: &Coordinate) -> f64 {
    let (phi1, phi2) = (from.lat.to_radians(), to.lat.to_radians());
    let half_dphi = (to.lat - from.lat).to_radians() / 2.0;
    let half_dlambda = (to.lng - from.lng).to_radians() / 2.0;

    let h = (half_dphi.sin().powi(2) + phi1.cos() * phi2.cos() * half_dlambda.sin().powi(2))
        .clamp(0.0, 1.0);

    EARTH_RADIUS_KM * 2.0 * h.sqrt().atan2((1.0 - h).sqrt())
}
