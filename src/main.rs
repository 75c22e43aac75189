use haversine::config::{Config, ReportFormat};
use haversine::{Coordinate, GeoError};
use serde_json::json;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), GeoError> {
    let config = Config::from_env()?;

    // stdout carries only the report.
    let filter = EnvFilter::try_new(&config.log_level)
        .map_err(|err| GeoError::Config(format!("invalid LOG_LEVEL: {err}")))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .compact()
        .init();

    let new_york = Coordinate::new(40.7128, -74.0060)?;
    let los_angeles = Coordinate::new(34.0549, -118.2426)?;

    let distance_km = haversine::distance(
        new_york.lat,
        new_york.lng,
        los_angeles.lat,
        los_angeles.lng,
    )?;

    tracing::info!(distance_km, "computed new york to los angeles");

    match config.report_format {
        ReportFormat::Text => {
            println!("Distance between New York City and Los Angeles: {distance_km:.2} km");
        }
        ReportFormat::Json => {
            let report = json!({
                "from": new_york,
                "to": los_angeles,
                "distance_km": distance_km,
            });
            println!("{report}");
        }
    }

    Ok(())
}
