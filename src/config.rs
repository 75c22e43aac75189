use std::env;
use std::str::FromStr;

use crate::error::GeoError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Json,
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("expected `text` or `json`, got `{other}`")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    pub report_format: ReportFormat,
}

impl Config {
    pub fn from_env() -> Result<Self, GeoError> {
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, GeoError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
            report_format: parse_or_default(&lookup, "REPORT_FORMAT", ReportFormat::Text)?,
        })
    }
}

fn parse_or_default<F, T>(lookup: &F, key: &str, default: T) -> Result<T, GeoError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw
            .parse::<T>()
            .map_err(|err| GeoError::Config(format!("invalid {key}: {err}"))),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::{Config, ReportFormat};
    use crate::error::GeoError;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.report_format, ReportFormat::Text);
    }

    #[test]
    fn reads_overrides() {
        let config =
            Config::from_lookup(lookup(&[("LOG_LEVEL", "debug"), ("REPORT_FORMAT", "JSON")]))
                .unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.report_format, ReportFormat::Json);
    }

    #[test]
    fn rejects_unknown_report_format() {
        let err = Config::from_lookup(lookup(&[("REPORT_FORMAT", "yaml")])).unwrap_err();
        assert!(matches!(err, GeoError::Config(msg) if msg.contains("REPORT_FORMAT")));
    }
}
