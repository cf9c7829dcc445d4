//! Dashboard timing configuration
//!
//! Defaults reproduce the stock page timings. The browser may override them
//! with JSON stored under `localStorage["dashboard_config"]`; missing fields
//! keep their default.

use serde::{Deserialize, Serialize};

use crate::shared::errors::{AppError, Result};
use crate::shared::logging;

pub const STORAGE_KEY: &str = "dashboard_config";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// How long the splash stays fully visible
    pub splash_delay_ms: u32,
    /// Splash opacity transition
    pub fade_ms: u32,
    /// Delay before placeholder readings are replaced with simulated ones
    pub simulation_delay_ms: u32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            splash_delay_ms: 2000,
            fade_ms: 500,
            simulation_delay_ms: 1800,
        }
    }
}

impl DashboardConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Parse an optional override, falling back to defaults on error
    pub fn from_override(source: &str, json: Option<&str>) -> Self {
        match json.map(Self::from_json) {
            Some(Ok(config)) => config,
            Some(Err(e)) => {
                logging::log_config_fallback(source, &e.to_string());
                Self::default()
            }
            None => Self::default(),
        }
    }

    /// Load the override stored in the browser, if any
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let stored = web_sys::window()
            .and_then(|window| window.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten());
        Self::from_override("localStorage", stored.as_deref())
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_stock_timings() {
        let config = DashboardConfig::default();
        assert_eq!(config.splash_delay_ms, 2000);
        assert_eq!(config.fade_ms, 500);
        assert_eq!(config.simulation_delay_ms, 1800);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = DashboardConfig::from_json(r#"{"fade_ms": 250}"#).unwrap();
        assert_eq!(config.fade_ms, 250);
        assert_eq!(config.splash_delay_ms, 2000);
        assert_eq!(config.simulation_delay_ms, 1800);
    }

    #[test]
    fn test_malformed_json_is_config_error() {
        let err = DashboardConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_override_falls_back_on_error() {
        assert_eq!(
            DashboardConfig::from_override("test", Some("not json")),
            DashboardConfig::default()
        );
        assert_eq!(DashboardConfig::from_override("test", None), DashboardConfig::default());
        assert_eq!(
            DashboardConfig::from_override("test", Some(r#"{"splash_delay_ms": 0}"#)).splash_delay_ms,
            0
        );
    }
}
