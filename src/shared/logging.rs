//! Structured logging for the dashboard shell
//!
//! Keeps field names consistent across the navbar controller, the page
//! components and the CLI. Missing page elements are never logged.

use crate::domain::models::{Page, SplashPhase};

/// Operations that emit log events
#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    PageDetection,
    HeaderMount,
    RefreshBroadcast,
    Splash,
    SensorSimulation,
    Config,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::PageDetection => "page_detection",
            LogOperation::HeaderMount => "header_mount",
            LogOperation::RefreshBroadcast => "refresh_broadcast",
            LogOperation::Splash => "splash",
            LogOperation::SensorSimulation => "sensor_simulation",
            LogOperation::Config => "config",
        }
    }
}

/// Log the page classified from the location path
pub fn log_page_detected(path: &str, page: Page) {
    tracing::debug!(
        operation = LogOperation::PageDetection.as_str(),
        path = path,
        page = page.as_str(),
        "Current page detected"
    );
}

/// Log header injection
pub fn log_header_mounted(page: Page, replaced: bool) {
    if replaced {
        tracing::info!(
            operation = LogOperation::HeaderMount.as_str(),
            page = page.as_str(),
            replaced = true,
            "Navigation header re-rendered, previous header replaced"
        );
    } else {
        tracing::debug!(
            operation = LogOperation::HeaderMount.as_str(),
            page = page.as_str(),
            "Navigation header mounted"
        );
    }
}

/// Log a host bootstrap failure (navbar stays unmounted)
pub fn log_host_unavailable(error: &str) {
    tracing::warn!(
        operation = LogOperation::HeaderMount.as_str(),
        error = error,
        "Page host unavailable, navigation header not mounted"
    );
}

/// Log a refresh request broadcast
pub fn log_refresh_broadcast(page: Page, event: &str, observers: usize) {
    tracing::debug!(
        operation = LogOperation::RefreshBroadcast.as_str(),
        page = page.as_str(),
        event = event,
        observer_count = observers,
        "Refresh requested"
    );
}

/// Log a splash phase transition
pub fn log_splash_phase(phase: SplashPhase) {
    tracing::debug!(
        operation = LogOperation::Splash.as_str(),
        phase = phase.as_str(),
        "Splash phase changed"
    );
}

/// Log the simulated sensor update
pub fn log_sensor_simulation(trigger: &str) {
    tracing::debug!(
        operation = LogOperation::SensorSimulation.as_str(),
        trigger = trigger,
        "Simulated sensor readings applied"
    );
}

/// Log a config fallback to defaults
pub fn log_config_fallback(source: &str, error: &str) {
    tracing::warn!(
        operation = LogOperation::Config.as_str(),
        source = source,
        error = error,
        "Invalid dashboard config, using defaults"
    );
}
