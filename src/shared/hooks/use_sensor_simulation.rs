use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use crate::config::DashboardConfig;
use crate::domain::models::SensorSnapshot;
use crate::shared::logging;

/// Sensor card readings: placeholders first, simulated values after
/// `simulation_delay_ms`. Each change of `refreshes` starts the cycle again.
pub fn use_sensor_simulation(config: DashboardConfig, refreshes: Signal<u32>) -> Signal<SensorSnapshot> {
    let mut readings = use_signal(SensorSnapshot::placeholder);

    use_effect(move || {
        let round = refreshes();
        if round > 0 {
            readings.set(SensorSnapshot::placeholder());
        }
        spawn(async move {
            TimeoutFuture::new(config.simulation_delay_ms).await;
            readings.set(SensorSnapshot::simulated());
            logging::log_sensor_simulation(if round == 0 { "page_load" } else { "navbar_refresh" });
        });
    });

    readings
}
