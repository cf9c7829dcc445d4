use dioxus::prelude::*;

use crate::app::components::{Card, Splash};
use crate::config::DashboardConfig;
use crate::shared::hooks::{use_navbar_refresh, use_sensor_simulation, use_splash};

#[component]
pub fn Dashboard() -> Element {
    let config = use_hook(DashboardConfig::load);
    let phase = use_splash(config);
    let refreshes = use_navbar_refresh();
    let readings = use_sensor_simulation(config, refreshes);

    let snapshot = readings();
    let motion = snapshot.motion_label();
    let climate = snapshot.climate_label();
    let current = snapshot.current_label();
    let dashboard_style = if phase().dashboard_visible() {
        "display: block;"
    } else {
        "display: none;"
    };

    rsx! {
        if phase().splash_visible() {
            Splash { phase: phase(), fade_ms: config.fade_ms }
        }
        section {
            id: "dashboard",
            class: "c-dashboard",
            style: "{dashboard_style}",
            h2 { class: "c-dashboard__heading", "Room overview" }
            div { class: "c-dashboard__grid",
                Card { id: "motionCard", title: "Motion", "{motion}" }
                Card { id: "tempCard", title: "Climate", "{climate}" }
                Card { id: "currentCard", title: "Power", featured: true, "{current}" }
            }
        }
    }
}

/// `/index.html` serves the same dashboard as `/`
#[component]
pub fn DashboardIndex() -> Element {
    rsx! {
        Dashboard {}
    }
}
