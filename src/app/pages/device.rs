use chrono::Local;
use dioxus::prelude::*;

use crate::app::components::Card;
use crate::domain::models::{Page, SensorSnapshot};
use crate::shared::hooks::use_navbar_refresh;

/// Shared body of the single-device pages
#[component]
fn DevicePage(page: Page, status_label: String, reading_label: String) -> Element {
    let refreshes = use_navbar_refresh();
    let mut last_refreshed = use_signal(|| None::<String>);

    use_effect(move || {
        if refreshes() > 0 {
            last_refreshed.set(Some(Local::now().format("%H:%M:%S").to_string()));
        }
    });

    let refreshed_text = match last_refreshed() {
        Some(time) => format!("Last refreshed at {}", time),
        None => "Not refreshed yet".to_string(),
    };

    let heading = format!("{} control", page.label());

    rsx! {
        section { class: "c-device c-device--{page}",
            h2 { class: "c-device__heading", "{heading}" }
            div { class: "c-dashboard__grid",
                Card { title: "Status", "{status_label}" }
                Card { title: "Reading", "{reading_label}" }
            }
            p { class: "c-device__refreshed", "{refreshed_text}" }
        }
    }
}

#[component]
pub fn Fan() -> Element {
    let snapshot = SensorSnapshot::simulated();
    rsx! {
        DevicePage {
            page: Page::Fan,
            status_label: "Fan: OFF".to_string(),
            reading_label: snapshot.current_label(),
        }
    }
}

#[component]
pub fn Light() -> Element {
    let snapshot = SensorSnapshot::simulated();
    rsx! {
        DevicePage {
            page: Page::Light,
            status_label: "Light: OFF".to_string(),
            reading_label: snapshot.motion_label(),
        }
    }
}
