use dioxus::prelude::*;

use crate::domain::models::SplashPhase;
use crate::domain::services::header::BRAND_TITLE;

/// Intro screen shown before the dashboard
#[component]
pub fn Splash(phase: SplashPhase, fade_ms: u32) -> Element {
    let style = phase.splash_style(fade_ms);

    rsx! {
        div {
            id: "intro",
            class: "c-splash",
            style: "{style}",
            div { class: "c-splash__pulse" }
            h2 { class: "c-splash__title", "{BRAND_TITLE}" }
            p { class: "c-splash__subtitle", "Connecting to room sensors..." }
        }
    }
}
