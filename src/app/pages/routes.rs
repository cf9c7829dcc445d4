use dioxus::prelude::*;

use super::{Dashboard, DashboardIndex, Fan, Light};
use crate::app::layouts::Layout;

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    #[route("/")]
    Dashboard {},
    #[route("/index.html")]
    DashboardIndex {},
    #[route("/fan.html")]
    Fan {},
    #[route("/light.html")]
    Light {},
}

#[component]
pub fn App() -> Element {
    use_effect(|| {
        tracing::info!("Smart Room dashboard initialized");
    });

    rsx! {
        Router::<Route> {}
    }
}
