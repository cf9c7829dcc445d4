use dioxus::prelude::*;

use super::SharedNavbar;
use crate::app::pages::Route;

#[component]
pub fn Layout() -> Element {
    // Bundled by build.rs
    const BUNDLE_CSS: Asset = asset!("/assets/dist/bundle.css");

    rsx! {
        document::Link {
            rel: "stylesheet",
            href: BUNDLE_CSS
        },
        SharedNavbar {}
        main { class: "c-layout__main",
            Outlet::<Route> {}
        }
    }
}
