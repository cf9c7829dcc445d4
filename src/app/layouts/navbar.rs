use dioxus::prelude::*;

/// Mounts the shared navigation header into `<body>` once per page load.
///
/// The header lives outside the Dioxus root, next to it in the body, so this
/// component renders nothing itself. It keeps the controller alive for the
/// component's lifetime, which is the whole page view.
#[component]
pub fn SharedNavbar() -> Element {
    let _controller = use_hook(mount_navbar);
    rsx! {}
}

#[cfg(target_arch = "wasm32")]
fn mount_navbar() -> Option<std::rc::Rc<crate::domain::services::NavbarController<crate::infrastructure::BrowserHost>>> {
    use std::rc::Rc;
    use crate::domain::services::NavbarController;
    use crate::infrastructure::BrowserHost;
    use crate::shared::logging;

    let host = match BrowserHost::new() {
        Ok(host) => Rc::new(host),
        Err(e) => {
            logging::log_host_unavailable(&e.to_string());
            return None;
        }
    };

    match NavbarController::mount(host) {
        Ok(controller) => Some(Rc::new(controller)),
        Err(e) => {
            logging::log_host_unavailable(&e.to_string());
            None
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn mount_navbar() -> Option<()> {
    // No live document outside the browser
    None
}
