use dioxus::prelude::*;

/// Count of `navbarRefresh` events seen by this page.
///
/// Pages read the returned signal inside an effect to re-run their own
/// refresh logic. The window listener is attached once per component and is
/// never removed: it outlives the component, so a page that mounts this hook
/// repeatedly accumulates listeners on the window.
pub fn use_navbar_refresh() -> Signal<u32> {
    let refreshes = use_signal(|| 0u32);

    use_hook(move || {
        #[cfg(target_arch = "wasm32")]
        {
            use wasm_bindgen::prelude::*;
            use wasm_bindgen::JsCast;
            use crate::shared::events::REFRESH_EVENT;

            let mut refreshes_clone = refreshes;
            if let Some(window) = web_sys::window() {
                let listener = Closure::wrap(Box::new(move |_: web_sys::Event| {
                    refreshes_clone += 1;
                }) as Box<dyn FnMut(_)>);
                match window
                    .add_event_listener_with_callback(REFRESH_EVENT, listener.as_ref().unchecked_ref())
                {
                    Ok(()) => listener.forget(),
                    Err(e) => {
                        tracing::warn!("Failed to listen for {}: {:?}", REFRESH_EVENT, e);
                    }
                }
            }
        }
    });

    refreshes
}
