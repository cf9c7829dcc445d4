//! Shared navigation controller
//!
//! Detects the current page from the host location, mounts the header built by
//! [`render_header`] and wires the menu toggle and refresh button. Every DOM
//! lookup is optional: a missing element leaves its feature inert.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use super::header::{
    render_header, HeaderMarkup, MENU_TOGGLE_ID, OPEN_CLASS, PRIMARY_NAV_ID,
    REFRESH_BUTTON_ID,
};
use crate::domain::models::{NavigationState, Page};
use crate::shared::errors::Result;
use crate::shared::events::{RefreshBus, REFRESH_EVENT};
use crate::shared::logging;

/// Document the controller reads from and mounts into.
///
/// Methods take `&self`; implementations use interior mutability the same way
/// the live DOM does.
pub trait PageHost {
    /// Path part of the current location
    fn location_path(&self) -> String;

    /// Insert `header` as the first child of the body, removing any element
    /// anywhere in the body that already carries the header's id, together
    /// with the listeners attached inside it. Returns `true` if one was replaced.
    fn mount_header(&self, header: &HeaderMarkup) -> Result<bool>;

    fn contains(&self, id: &str) -> bool;

    /// Toggle `class` on element `id`; `None` if the element is missing
    fn toggle_class(&self, id: &str, class: &str) -> Option<bool>;

    fn set_attribute(&self, id: &str, name: &str, value: &str);

    /// Attach a click handler; `false` if the element is missing
    fn on_click(&self, id: &str, handler: Box<dyn FnMut()>) -> bool;

    /// Dispatch a payload-free, page-scoped event
    fn broadcast(&self, event: &str);
}

/// Which interactions `bind_interactions` attached
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bindings {
    pub menu_toggle: bool,
    pub refresh: bool,
}

pub struct NavbarController<H: PageHost + 'static> {
    host: Rc<H>,
    state: Rc<RefCell<NavigationState>>,
    refresh: RefreshBus,
}

impl<H: PageHost + 'static> NavbarController<H> {
    /// Classify the current page. Never fails; unknown paths are the dashboard.
    pub fn initialize(host: Rc<H>) -> Self {
        let path = host.location_path();
        let state = NavigationState::from_path(&path);
        logging::log_page_detected(&path, state.current_page);

        Self {
            host,
            state: Rc::new(RefCell::new(state)),
            refresh: RefreshBus::new(),
        }
    }

    /// Initialize, render and bind in one go, as a page load does
    pub fn mount(host: Rc<H>) -> Result<Self> {
        let controller = Self::initialize(host);
        controller.render()?;
        controller.bind_interactions();
        Ok(controller)
    }

    pub fn state(&self) -> NavigationState {
        *self.state.borrow()
    }

    pub fn current_page(&self) -> Page {
        self.state.borrow().current_page
    }

    pub fn menu_open(&self) -> bool {
        self.state.borrow().menu_open
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Header markup for the current state, without mounting it
    pub fn header(&self) -> HeaderMarkup {
        render_header(&self.state.borrow())
    }

    /// Mount the header as the first child of the body.
    ///
    /// Calling this again replaces the previously mounted header rather than
    /// adding a second one. Handlers bound to the old header are not carried
    /// over; call [`Self::bind_interactions`] again after re-rendering.
    pub fn render(&self) -> Result<()> {
        let header = self.header();
        let replaced = self.host.mount_header(&header)?;
        logging::log_header_mounted(self.current_page(), replaced);
        Ok(())
    }

    /// Attach the menu toggle and refresh handlers to whatever is mounted.
    /// Missing elements are skipped silently.
    pub fn bind_interactions(&self) -> Bindings {
        Bindings {
            menu_toggle: self.bind_menu_toggle(),
            refresh: self.bind_refresh(),
        }
    }

    /// Register an in-process observer for refresh clicks.
    ///
    /// This is the non-DOM counterpart of the `navbarRefresh` window event:
    /// Rust code holding the controller (the pre-render CLI, tests, embedders
    /// without a window) subscribes here, while page components listen for the
    /// window event through `use_navbar_refresh`.
    pub fn on_refresh_requested(&self, handler: impl FnMut() + 'static) {
        self.refresh.subscribe(handler);
    }

    fn bind_menu_toggle(&self) -> bool {
        if !self.host.contains(MENU_TOGGLE_ID) || !self.host.contains(PRIMARY_NAV_ID) {
            return false;
        }

        let host: Weak<H> = Rc::downgrade(&self.host);
        let state = self.state.clone();
        self.host.on_click(
            MENU_TOGGLE_ID,
            Box::new(move || {
                let Some(host) = host.upgrade() else {
                    return;
                };
                let mut state = state.borrow_mut();
                // The nav's class list is the source of truth, as in the DOM
                match host.toggle_class(PRIMARY_NAV_ID, OPEN_CLASS) {
                    Some(open) => state.menu_open = open,
                    None => {
                        state.toggle_menu();
                    }
                }
                host.set_attribute(MENU_TOGGLE_ID, "aria-expanded", state.aria_expanded());
            }),
        )
    }

    fn bind_refresh(&self) -> bool {
        if !self.host.contains(REFRESH_BUTTON_ID) {
            return false;
        }

        let host: Weak<H> = Rc::downgrade(&self.host);
        let state = self.state.clone();
        let refresh = self.refresh.clone();
        self.host.on_click(
            REFRESH_BUTTON_ID,
            Box::new(move || {
                let Some(host) = host.upgrade() else {
                    return;
                };
                logging::log_refresh_broadcast(
                    state.borrow().current_page,
                    REFRESH_EVENT,
                    refresh.len(),
                );
                refresh.notify();
                host.broadcast(REFRESH_EVENT);
            }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::element_index::IndexedElement;
    use crate::domain::services::header::{ACTIVE_CLASS, HEADER_ID};
    use crate::infrastructure::MemoryHost;
    use std::cell::Cell;

    fn mounted(path: &str) -> (Rc<MemoryHost>, NavbarController<MemoryHost>) {
        let host = Rc::new(MemoryHost::new(path));
        let controller = NavbarController::mount(host.clone()).unwrap();
        (host, controller)
    }

    fn aria_expanded(host: &MemoryHost) -> Option<String> {
        host.element(MENU_TOGGLE_ID)
            .and_then(|el| el.get_attr("aria-expanded").map(str::to_string))
    }

    #[test]
    fn test_initialize_classifies_paths() {
        let cases = [
            ("/fan.html", Page::Fan),
            ("/rooms/fan.html", Page::Fan),
            ("/light.html", Page::Light),
            ("/", Page::Dashboard),
            ("", Page::Dashboard),
            ("/index.html", Page::Dashboard),
            ("/unknown/page", Page::Dashboard),
        ];
        for (path, expected) in cases {
            let controller = NavbarController::initialize(Rc::new(MemoryHost::new(path)));
            assert_eq!(controller.current_page(), expected, "path {:?}", path);
            assert!(!controller.menu_open());
        }
    }

    #[test]
    fn test_render_mounts_single_header_first() {
        let host = Rc::new(MemoryHost::with_body(
            "/light.html",
            vec![IndexedElement::new("main", "dashboard")],
        ));
        let controller = NavbarController::initialize(host.clone());
        controller.render().unwrap();

        let body = host.body();
        assert_eq!(body.len(), 2);
        assert_eq!(body[0].tag, "header");
        assert_eq!(body[0].id, HEADER_ID);
        assert_eq!(body[1].id, "dashboard");

        let html = host.html(HEADER_ID).unwrap();
        assert_eq!(html.matches("class=\"nav-link").count(), 3);
        assert_eq!(html.matches(ACTIVE_CLASS).count(), 1);
        assert!(html.contains("class=\"nav-link active\">Light</a>"));
    }

    #[test]
    fn test_second_render_replaces_header() {
        let (host, controller) = mounted("/");
        controller.render().unwrap();

        let headers = host.body().iter().filter(|el| el.tag == "header").count();
        assert_eq!(headers, 1);
        assert_eq!(host.body()[0].id, HEADER_ID);
    }

    #[test]
    fn test_rebind_after_render_fires_once() {
        let (host, controller) = mounted("/");
        controller.render().unwrap();
        let bindings = controller.bind_interactions();
        assert_eq!(bindings, Bindings { menu_toggle: true, refresh: true });

        host.click(REFRESH_BUTTON_ID);
        assert_eq!(host.broadcasts().len(), 1);

        host.click(MENU_TOGGLE_ID);
        assert!(controller.menu_open());
        assert_eq!(aria_expanded(&host).as_deref(), Some("true"));
        assert!(host.element(PRIMARY_NAV_ID).unwrap().has_class(OPEN_CLASS));
    }

    #[test]
    fn test_render_without_rebind_leaves_header_inert() {
        let (host, controller) = mounted("/");
        controller.render().unwrap();

        host.click(REFRESH_BUTTON_ID);
        host.click(MENU_TOGGLE_ID);
        assert!(host.broadcasts().is_empty());
        assert!(!controller.menu_open());
    }

    #[test]
    fn test_menu_toggle_parity() {
        let (host, controller) = mounted("/");
        assert_eq!(aria_expanded(&host).as_deref(), Some("false"));

        for clicks in 1..=4 {
            host.click(MENU_TOGGLE_ID);
            let open = clicks % 2 == 1;
            assert_eq!(controller.menu_open(), open);
            assert_eq!(aria_expanded(&host).as_deref(), Some(if open { "true" } else { "false" }));
            assert_eq!(host.element(PRIMARY_NAV_ID).unwrap().has_class(OPEN_CLASS), open);
        }
    }

    #[test]
    fn test_refresh_emits_one_event_per_click() {
        for path in ["/", "/fan.html", "/light.html"] {
            let (host, _controller) = mounted(path);
            host.click(REFRESH_BUTTON_ID);
            assert_eq!(host.broadcasts(), vec![REFRESH_EVENT.to_string()]);
            host.click(REFRESH_BUTTON_ID);
            host.click(REFRESH_BUTTON_ID);
            assert_eq!(host.broadcasts().len(), 3);
        }
    }

    #[test]
    fn test_refresh_observers_run_per_click() {
        let (host, controller) = mounted("/fan.html");
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        controller.on_refresh_requested(move || counter.set(counter.get() + 1));

        host.click(REFRESH_BUTTON_ID);
        host.click(REFRESH_BUTTON_ID);

        assert_eq!(calls.get(), 2);
        assert_eq!(host.broadcasts().len(), 2);
    }

    #[test]
    fn test_menu_toggle_does_not_broadcast() {
        let (host, _controller) = mounted("/");
        host.click(MENU_TOGGLE_ID);
        assert!(host.broadcasts().is_empty());
    }

    #[test]
    fn test_bind_without_elements_is_inert() {
        let host = Rc::new(MemoryHost::new("/"));
        let controller = NavbarController::initialize(host.clone());

        let bindings = controller.bind_interactions();
        assert_eq!(bindings, Bindings::default());

        host.click(MENU_TOGGLE_ID);
        host.click(REFRESH_BUTTON_ID);
        assert!(!controller.menu_open());
        assert!(host.broadcasts().is_empty());
    }

    #[test]
    fn test_bind_with_partial_markup() {
        // Page supplies its own header with no primary nav
        let host = Rc::new(MemoryHost::with_body(
            "/fan.html",
            vec![IndexedElement::new("header", "pageHeader")
                .child(IndexedElement::new("button", REFRESH_BUTTON_ID))
                .child(IndexedElement::new("button", MENU_TOGGLE_ID))],
        ));
        let controller = NavbarController::initialize(host.clone());

        let bindings = controller.bind_interactions();
        assert!(bindings.refresh);
        assert!(!bindings.menu_toggle, "toggle needs the primary nav too");

        host.click(MENU_TOGGLE_ID);
        assert!(!controller.menu_open());
        host.click(REFRESH_BUTTON_ID);
        assert_eq!(host.broadcasts().len(), 1);
    }

    #[test]
    fn test_fan_scenario_end_to_end() {
        let (host, controller) = mounted("/rooms/fan.html");
        assert_eq!(controller.current_page(), Page::Fan);

        let html = host.html(HEADER_ID).unwrap();
        assert!(html.contains("class=\"nav-link active\">Fan</a>"));
        assert!(html.contains("class=\"nav-link\">Dashboard</a>"));
        assert!(html.contains("class=\"nav-link\">Light</a>"));
    }
}
