//! Shared navigation header: `markup` templates plus the index of the
//! elements the controller binds to.

use crate::domain::element_index::IndexedElement;
use crate::domain::models::{NavigationState, Page};

pub const HEADER_ID: &str = "siteHeader";
pub const MENU_TOGGLE_ID: &str = "menuToggle";
pub const PRIMARY_NAV_ID: &str = "primaryNav";
pub const REFRESH_BUTTON_ID: &str = "refreshBtn";

pub const BRAND_TITLE: &str = "The Smart Room Energy Manager";
pub const ACTIVE_CLASS: &str = "active";
pub const OPEN_CLASS: &str = "open";
pub const NAV_LINK_CLASS: &str = "nav-link";

/// Rendered header ready to mount
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderMarkup {
    pub html: String,
    /// Root is the header itself; children are the bindable controls
    pub index: IndexedElement,
}

impl HeaderMarkup {
    pub fn id(&self) -> &str {
        &self.index.id
    }
}

fn nav_class(menu_open: bool) -> String {
    if menu_open {
        format!("nav-center {}", OPEN_CLASS)
    } else {
        "nav-center".to_string()
    }
}

fn link_class(active: bool) -> String {
    if active {
        format!("{} {}", NAV_LINK_CLASS, ACTIVE_CLASS)
    } else {
        NAV_LINK_CLASS.to_string()
    }
}

markup::define! {
    NavHeader<'a>(state: &'a NavigationState) {
        header #siteHeader.topnav {
            div."nav-left" {
                button #menuToggle.hamburger["aria-label" = "Open navigation", "aria-expanded" = state.aria_expanded()] {
                    span {} span {} span {}
                }
                div.brand {
                    div.logo["aria-hidden" = "true"] {
                        @Logo {}
                    }
                    h1.title { @BRAND_TITLE }
                }
            }
            nav #primaryNav[class = nav_class(state.menu_open)] {
                @for page in Page::ALL {
                    a[href = page.href(), class = link_class(state.is_active(page))] {
                        @page.label()
                    }
                }
            }
            div."nav-right" {
                button #refreshBtn."refresh-btn"[title = "Refresh data", "aria-label" = "Refresh"] {
                    "Refresh"
                }
                button."icon-btn"[title = "Search", "aria-label" = "Search"] {
                    @SearchIcon {}
                }
                button."icon-btn"[title = "Settings", "aria-label" = "Settings"] {
                    @SettingsIcon {}
                }
                div.avatar[title = "Profile", "aria-label" = "Profile"] {}
            }
        }
    }

    Logo {
        svg[viewBox = "0 0 36 36", width = "28", height = "28", xmlns = "http://www.w3.org/2000/svg"] {
            defs {
                linearGradient #g[x1 = "0", y1 = "0", x2 = "1", y2 = "1"] {
                    stop[offset = "0%", "stop-color" = "#28a745"] {}
                    stop[offset = "100%", "stop-color" = "#1e90ff"] {}
                }
            }
            circle[cx = "18", cy = "18", r = "16", fill = "url(#g)", opacity = "0.15"] {}
            path[d = "M9 22c4-8 14-8 18 0", stroke = "#28a745", "stroke-width" = "2", fill = "none", "stroke-linecap" = "round"] {}
            path[d = "M12 18c3-5 9-5 12 0", stroke = "#1e90ff", "stroke-width" = "2", fill = "none", "stroke-linecap" = "round"] {}
            circle[cx = "18", cy = "18", r = "2", fill = "#28a745"] {}
        }
    }

    SearchIcon {
        svg[viewBox = "0 0 24 24", width = "20", height = "20", fill = "none", stroke = "#ffffff", "stroke-width" = "2", "stroke-linecap" = "round", "stroke-linejoin" = "round"] {
            circle[cx = "11", cy = "11", r = "8"] {}
            line[x1 = "21", y1 = "21", x2 = "16.65", y2 = "16.65"] {}
        }
    }

    SettingsIcon {
        svg[viewBox = "0 0 24 24", width = "20", height = "20", fill = "none", stroke = "#ffffff", "stroke-width" = "2", "stroke-linecap" = "round", "stroke-linejoin" = "round"] {
            circle[cx = "12", cy = "12", r = "3"] {}
            path[d = "M19.4 15a1.65 1.65 0 0 0 .33 1.82l.06.06a2 2 0 0 1-2.83 2.83l-.06-.06a1.65 1.65 0 0 0-1.82-.33 1.65 1.65 0 0 0-1 1.51V21a2 2 0 0 1-4 0v-.09A1.65 1.65 0 0 0 8 19.4a1.65 1.65 0 0 0-1.82.33l-.06.06a2 2 0 1 1-2.83-2.83l.06-.06A1.65 1.65 0 0 0 3.6 15a1.65 1.65 0 0 0-1.51-1H2a2 2 0 1 1 0-4h.09A1.65 1.65 0 0 0 3.6 8a1.65 1.65 0 0 0-.33-1.82l-.06-.06a2 2 0 1 1 2.83-2.83l.06.06A1.65 1.65 0 0 0 8 3.6a1.65 1.65 0 0 0 1-1.51V2a2 2 0 1 1 4 0v.09A1.65 1.65 0 0 0 15 3.6a1.65 1.65 0 0 0 1.82-.33l.06-.06a2 2 0 1 1 2.83 2.83l-.06.06A1.65 1.65 0 0 0 20.4 8c0 .6.24 1.17.66 1.6.42.43.66 1 .66 1.6s-.24 1.17-.66 1.6A1.65 1.65 0 0 0 19.4 15z"] {}
        }
    }
}

/// Render the header for `state`. The active link follows `current_page`;
/// `aria-expanded` and the nav's `open` class follow `menu_open`.
pub fn render_header(state: &NavigationState) -> HeaderMarkup {
    let index = IndexedElement::new("header", HEADER_ID)
        .class("topnav")
        .child(
            IndexedElement::new("button", MENU_TOGGLE_ID)
                .class("hamburger")
                .attr("aria-expanded", state.aria_expanded()),
        )
        .child(IndexedElement::new("nav", PRIMARY_NAV_ID).class(&nav_class(state.menu_open)))
        .child(IndexedElement::new("button", REFRESH_BUTTON_ID).class("refresh-btn"));

    HeaderMarkup {
        html: NavHeader { state }.to_string(),
        index,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(page: Page, active: bool) -> String {
        format!(
            "<a href=\"{}\" class=\"{}\">{}</a>",
            page.href(),
            link_class(active),
            page.label()
        )
    }

    #[test]
    fn test_three_links_in_navigation_order() {
        let html = render_header(&NavigationState::new(Page::Dashboard)).html;
        assert_eq!(html.matches("class=\"nav-link").count(), 3);

        let positions: Vec<usize> = Page::ALL
            .iter()
            .map(|page| html.find(&format!(">{}</a>", page.label())).unwrap())
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_only_current_page_is_active() {
        for current in Page::ALL {
            let html = render_header(&NavigationState::new(current)).html;
            assert_eq!(html.matches("nav-link active").count(), 1);
            for page in Page::ALL {
                assert!(html.contains(&link(page, page == current)), "{} on {}", page, current);
            }
        }
    }

    #[test]
    fn test_fan_scenario() {
        let html = render_header(&NavigationState::from_path("/rooms/fan.html")).html;
        assert!(html.contains(&link(Page::Fan, true)));
        assert!(html.contains(&link(Page::Dashboard, false)));
        assert!(html.contains(&link(Page::Light, false)));
    }

    #[test]
    fn test_action_controls_present() {
        let header = render_header(&NavigationState::new(Page::Light));
        assert!(header.html.starts_with("<header"));
        assert!(header.html.ends_with("</header>"));
        assert!(header.html.contains("id=\"refreshBtn\""));
        assert!(header.html.contains("id=\"menuToggle\""));
        assert_eq!(header.html.matches("class=\"icon-btn\"").count(), 2);
        assert!(header.html.contains("class=\"avatar\""));
        assert!(header.html.contains(BRAND_TITLE));

        assert_eq!(header.id(), HEADER_ID);
        assert_eq!(
            header.index.ids(),
            vec![HEADER_ID, MENU_TOGGLE_ID, PRIMARY_NAV_ID, REFRESH_BUTTON_ID]
        );
    }

    #[test]
    fn test_menu_state_reflected_in_markup_and_index() {
        let mut state = NavigationState::new(Page::Dashboard);
        let closed = render_header(&state);
        assert!(closed.html.contains("aria-expanded=\"false\""));
        assert!(closed.html.contains("class=\"nav-center\""));
        assert!(!closed.index.find_by_id(PRIMARY_NAV_ID).unwrap().has_class(OPEN_CLASS));

        state.toggle_menu();
        let open = render_header(&state);
        assert!(open.html.contains("aria-expanded=\"true\""));
        assert!(open.html.contains("class=\"nav-center open\""));
        assert!(open.index.find_by_id(PRIMARY_NAV_ID).unwrap().has_class(OPEN_CLASS));
        assert_eq!(
            open.index.find_by_id(MENU_TOGGLE_ID).unwrap().get_attr("aria-expanded"),
            Some("true")
        );
    }
}
