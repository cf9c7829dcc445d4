use super::Page;

/// Page-local navigation state, created once per page load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationState {
    pub current_page: Page,
    pub menu_open: bool,
}

impl NavigationState {
    /// Menu starts closed
    pub fn new(current_page: Page) -> Self {
        Self {
            current_page,
            menu_open: false,
        }
    }

    pub fn from_path(path: &str) -> Self {
        Self::new(Page::from_path(path))
    }

    /// Flip the menu and return the new state
    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }

    pub fn is_active(&self, page: Page) -> bool {
        self.current_page == page
    }

    /// Value for the toggle's `aria-expanded` attribute
    pub fn aria_expanded(&self) -> &'static str {
        if self.menu_open { "true" } else { "false" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_closed() {
        let state = NavigationState::new(Page::Light);
        assert!(!state.menu_open);
        assert_eq!(state.aria_expanded(), "false");
    }

    #[test]
    fn test_toggle_flips_both_ways() {
        let mut state = NavigationState::new(Page::Dashboard);
        assert!(state.toggle_menu());
        assert_eq!(state.aria_expanded(), "true");
        assert!(!state.toggle_menu());
        assert_eq!(state.aria_expanded(), "false");
    }

    #[test]
    fn test_is_active_matches_current_page_only() {
        let state = NavigationState::from_path("/rooms/fan.html");
        assert!(state.is_active(Page::Fan));
        assert!(!state.is_active(Page::Dashboard));
        assert!(!state.is_active(Page::Light));
    }
}
