use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Pages reachable from the shared navigation header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    Dashboard,
    Fan,
    Light,
}

const FAN_MARKER: &str = "fan.html";
const LIGHT_MARKER: &str = "light.html";

impl Page {
    /// Navigation order
    pub const ALL: [Page; 3] = [Page::Dashboard, Page::Fan, Page::Light];

    /// Classify a location path. The fan marker wins over the light marker,
    /// anything unrecognised is the dashboard.
    pub fn from_path(path: &str) -> Page {
        if path.contains(FAN_MARKER) {
            Page::Fan
        } else if path.contains(LIGHT_MARKER) {
            Page::Light
        } else {
            Page::Dashboard
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::Fan => "fan",
            Page::Light => "light",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Fan => "Fan",
            Page::Light => "Light",
        }
    }

    /// Relative link target used by the header
    pub fn href(&self) -> &'static str {
        match self {
            Page::Dashboard => "index.html",
            Page::Fan => FAN_MARKER,
            Page::Light => LIGHT_MARKER,
        }
    }
}

impl FromStr for Page {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dashboard" => Ok(Page::Dashboard),
            "fan" => Ok(Page::Fan),
            "light" => Ok(Page::Light),
            other => Err(format!("Unknown page: {}", other)),
        }
    }
}

impl std::fmt::Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path_fan() {
        assert_eq!(Page::from_path("/fan.html"), Page::Fan);
        assert_eq!(Page::from_path("/rooms/fan.html"), Page::Fan);
    }

    #[test]
    fn test_from_path_light() {
        assert_eq!(Page::from_path("/light.html"), Page::Light);
        assert_eq!(Page::from_path("/site/rooms/light.html"), Page::Light);
    }

    #[test]
    fn test_from_path_defaults_to_dashboard() {
        assert_eq!(Page::from_path("/"), Page::Dashboard);
        assert_eq!(Page::from_path(""), Page::Dashboard);
        assert_eq!(Page::from_path("/index.html"), Page::Dashboard);
        assert_eq!(Page::from_path("/heater.html"), Page::Dashboard);
        // Marker must include the extension
        assert_eq!(Page::from_path("/fan"), Page::Dashboard);
    }

    #[test]
    fn test_fan_marker_checked_first() {
        assert_eq!(Page::from_path("/light.html/fan.html"), Page::Fan);
    }

    #[test]
    fn test_slug_round_trip() {
        for page in Page::ALL {
            assert_eq!(page.as_str().parse::<Page>(), Ok(page));
        }
        assert!("kitchen".parse::<Page>().is_err());
    }

    #[test]
    fn test_href_feeds_back_into_classification() {
        for page in Page::ALL {
            assert_eq!(Page::from_path(page.href()), page);
        }
    }
}
