/// Splash-to-dashboard transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplashPhase {
    Showing,
    Fading,
    Hidden,
}

impl SplashPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            SplashPhase::Showing => "showing",
            SplashPhase::Fading => "fading",
            SplashPhase::Hidden => "hidden",
        }
    }

    /// `Hidden` is terminal
    pub fn next(&self) -> SplashPhase {
        match self {
            SplashPhase::Showing => SplashPhase::Fading,
            SplashPhase::Fading | SplashPhase::Hidden => SplashPhase::Hidden,
        }
    }

    pub fn splash_visible(&self) -> bool {
        !matches!(self, SplashPhase::Hidden)
    }

    pub fn dashboard_visible(&self) -> bool {
        matches!(self, SplashPhase::Hidden)
    }

    /// Inline style for the splash element; opacity transition during the fade
    pub fn splash_style(&self, fade_ms: u32) -> String {
        match self {
            SplashPhase::Showing => "opacity: 1;".to_string(),
            SplashPhase::Fading => format!("transition: opacity {}ms; opacity: 0;", fade_ms),
            SplashPhase::Hidden => "display: none;".to_string(),
        }
    }
}
