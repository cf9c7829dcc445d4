use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use crate::config::DashboardConfig;
use crate::domain::models::SplashPhase;
use crate::shared::logging;

/// Drive the splash: visible for `splash_delay_ms`, fading for `fade_ms`,
/// then hidden for the rest of the page view. Not cancellable.
pub fn use_splash(config: DashboardConfig) -> Signal<SplashPhase> {
    let mut phase = use_signal(|| SplashPhase::Showing);

    use_effect(move || {
        spawn(async move {
            for delay in [config.splash_delay_ms, config.fade_ms] {
                TimeoutFuture::new(delay).await;
                let next = phase.peek().next();
                phase.set(next);
                logging::log_splash_phase(next);
            }
        });
    });

    phase
}
