// Domain models
// Pure Rust, no framework dependencies

pub mod page;
pub mod navigation;
pub mod sensor;
pub mod splash;

pub use page::Page;
pub use navigation::NavigationState;
pub use sensor::{Motion, SensorSnapshot};
pub use splash::SplashPhase;
