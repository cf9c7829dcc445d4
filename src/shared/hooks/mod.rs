// Custom Dioxus hooks
pub mod use_navbar_refresh;
pub mod use_sensor_simulation;
pub mod use_splash;

pub use use_navbar_refresh::use_navbar_refresh;
pub use use_sensor_simulation::use_sensor_simulation;
pub use use_splash::use_splash;
