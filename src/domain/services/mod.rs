// Domain services
pub mod header;
pub mod navbar_controller;

pub use header::{render_header, HeaderMarkup};
pub use navbar_controller::{Bindings, NavbarController, PageHost};
