pub mod navbar;
pub mod shell;

pub use navbar::SharedNavbar;
pub use shell::Layout;
