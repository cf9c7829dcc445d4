pub mod errors;
pub mod events;
pub mod logging;

// Dioxus hooks used by the page components
pub mod hooks;
