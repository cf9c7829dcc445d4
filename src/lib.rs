// Public API (shared between browser and native builds)
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod shared;

// Dioxus application (pages render in the browser)
pub mod app;

// Native-only tooling (NOT compiled for WASM)
#[cfg(not(target_arch = "wasm32"))]
pub mod cli;
