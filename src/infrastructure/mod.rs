// Page hosts for the navigation controller

pub mod memory_host;
pub use memory_host::MemoryHost;

// Live DOM (WASM only)
#[cfg(target_arch = "wasm32")]
pub mod browser_host;
#[cfg(target_arch = "wasm32")]
pub use browser_host::BrowserHost;
