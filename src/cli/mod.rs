// Native pre-render tooling (NOT compiled for WASM)
pub mod prerender;

pub use prerender::{prerender_header, write_output};
