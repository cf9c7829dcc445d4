pub mod element_index;
pub mod models;
pub mod services;
