use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("No window available")]
    NoWindow,

    #[error("No document attached to window")]
    NoDocument,

    #[error("Document has no body")]
    NoBody,

    #[error("DOM error: {0}")]
    Dom(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for AppError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        AppError::Dom(format!("{:?}", value))
    }
}
