use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum FrontendError {
    #[error("DOM operation failed: {0}")]
    Dom(String),

    #[error("document has no <head> element")]
    MissingHead,
}

impl FrontendError {
    pub fn dom(value: JsValue) -> Self {
        Self::Dom(format!("{value:?}"))
    }
}
