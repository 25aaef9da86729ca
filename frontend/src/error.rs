use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("local storage unavailable")]
    NoStorage,
    #[error("javascript error: {0}")]
    Js(String),
    #[error("invalid site config: {0}")]
    Config(#[from] serde_json::Error),
}

impl From<JsValue> for SiteError {
    fn from(value: JsValue) -> Self {
        SiteError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}
