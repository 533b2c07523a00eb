//! Crate error type. Missing optional page elements are not errors; see
//! [`crate::dom::Page`].

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum FxError {
    #[error("no window")]
    NoWindow,
    #[error("no document")]
    NoDocument,
    #[error("canvas '{0}' has no 2d context")]
    NoContext(String),
    #[error("typewriter needs at least one text")]
    EmptyTexts,
    #[error("invalid effects config: {0}")]
    Config(#[from] serde_json::Error),
    #[error("js error: {0}")]
    Js(String),
}

pub type Result<T> = std::result::Result<T, FxError>;

impl From<JsValue> for FxError {
    fn from(value: JsValue) -> Self {
        FxError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<FxError> for JsValue {
    fn from(err: FxError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
