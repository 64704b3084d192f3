//! Page-injected configuration

use dedup_common::{DedupError, Result};
use wasm_bindgen::JsValue;

/// Values the server injects into the page before the client starts.
///
/// `col_name` scopes every call to one collection; `csrf_token` goes into
/// the `X-CSRFToken` header of every mutating request. Both are read once
/// at startup and passed into the root component, never read ambiently.
#[derive(Debug, Clone, PartialEq)]
pub struct PageContext {
    pub col_name: String,
    pub csrf_token: String,
}

impl PageContext {
    pub fn from_window() -> Result<Self> {
        Ok(PageContext {
            col_name: read_global("col_name")?,
            csrf_token: read_global("csrf_token")?,
        })
    }
}

fn read_global(name: &'static str) -> Result<String> {
    let window = web_sys::window().ok_or(DedupError::MissingContext(name))?;
    js_sys::Reflect::get(&window, &JsValue::from_str(name))
        .ok()
        .and_then(|value| value.as_string())
        .filter(|value| !value.is_empty())
        .ok_or(DedupError::MissingContext(name))
}
