//! Error type shared by configuration, state parsing, and DOM binding.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Debug, thiserror::Error)]
pub enum PageError {
    /// No global `window` (not running in a browser).
    #[error("browser window unavailable")]
    NoWindow,
    /// The window has no document.
    #[error("document unavailable")]
    NoDocument,
    /// No element with the configured id.
    #[error("element not found: #{0}")]
    MissingElement(String),
    /// The element exists but has the wrong interface.
    #[error("element #{id} is not a {expected}")]
    WrongElementType { id: String, expected: &'static str },
    /// `localStorage` is disabled or blocked.
    #[error("localStorage unavailable")]
    StorageUnavailable,
    /// Theme string other than `light` or `dark`.
    #[error("unknown theme: {0:?}")]
    UnknownTheme(String),
    /// Radio value that names no proof filter.
    #[error("unknown proof filter: {0:?}")]
    UnknownFilter(String),
    /// No radio in the filter group is checked.
    #[error("no proof filter selected")]
    NoFilterSelected,
    /// Config parsed but failed validation.
    #[error("invalid page config: {0}")]
    InvalidConfig(String),
    #[error("page config is not valid JSON: {0}")]
    ConfigJson(#[from] serde_json::Error),
    /// A DOM call threw; carries the JS error text.
    #[error("dom operation failed: {0}")]
    Dom(String),
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for PageError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

#[cfg(feature = "hydrate")]
impl From<PageError> for wasm_bindgen::JsValue {
    fn from(err: PageError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}
