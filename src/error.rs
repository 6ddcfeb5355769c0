//! Errors raised while wiring the page.
//!
//! Everything here is a missing precondition: the markup or browser does not
//! provide something the script relies on. They surface to JavaScript as
//! exceptions thrown from `initialize()`.

use std::fmt;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq)]
pub enum SiteError {
    /// No global `window` (not running in a browser).
    NoWindow,
    /// The window has no document.
    NoDocument,
    /// No element with the given id.
    MissingElement(String),
    /// The element exists but is not the expected kind.
    NotA { id: String, expected: &'static str },
    /// The canvas refused to hand out a 2d context.
    NoContext,
    /// `querySelectorAll` rejected the selector.
    InvalidSelector(String),
}

impl fmt::Display for SiteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteError::NoWindow => write!(f, "no global window"),
            SiteError::NoDocument => write!(f, "window has no document"),
            SiteError::MissingElement(id) => write!(f, "missing element #{}", id),
            SiteError::NotA { id, expected } => write!(f, "element #{} is not a {}", id, expected),
            SiteError::NoContext => write!(f, "canvas has no 2d context"),
            SiteError::InvalidSelector(selector) => write!(f, "invalid selector {:?}", selector),
        }
    }
}

impl std::error::Error for SiteError {}

impl From<SiteError> for JsValue {
    fn from(e: SiteError) -> Self {
        js_sys::Error::new(&e.to_string()).into()
    }
}
