use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Window};

use crate::error::SiteError;

pub fn set_panic_hook() {
    // Panics otherwise show up as an opaque "unreachable" in the console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

pub fn window() -> Result<Window, SiteError> {
    web_sys::window().ok_or(SiteError::NoWindow)
}

pub fn document() -> Result<Document, SiteError> {
    window()?.document().ok_or(SiteError::NoDocument)
}

pub fn element_by_id<T: JsCast>(
    document: &Document,
    id: &str,
    expected: &'static str,
) -> Result<T, SiteError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| SiteError::MissingElement(id.to_owned()))?
        .dyn_into::<T>()
        .map_err(|_| SiteError::NotA {
            id: id.to_owned(),
            expected,
        })
}

// querySelectorAll flattened into the elements it matched
pub fn select_all(document: &Document, selector: &str) -> Result<Vec<Element>, SiteError> {
    let nodes = document
        .query_selector_all(selector)
        .map_err(|_| SiteError::InvalidSelector(selector.to_owned()))?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

pub fn viewport_size(window: &Window) -> (f64, f64) {
    let width = window.inner_width().ok().and_then(|w| w.as_f64()).unwrap_or(0.0);
    let height = window.inner_height().ok().and_then(|h| h.as_f64()).unwrap_or(0.0);
    (width, height)
}
