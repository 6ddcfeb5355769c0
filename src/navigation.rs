// Hamburger menu toggle and offset smooth scrolling for in-page links

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, ScrollBehavior, ScrollToOptions};

use crate::error::SiteError;
use crate::utils;

pub const HAMBURGER_ID: &str = "js-hamburger";
pub const NAV_ID: &str = "js-nav";
pub const NAV_LINK_SELECTOR: &str = ".nav__link";
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";
pub const ACTIVE_CLASS: &str = "is-active";
// Height of the fixed header the target should land below
pub const HEADER_OFFSET: f64 = 80.0;

// Document y to scroll to so a target at `element_top` (viewport relative)
// sits just under the header
pub fn scroll_target(element_top: f64, page_y_offset: f64, header_offset: f64) -> f64 {
    element_top + page_y_offset - header_offset
}

pub fn init(document: &Document) -> Result<(), JsValue> {
    let hamburger = utils::element_by_id::<Element>(document, HAMBURGER_ID, "element")?;
    let nav = utils::element_by_id::<Element>(document, NAV_ID, "element")?;

    {
        let (hamburger_ref, nav) = (hamburger.clone(), nav.clone());
        let on_toggle = Closure::wrap(Box::new(move |_: Event| {
            let _ = hamburger_ref.class_list().toggle(ACTIVE_CLASS);
            let _ = nav.class_list().toggle(ACTIVE_CLASS);
        }) as Box<dyn FnMut(_)>);
        hamburger.add_event_listener_with_callback("click", on_toggle.as_ref().unchecked_ref())?;
        on_toggle.forget();
    }

    for link in utils::select_all(document, NAV_LINK_SELECTOR)? {
        let (hamburger, nav) = (hamburger.clone(), nav.clone());
        let on_close = Closure::wrap(Box::new(move |_: Event| {
            let _ = hamburger.class_list().remove_1(ACTIVE_CLASS);
            let _ = nav.class_list().remove_1(ACTIVE_CLASS);
        }) as Box<dyn FnMut(_)>);
        link.add_event_listener_with_callback("click", on_close.as_ref().unchecked_ref())?;
        on_close.forget();
    }

    for anchor in utils::select_all(document, ANCHOR_SELECTOR)? {
        let anchor_ref = anchor.clone();
        let document = document.clone();
        let on_click = Closure::wrap(Box::new(move |event: Event| {
            event.prevent_default();
            if let Err(e) = scroll_to_anchor(&document, &anchor_ref) {
                web_sys::console::error_1(&e);
            }
        }) as Box<dyn FnMut(_)>);
        anchor.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }

    Ok(())
}

fn scroll_to_anchor(document: &Document, anchor: &Element) -> Result<(), JsValue> {
    let href = match anchor.get_attribute("href") {
        Some(href) => href,
        None => return Ok(()),
    };
    // A bare "#" or an id that isn't on the page just stays put
    let target = match document.query_selector(&href) {
        Ok(Some(target)) => target,
        _ => return Ok(()),
    };

    let window = utils::window()?;
    let top = scroll_target(
        target.get_bounding_client_rect().top(),
        window.page_y_offset()?,
        HEADER_OFFSET,
    );
    let mut options = ScrollToOptions::new();
    options.top(top).behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
    Ok(())
}

pub fn is_open(hamburger: &Element, nav: &Element) -> bool {
    hamburger.class_list().contains(ACTIVE_CLASS) && nav.class_list().contains(ACTIVE_CLASS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_lands_below_header() {
        assert_eq!(scroll_target(500.0, 0.0, HEADER_OFFSET), 420.0);
        assert_eq!(scroll_target(250.0, 1000.0, HEADER_OFFSET), 1170.0);
    }

    #[test]
    fn targets_above_viewport_scroll_up() {
        assert_eq!(scroll_target(-300.0, 1000.0, HEADER_OFFSET), 620.0);
    }
}
