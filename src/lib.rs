mod error;
mod timer;
mod utils;

pub mod animation;
pub mod color;
pub mod contact;
pub mod field;
pub mod navigation;
pub mod particle;
pub mod renderer;
pub mod reveal;
pub mod surface;

pub use error::SiteError;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, Document};

use crate::animation::AnimationDriver;
use crate::field::FieldConfig;

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

// Entry point called by the page once the module has loaded. Wires everything
// up right away if the DOM is ready, otherwise on DOMContentLoaded.
#[wasm_bindgen]
pub fn initialize() -> Result<(), JsValue> {
    utils::set_panic_hook();
    let document = utils::document()?;

    if document.ready_state() != "loading" {
        return wire_page(&document);
    }

    let loaded_document = document.clone();
    let on_loaded = Closure::once(move || {
        if let Err(e) = wire_page(&loaded_document) {
            console::error_1(&e);
        }
    });
    document.add_event_listener_with_callback("DOMContentLoaded", on_loaded.as_ref().unchecked_ref())?;
    on_loaded.forget();
    Ok(())
}

fn wire_page(document: &Document) -> Result<(), JsValue> {
    navigation::init(document)?;
    AnimationDriver::from_document(FieldConfig::default())?.start()?;
    reveal::init(document)?;
    contact::init(document)?;
    Ok(())
}
