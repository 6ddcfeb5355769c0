// Contact form for the demo site: nothing is sent anywhere, the visitor just
// gets a thank-you and an empty form back

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlFormElement};

use crate::utils;

pub const FORM_ID: &str = "contact-form";
pub const ACKNOWLEDGEMENT: &str =
    "お問い合わせありがとうございます。\n（※これはデモサイトのため送信されません）";

pub fn init(document: &Document) -> Result<(), JsValue> {
    let form = utils::element_by_id::<HtmlFormElement>(document, FORM_ID, "form")?;
    let form_ref = form.clone();
    let on_submit = Closure::wrap(Box::new(move |event: Event| {
        let result = handle_submit(&form_ref, &event, |message| {
            utils::window()?.alert_with_message(message)
        });
        if let Err(e) = result {
            web_sys::console::error_1(&e);
        }
    }) as Box<dyn FnMut(_)>);
    form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())?;
    on_submit.forget();
    Ok(())
}

// Blocks the real submission, shows the acknowledgement through `notify`
// and clears every field. The form is reset even if `notify` fails.
pub fn handle_submit<F>(form: &HtmlFormElement, event: &Event, notify: F) -> Result<(), JsValue>
where
    F: FnOnce(&str) -> Result<(), JsValue>,
{
    event.prevent_default();
    let notified = notify(ACKNOWLEDGEMENT);
    form.reset();
    notified
}
