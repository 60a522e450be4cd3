use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use crate::rust_error;
use crate::web_error_handling::JsResult;


pub struct WebDocument(web_sys::Document);

impl WebDocument {
    pub fn get_existing_element_by_id(&self, element_id: &str) -> JsResult<web_sys::Element> {
        let element = self
            .0
            .get_element_by_id(element_id)
            .ok_or_else(|| rust_error!("Cannot find element \"{}\"", element_id))?;
        if !element.is_object() {
            return Err(rust_error!("Element \"{}\" is not an object", element_id));
        }
        Ok(element)
    }

    // Runs `f` once the DOM is fully parsed: immediately if this has already happened (the module
    // is often initialized after `DOMContentLoaded`), otherwise on `DOMContentLoaded`.
    pub fn on_content_ready(&self, f: impl FnOnce() + 'static) -> JsResult<()> {
        if self.0.ready_state() != "loading" {
            f();
            return Ok(());
        }
        self.on_dom_content_loaded(f)
    }

    pub fn on_dom_content_loaded(&self, f: impl FnOnce() + 'static) -> JsResult<()> {
        let callback = Closure::once_into_js(f);
        self.0
            .add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref())?;
        Ok(())
    }

    pub fn document(&self) -> &web_sys::Document { &self.0 }
}

pub fn web_document() -> JsResult<WebDocument> {
    let window = web_sys::window().ok_or_else(|| rust_error!("Cannot find window"))?;
    let document = window.document().ok_or_else(|| rust_error!("Cannot find document"))?;
    Ok(WebDocument(document))
}
