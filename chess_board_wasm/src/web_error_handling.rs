use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;


pub type JsResult<T> = Result<T, JsValue>;

// Logs panics to the browser developer console. For more details see
// https://github.com/rustwasm/console_error_panic_hook#readme
pub fn set_panic_hook() { console_error_panic_hook::set_once(); }

#[wasm_bindgen(getter_with_clone)]
pub struct RustError {
    pub message: String,
}

#[macro_export]
macro_rules! rust_error {
    ($($arg:tt)*) => {
        wasm_bindgen::JsValue::from(
            $crate::web_error_handling::RustError{ message: format!($($arg)*) }
        )
    };
}

// Human-readable message for an exception thrown by a browser API, e.g. a rejected `fetch`.
pub fn js_error_message(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    if let Some(message) = value.as_string() {
        return message;
    }
    format!("{:?}", value)
}
