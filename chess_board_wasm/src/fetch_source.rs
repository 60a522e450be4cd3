use async_trait::async_trait;
use chess_board::{BoardSource, LoadError, check_response_status, parse_pieces_body};
use serde_json::Value;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::web_error_handling::js_error_message;


// Reads the board with a plain `GET` through the browser `fetch` API.
pub struct FetchBoardSource {
    path: String,
}

impl FetchBoardSource {
    pub fn new(path: impl Into<String>) -> Self { FetchBoardSource { path: path.into() } }
}

fn network_error(err: wasm_bindgen::JsValue) -> LoadError { LoadError::Network(js_error_message(&err)) }

#[async_trait(?Send)]
impl BoardSource for FetchBoardSource {
    async fn fetch_pieces(&self) -> Result<Value, LoadError> {
        let window =
            web_sys::window().ok_or_else(|| LoadError::Network("No window object".to_owned()))?;
        let response = JsFuture::from(window.fetch_with_str(&self.path))
            .await
            .map_err(network_error)?;
        let response: web_sys::Response = response
            .dyn_into()
            .map_err(|_| LoadError::Network("Fetch did not produce a response".to_owned()))?;
        check_response_status(response.status())?;
        let body = JsFuture::from(response.text().map_err(network_error)?)
            .await
            .map_err(network_error)?;
        let body = body
            .as_string()
            .ok_or_else(|| LoadError::Parse("Response body is not text".to_owned()))?;
        parse_pieces_body(&body)
    }
}
