#![cfg_attr(feature = "strict", deny(warnings))]

extern crate console_error_panic_hook;
extern crate serde_json;
extern crate wasm_bindgen;

extern crate chess_board;

pub mod dom_board_view;
pub mod fetch_source;
pub mod web_document;
pub mod web_element_ext;
pub mod web_error_handling;
pub mod web_logger;

use chess_board::{LoadState, PIECES_PATH, load_board};
use log::error;
use wasm_bindgen::prelude::*;

use crate::dom_board_view::DomBoardView;
use crate::fetch_source::FetchBoardSource;
use crate::web_document::web_document;
use crate::web_error_handling::{JsResult, set_panic_hook};


// Entry point: loads the board exactly once, when the page content is ready.
#[wasm_bindgen(start)]
pub fn start() -> JsResult<()> {
    set_panic_hook();
    web_logger::init(log::LevelFilter::Info);
    web_document()?.on_content_ready(|| {
        wasm_bindgen_futures::spawn_local(async {
            if let Err(err) = load_page_board().await {
                error!("Cannot render board: {:?}", err);
            }
        });
    })
}

async fn load_page_board() -> JsResult<LoadState> {
    let mut view = DomBoardView::from_document(&web_document()?)?;
    load_board(&mut view, &FetchBoardSource::new(PIECES_PATH)).await
}
