use std::fmt;

use async_trait::async_trait;
use log::{info, warn};
use serde_json::Value;

use crate::render::{BoardView, create_file_labels, create_rank_labels, render_board};


pub const PIECES_PATH: &str = "/chess/pieces";
pub const LOADING_MESSAGE: &str = "Loading board...";

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum LoadError {
    Network(String),
    HttpStatus(u16),
    Parse(String),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Network(message) => write!(f, "{}", message),
            LoadError::HttpStatus(status) => write!(f, "HTTP {}", status),
            LoadError::Parse(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for LoadError {}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self { LoadError::Parse(err.to_string()) }
}

// Observable page state. There is no way back to `Loading` short of reloading the page.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum LoadState {
    Loading,
    Loaded,
    Failed(String),
}

// Where the board comes from. In the browser this is a `fetch` of `PIECES_PATH`.
#[async_trait(?Send)]
pub trait BoardSource {
    async fn fetch_pieces(&self) -> Result<Value, LoadError>;
}

// Any 2xx answer carries a board; everything else is reported by its status code.
pub fn check_response_status(status: u16) -> Result<(), LoadError> {
    if (200..300).contains(&status) { Ok(()) } else { Err(LoadError::HttpStatus(status)) }
}

pub fn parse_pieces_body(body: &str) -> Result<Value, LoadError> { Ok(serde_json::from_str(body)?) }

pub fn decode_pieces_response(status: u16, body: &str) -> Result<Value, LoadError> {
    check_response_status(status)?;
    parse_pieces_body(body)
}

pub fn error_status_text(err: &LoadError) -> String { format!("Error: {}", err) }

// One full load cycle. Load failures end up in the status line and in the returned state; only
// render target failures are propagated.
pub async fn load_board<V: BoardView>(
    view: &mut V, source: &impl BoardSource,
) -> Result<LoadState, V::Error> {
    view.set_status(LOADING_MESSAGE)?;
    create_rank_labels(view)?;
    create_file_labels(view)?;
    info!("Loading board from {}", PIECES_PATH);
    match source.fetch_pieces().await {
        Ok(value) => render_board(view, &value),
        Err(err) => {
            warn!("Failed to load board: {}", err);
            let text = error_status_text(&err);
            view.clear_board()?;
            view.set_status(&text)?;
            Ok(LoadState::Failed(text))
        }
    }
}


#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_util::{RawBoardSource, RecordingView};

    #[test]
    fn error_texts() {
        assert_eq!(error_status_text(&LoadError::HttpStatus(404)), "Error: HTTP 404");
        assert_eq!(
            error_status_text(&LoadError::Network("Failed to fetch".to_owned())),
            "Error: Failed to fetch"
        );
        let parse_err = serde_json::from_str::<Value>("{").unwrap_err();
        let text = error_status_text(&parse_err.into());
        assert!(text.starts_with("Error: EOF"), "{text}");
    }

    #[test]
    fn response_status() {
        for status in [200, 204, 299] {
            assert_eq!(check_response_status(status), Ok(()));
        }
        for status in [199, 301, 404, 500, 503] {
            assert_eq!(check_response_status(status), Err(LoadError::HttpStatus(status)));
        }
    }

    #[test]
    fn decode_response() {
        let board = crate::BoardMatrix::starting_position().to_json(crate::CellEncoding::Compound);
        assert_eq!(decode_pieces_response(200, &board.to_string()), Ok(board.clone()));
        assert_eq!(decode_pieces_response(204, &board.to_string()), Ok(board));
        assert_eq!(decode_pieces_response(404, "[]"), Err(LoadError::HttpStatus(404)));
        // The body of a failed response is never looked at.
        assert_eq!(decode_pieces_response(503, "<html>"), Err(LoadError::HttpStatus(503)));
        assert!(matches!(decode_pieces_response(200, "<html>"), Err(LoadError::Parse(_))));
        assert!(matches!(decode_pieces_response(200, ""), Err(LoadError::Parse(_))));
    }

    #[async_std::test]
    async fn no_content_response_still_renders() {
        let body = crate::BoardMatrix::starting_position()
            .to_json(crate::CellEncoding::Structured)
            .to_string();
        let mut view = RecordingView::new();
        let source = RawBoardSource { status: 204, body };
        assert_eq!(load_board(&mut view, &source).await.unwrap(), LoadState::Loaded);
        assert_eq!(view.status, crate::BOARD_LOADED_MESSAGE);

        let mut view = RecordingView::new();
        let source = RawBoardSource { status: 404, body: "Not Found".to_owned() };
        let state = load_board(&mut view, &source).await.unwrap();
        assert_eq!(state, LoadState::Failed("Error: HTTP 404".to_owned()));
        assert!(view.squares.is_empty());
    }
}
