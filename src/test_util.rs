// Test utilities that cannot be moved to the "tests" folder, because unit tests use them too.

use std::convert::Infallible;

use async_trait::async_trait;
use serde_json::Value;

use crate::cell::CellEncoding;
use crate::loader::{BoardSource, LoadError, decode_pieces_response};
use crate::matrix::BoardMatrix;
use crate::render::{BoardView, LabelStrip, SquareView};


// In-memory render target. Records what a page would show.
#[derive(Clone, Debug, Default)]
pub struct RecordingView {
    pub rank_labels: Vec<String>,
    pub file_labels: Vec<String>,
    pub squares: Vec<SquareView>,
    pub status: String,
    // Every status text ever shown, in order.
    pub status_history: Vec<String>,
}

impl RecordingView {
    pub fn new() -> Self { Self::default() }

    pub fn labels(&self, strip: LabelStrip) -> &[String] {
        match strip {
            LabelStrip::Ranks => &self.rank_labels,
            LabelStrip::Files => &self.file_labels,
        }
    }

    fn labels_mut(&mut self, strip: LabelStrip) -> &mut Vec<String> {
        match strip {
            LabelStrip::Ranks => &mut self.rank_labels,
            LabelStrip::Files => &mut self.file_labels,
        }
    }

    // Board glyphs, one string per row, with '.' for empty squares.
    pub fn glyph_rows(&self) -> Vec<String> {
        self.squares
            .chunks(crate::coord::NUM_COLS as usize)
            .map(|row| row.iter().map(|sq| sq.glyph.unwrap_or('.')).collect())
            .collect()
    }
}

impl BoardView for RecordingView {
    type Error = Infallible;

    fn clear_labels(&mut self, strip: LabelStrip) -> Result<(), Infallible> {
        self.labels_mut(strip).clear();
        Ok(())
    }

    fn append_label(&mut self, strip: LabelStrip, text: &str) -> Result<(), Infallible> {
        self.labels_mut(strip).push(text.to_owned());
        Ok(())
    }

    fn clear_board(&mut self) -> Result<(), Infallible> {
        self.squares.clear();
        Ok(())
    }

    fn append_square(&mut self, square: &SquareView) -> Result<(), Infallible> {
        self.squares.push(square.clone());
        Ok(())
    }

    fn set_status(&mut self, text: &str) -> Result<(), Infallible> {
        self.status = text.to_owned();
        self.status_history.push(text.to_owned());
        Ok(())
    }
}

// Board source that answers with a fixed result.
#[derive(Clone, Debug)]
pub struct FixedBoardSource(pub Result<Value, LoadError>);

impl FixedBoardSource {
    pub fn starting_position(encoding: CellEncoding) -> Self {
        FixedBoardSource(Ok(BoardMatrix::starting_position().to_json(encoding)))
    }
}

#[async_trait(?Send)]
impl BoardSource for FixedBoardSource {
    async fn fetch_pieces(&self) -> Result<Value, LoadError> { self.0.clone() }
}

// Board source that answers with a raw HTTP-like response: status code and body text.
#[derive(Clone, Debug)]
pub struct RawBoardSource {
    pub status: u16,
    pub body: String,
}

#[async_trait(?Send)]
impl BoardSource for RawBoardSource {
    async fn fetch_pieces(&self) -> Result<Value, LoadError> {
        decode_pieces_response(self.status, &self.body)
    }
}
