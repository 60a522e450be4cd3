use derive_new::new;
use log::warn;
use serde_json::Value;

use crate::coord::{Col, Coord, Row};
use crate::loader::LoadState;
use crate::matrix::BoardMatrix;


pub const BOARD_LOADED_MESSAGE: &str = "Board loaded.";
pub const INVALID_RESPONSE_MESSAGE: &str = "Invalid API response.";

pub const BOARD_CONTAINER_ID: &str = "board";
pub const STATUS_CONTAINER_ID: &str = "status";

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LabelStrip {
    Ranks,
    Files,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SquareShade {
    Light,
    Dark,
}

#[derive(Clone, PartialEq, Eq, Debug, new)]
pub struct SquareView {
    pub coord: Coord,
    pub glyph: Option<char>,
}

// Render target: the four page containers (rank labels, file labels, board, status line).
// Implementations must append children in call order.
pub trait BoardView {
    type Error;

    fn clear_labels(&mut self, strip: LabelStrip) -> Result<(), Self::Error>;
    fn append_label(&mut self, strip: LabelStrip, text: &str) -> Result<(), Self::Error>;
    fn clear_board(&mut self) -> Result<(), Self::Error>;
    fn append_square(&mut self, square: &SquareView) -> Result<(), Self::Error>;
    fn set_status(&mut self, text: &str) -> Result<(), Self::Error>;
}

impl LabelStrip {
    pub fn container_id(self) -> &'static str {
        match self {
            LabelStrip::Ranks => "rank-labels",
            LabelStrip::Files => "file-labels",
        }
    }

    pub fn class_name(self) -> &'static str {
        match self {
            LabelStrip::Ranks => "rank-label",
            LabelStrip::Files => "file-label",
        }
    }

    pub fn labels(self) -> Vec<String> {
        match self {
            LabelStrip::Ranks => Row::all().map(|row| row.to_algebraic().to_string()).collect(),
            LabelStrip::Files => Col::all().map(|col| col.to_algebraic().to_string()).collect(),
        }
    }
}

impl SquareShade {
    pub fn class_name(self) -> &'static str {
        match self {
            SquareShade::Light => "light",
            SquareShade::Dark => "dark",
        }
    }
}

impl SquareView {
    pub fn shade(&self) -> SquareShade {
        if self.coord.is_light() { SquareShade::Light } else { SquareShade::Dark }
    }

    pub fn classes(&self) -> [&'static str; 2] { ["square", self.shade().class_name()] }

    pub fn text(&self) -> String { self.glyph.map(String::from).unwrap_or_default() }
}

pub fn rank_labels() -> Vec<String> { LabelStrip::Ranks.labels() }
pub fn file_labels() -> Vec<String> { LabelStrip::Files.labels() }

fn create_labels<V: BoardView>(view: &mut V, strip: LabelStrip) -> Result<(), V::Error> {
    view.clear_labels(strip)?;
    for label in strip.labels() {
        view.append_label(strip, &label)?;
    }
    Ok(())
}

pub fn create_rank_labels<V: BoardView>(view: &mut V) -> Result<(), V::Error> {
    create_labels(view, LabelStrip::Ranks)
}

pub fn create_file_labels<V: BoardView>(view: &mut V) -> Result<(), V::Error> {
    create_labels(view, LabelStrip::Files)
}

pub fn board_squares(matrix: &BoardMatrix) -> Vec<SquareView> {
    Coord::all()
        .map(|coord| SquareView::new(coord, matrix[coord].glyph(coord.row)))
        .collect()
}

// Replaces board content with the given server response. Malformed responses are reported via
// status line; the returned error is reserved for render target failures.
pub fn render_board<V: BoardView>(view: &mut V, value: &Value) -> Result<LoadState, V::Error> {
    view.clear_board()?;
    let matrix = match BoardMatrix::from_json(value) {
        Ok(matrix) => matrix,
        Err(err) => {
            warn!("Invalid board response: {}", err);
            view.set_status(INVALID_RESPONSE_MESSAGE)?;
            return Ok(LoadState::Failed(INVALID_RESPONSE_MESSAGE.to_owned()));
        }
    };
    for square in board_squares(&matrix) {
        view.append_square(&square)?;
    }
    view.set_status(BOARD_LOADED_MESSAGE)?;
    Ok(LoadState::Loaded)
}
