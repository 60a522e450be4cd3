// Rust-upgrade (https://github.com/rust-lang/rust/issues/46379):
//   remove `#[allow(dead_code)]` before public functions.

use chess_board::test_util::RecordingView;
use chess_board::{BoardSource, LoadState, load_board};


pub const STARTING_POSITION_GLYPHS: [&str; 8] = [
    "♜♞♝♛♚♝♞♜",
    "♟♟♟♟♟♟♟♟",
    "........",
    "........",
    "........",
    "........",
    "♙♙♙♙♙♙♙♙",
    "♖♘♗♕♔♗♘♖",
];

#[allow(dead_code)]
pub async fn load_into_new_view(source: &impl BoardSource) -> (RecordingView, LoadState) {
    let mut view = RecordingView::new();
    let state = match load_board(&mut view, source).await {
        Ok(state) => state,
        Err(never) => match never {},
    };
    (view, state)
}
