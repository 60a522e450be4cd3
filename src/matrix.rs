use std::{fmt, ops};

use serde_json::Value;

use crate::cell::{BoardCell, CellEncoding};
use crate::coord::{Col, Coord, NUM_COLS, NUM_ROWS, Row};
use crate::force::Force;
use crate::piece::{Piece, PieceKind};


#[derive(Clone, PartialEq, Eq, Debug)]
pub enum MatrixError {
    NotAnArray,
    WrongRowCount(usize),
    RowNotAnArray { row: usize },
    WrongColCount { row: usize, num_cols: usize },
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixError::NotAnArray => write!(f, "board is not an array"),
            MatrixError::WrongRowCount(n) => {
                write!(f, "expected {} rows, got {}", NUM_ROWS, n)
            }
            MatrixError::RowNotAnArray { row } => write!(f, "row {} is not an array", row),
            MatrixError::WrongColCount { row, num_cols } => {
                write!(f, "expected {} cells in row {}, got {}", NUM_COLS, row, num_cols)
            }
        }
    }
}

impl std::error::Error for MatrixError {}

// Server-provided board, row-major, row 0 is rank 8.
#[derive(Clone, PartialEq, Debug)]
pub struct BoardMatrix {
    cells: Vec<BoardCell>,
}

impl BoardMatrix {
    pub fn empty() -> Self {
        BoardMatrix {
            cells: vec![BoardCell::Empty; NUM_ROWS as usize * NUM_COLS as usize],
        }
    }

    pub fn from_json(value: &Value) -> Result<Self, MatrixError> {
        let rows = value.as_array().ok_or(MatrixError::NotAnArray)?;
        if rows.len() != NUM_ROWS as usize {
            return Err(MatrixError::WrongRowCount(rows.len()));
        }
        let mut cells = Vec::with_capacity(NUM_ROWS as usize * NUM_COLS as usize);
        for (row_idx, row) in rows.iter().enumerate() {
            let row = row.as_array().ok_or(MatrixError::RowNotAnArray { row: row_idx })?;
            if row.len() != NUM_COLS as usize {
                return Err(MatrixError::WrongColCount { row: row_idx, num_cols: row.len() });
            }
            cells.extend(row.iter().map(BoardCell::from_json));
        }
        Ok(BoardMatrix { cells })
    }

    pub fn to_json(&self, encoding: CellEncoding) -> Value {
        Value::Array(
            Row::all()
                .map(|row| {
                    Value::Array(
                        Col::all()
                            .map(|col| self[Coord::new(row, col)].to_json(encoding))
                            .collect(),
                    )
                })
                .collect(),
        )
    }

    pub fn starting_position() -> Self {
        use PieceKind::*;
        const BACK_RANK: [PieceKind; NUM_COLS as usize] =
            [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook];
        let mut matrix = Self::empty();
        for (force, back_row, pawn_row) in [(Force::Black, 0, 1), (Force::White, 7, 6)] {
            for col in Col::all() {
                let back_kind = BACK_RANK[col.to_zero_based() as usize];
                matrix[Coord::new(Row::from_zero_based(back_row), col)] =
                    BoardCell::Typed(Piece::new(back_kind, force));
                matrix[Coord::new(Row::from_zero_based(pawn_row), col)] =
                    BoardCell::Typed(Piece::new(Pawn, force));
            }
        }
        matrix
    }
}

impl ops::Index<Coord> for BoardMatrix {
    type Output = BoardCell;
    fn index(&self, pos: Coord) -> &Self::Output { &self.cells[coord_to_index(pos)] }
}

impl ops::IndexMut<Coord> for BoardMatrix {
    fn index_mut(&mut self, pos: Coord) -> &mut Self::Output {
        &mut self.cells[coord_to_index(pos)]
    }
}

fn coord_to_index(pos: Coord) -> usize {
    pos.row.to_zero_based() as usize * NUM_COLS as usize + pos.col.to_zero_based() as usize
}
