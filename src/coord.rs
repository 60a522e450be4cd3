use std::fmt;

use itertools::Itertools;

use crate::force::Force;


pub const NUM_ROWS: u8 = 8;
pub const NUM_COLS: u8 = 8;


// Matrix row, as delivered by the server. Row 0 is the top-most row, i.e. rank 8.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Row {
    idx: u8,  // 0-based
}

impl Row {
    pub const fn from_zero_based(idx: u8) -> Self {
        assert!(idx < NUM_ROWS);
        Self { idx }
    }
    pub const fn to_zero_based(self) -> u8 { self.idx }
    // Rank digit: '8' for row 0 down to '1' for row 7.
    pub const fn to_algebraic(self) -> char { (b'0' + NUM_ROWS - self.idx) as char }
    pub fn all() -> impl Iterator<Item = Self> + Clone {
        (0..NUM_ROWS).map(|idx| Self::from_zero_based(idx))
    }

    // The force that starts the game on this row, if any. Used to tell the color of
    // pieces that are sent as bare letters.
    pub fn home_force(self) -> Option<Force> {
        match self.idx {
            0 | 1 => Some(Force::Black),
            6 | 7 => Some(Force::White),
            _ => None,
        }
    }
}


#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Col {
    idx: u8,  // 0-based
}

impl Col {
    pub const fn from_zero_based(idx: u8) -> Col {
        assert!(idx < NUM_COLS);
        Col { idx }
    }
    pub const fn to_zero_based(self) -> u8 { self.idx }
    pub const fn to_algebraic(self) -> char { (self.idx + b'a') as char }
    pub fn all() -> impl Iterator<Item = Self> + Clone {
        (0..NUM_COLS).map(|idx| Self::from_zero_based(idx))
    }
}


#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: Row,
    pub col: Col,
}

impl Coord {
    pub const fn new(row: Row, col: Col) -> Self { Self { row, col } }
    // Row-major: a8, b8, ..., h8, a7, ..., h1.
    pub fn all() -> impl Iterator<Item = Coord> {
        Row::all().cartesian_product(Col::all()).map(|(row, col)| Coord { row, col })
    }
    pub fn is_light(self) -> bool {
        (self.row.to_zero_based() + self.col.to_zero_based()) % 2 == 0
    }
}

impl fmt::Debug for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coord({}{})", self.col.to_algebraic(), self.row.to_algebraic())
    }
}
