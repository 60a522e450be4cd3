use derive_new::new;
use enum_map::{Enum, EnumMap, enum_map};
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use strum::EnumIter;

use crate::force::Force;
use crate::util::as_single_char;


#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Enum, EnumIter, Serialize, Deserialize)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, new, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub force: Force,
}

lazy_static! {
    static ref PIECE_GLYPHS: EnumMap<Force, EnumMap<PieceKind, char>> = enum_map! {
        Force::White => enum_map! {
            PieceKind::Pawn => '♙',
            PieceKind::Knight => '♘',
            PieceKind::Bishop => '♗',
            PieceKind::Rook => '♖',
            PieceKind::Queen => '♕',
            PieceKind::King => '♔',
        },
        Force::Black => enum_map! {
            PieceKind::Pawn => '♟',
            PieceKind::Knight => '♞',
            PieceKind::Bishop => '♝',
            PieceKind::Rook => '♜',
            PieceKind::Queen => '♛',
            PieceKind::King => '♚',
        },
    };
}

impl PieceKind {
    pub fn to_full_algebraic(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    pub fn from_algebraic_char(notation: char) -> Option<Self> {
        match notation.to_ascii_uppercase() {
            'P' => Some(PieceKind::Pawn),
            'N' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            'R' => Some(PieceKind::Rook),
            'Q' => Some(PieceKind::Queen),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }

    // Case-insensitive. Accepts only one-letter codes: "N" and "n" are knights, "KNIGHT" is not.
    pub fn from_algebraic(notation: &str) -> Option<Self> {
        as_single_char(notation).and_then(Self::from_algebraic_char)
    }
}

impl Piece {
    pub fn glyph(self) -> char { piece_to_pictogram(self.kind, self.force) }

    // Compound wire token, e.g. "N_BLACK".
    pub fn to_compound_token(self) -> String {
        format!("{}_{}", self.kind.to_full_algebraic(), self.force.to_wire_name())
    }
}

pub fn piece_to_pictogram(piece_kind: PieceKind, force: Force) -> char {
    PIECE_GLYPHS[force][piece_kind]
}
