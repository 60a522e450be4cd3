// Decoding of board cells as delivered by the `/chess/pieces` endpoint.
//
// The server may describe a piece in three ways:
//   - an object: `{"type": "N", "color": "BLACK"}`;
//   - a compound token: `"N_BLACK"`;
//   - a bare letter: `"N"`, in which case the color is implied by the row.
// All of them are case-insensitive. Anything we don't understand is shown as an empty square.

use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::coord::Row;
use crate::force::Force;
use crate::piece::{Piece, PieceKind};
use crate::util::is_falsy_json;


pub const COMPOUND_TOKEN_SEPARATOR: char = '_';

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum CellEncoding {
    Structured,
    Compound,
    Letter,
}

#[derive(Clone, PartialEq, Debug)]
pub enum BoardCell {
    Empty,
    Typed(Piece),
    // Piece kind without color. The color is inferred from the row.
    AmbiguousLetter(PieceKind),
    Unrecognized(Value),
}

impl BoardCell {
    pub fn from_json(value: &Value) -> Self {
        if is_falsy_json(value) {
            return BoardCell::Empty;
        }
        let cell = match value {
            Value::Object(fields) => {
                let kind = fields.get("type").and_then(Value::as_str);
                let force = fields.get("color").and_then(Value::as_str);
                match (kind, force) {
                    (Some(kind), Some(force)) => Self::from_kind_and_force(kind, force),
                    _ => None,
                }
            }
            Value::String(token) => Self::from_token(token),
            _ => None,
        };
        cell.unwrap_or_else(|| {
            debug!("Unrecognized board cell: {}", value);
            BoardCell::Unrecognized(value.clone())
        })
    }

    fn from_token(token: &str) -> Option<Self> {
        let token = token.trim();
        if token.is_empty() {
            return Some(BoardCell::Empty);
        }
        if token.contains(COMPOUND_TOKEN_SEPARATOR) {
            let mut parts = token.split(COMPOUND_TOKEN_SEPARATOR);
            match (parts.next(), parts.next(), parts.next()) {
                (Some(kind), Some(force), None) => Self::from_kind_and_force(kind, force),
                _ => None,
            }
        } else {
            PieceKind::from_algebraic(token).map(BoardCell::AmbiguousLetter)
        }
    }

    fn from_kind_and_force(kind: &str, force: &str) -> Option<Self> {
        let kind = PieceKind::from_algebraic(kind)?;
        let force = Force::from_wire_name(force)?;
        Some(BoardCell::Typed(Piece::new(kind, force)))
    }

    pub fn piece(&self, row: Row) -> Option<Piece> {
        match self {
            BoardCell::Empty | BoardCell::Unrecognized(_) => None,
            BoardCell::Typed(piece) => Some(*piece),
            BoardCell::AmbiguousLetter(kind) => row.home_force().map(|force| Piece::new(*kind, force)),
        }
    }

    pub fn glyph(&self, row: Row) -> Option<char> { self.piece(row).map(Piece::glyph) }

    pub fn to_json(&self, encoding: CellEncoding) -> Value {
        match self {
            BoardCell::Empty => Value::Null,
            BoardCell::Typed(piece) => match encoding {
                CellEncoding::Structured => json!({
                    "type": piece.kind.to_full_algebraic().to_string(),
                    "color": piece.force.to_wire_name(),
                }),
                CellEncoding::Compound => Value::String(piece.to_compound_token()),
                CellEncoding::Letter => Value::String(piece.kind.to_full_algebraic().to_string()),
            },
            BoardCell::AmbiguousLetter(kind) => Value::String(kind.to_full_algebraic().to_string()),
            BoardCell::Unrecognized(value) => value.clone(),
        }
    }
}

// Glyph to show for the given cell value, or an empty string. Never fails.
pub fn piece_to_symbol(value: &Value, row: Row) -> String {
    BoardCell::from_json(value).glyph(row).map(String::from).unwrap_or_default()
}


#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;

    use super::*;
    use crate::piece::piece_to_pictogram;

    fn row(idx: u8) -> Row { Row::from_zero_based(idx) }

    #[test]
    fn structured_all_pieces() {
        for (kind, force) in PieceKind::iter().cartesian_product(Force::iter()) {
            let letter = kind.to_full_algebraic().to_string();
            let color = force.to_wire_name();
            let expected = piece_to_pictogram(kind, force).to_string();
            for (t, c) in [
                (letter.clone(), color.to_owned()),
                (letter.to_lowercase(), color.to_lowercase()),
            ] {
                // Row doesn't matter for fully specified pieces.
                for r in Row::all() {
                    let value = json!({ "type": t, "color": c });
                    assert_eq!(piece_to_symbol(&value, r), expected, "{value}");
                }
            }
        }
    }

    #[test]
    fn compound_all_pieces() {
        for (kind, force) in PieceKind::iter().cartesian_product(Force::iter()) {
            let token = Piece::new(kind, force).to_compound_token();
            let expected = piece_to_pictogram(kind, force).to_string();
            assert_eq!(piece_to_symbol(&json!(token), row(4)), expected);
            assert_eq!(piece_to_symbol(&json!(token.to_lowercase()), row(4)), expected);
        }
    }

    #[test]
    fn compound_any_case() {
        for token in ["N_BLACK", "n_black", "N_Black", " n_BLACK "] {
            assert_eq!(piece_to_symbol(&json!(token), row(3)), "♞", "{token}");
        }
    }

    #[test]
    fn empty_values() {
        for value in [json!(null), json!(false), json!(0), json!(""), json!("   ")] {
            for r in Row::all() {
                assert_eq!(piece_to_symbol(&value, r), "");
            }
            assert_eq!(BoardCell::from_json(&value), BoardCell::Empty);
        }
    }

    #[test]
    fn bare_letter_color_from_row() {
        assert_eq!(piece_to_symbol(&json!("P"), row(0)), "♟");
        assert_eq!(piece_to_symbol(&json!("P"), row(1)), "♟");
        assert_eq!(piece_to_symbol(&json!("P"), row(6)), "♙");
        assert_eq!(piece_to_symbol(&json!("P"), row(7)), "♙");
        assert_eq!(piece_to_symbol(&json!("p"), row(7)), "♙");
        for r in 2..6 {
            assert_eq!(piece_to_symbol(&json!("P"), row(r)), "");
        }
    }

    #[test]
    fn unrecognized_values() {
        let values = [
            json!("X"),
            json!("X_WHITE"),
            json!("P_GREEN"),
            json!("P_WHITE_EXTRA"),
            json!("_"),
            json!("KNIGHT"),
            json!(true),
            json!(42),
            json!([]),
            json!({}),
            json!({ "type": "P" }),
            json!({ "type": 1, "color": "WHITE" }),
            json!({ "type": "PAWN", "color": "WHITE" }),
        ];
        for value in values {
            for r in Row::all() {
                assert_eq!(piece_to_symbol(&value, r), "", "{value}");
            }
            assert_eq!(BoardCell::from_json(&value), BoardCell::Unrecognized(value.clone()));
        }
    }

    #[test]
    fn decode_variants() {
        assert_eq!(
            BoardCell::from_json(&json!({ "type": "q", "color": "white" })),
            BoardCell::Typed(Piece::new(PieceKind::Queen, Force::White))
        );
        assert_eq!(
            BoardCell::from_json(&json!("R_BLACK")),
            BoardCell::Typed(Piece::new(PieceKind::Rook, Force::Black))
        );
        assert_eq!(BoardCell::from_json(&json!("b")), BoardCell::AmbiguousLetter(PieceKind::Bishop));
    }

    #[test]
    fn encode() {
        let knight = BoardCell::Typed(Piece::new(PieceKind::Knight, Force::Black));
        assert_eq!(
            knight.to_json(CellEncoding::Structured),
            json!({ "type": "N", "color": "BLACK" })
        );
        assert_eq!(knight.to_json(CellEncoding::Compound), json!("N_BLACK"));
        assert_eq!(knight.to_json(CellEncoding::Letter), json!("N"));
        assert_eq!(BoardCell::Empty.to_json(CellEncoding::Structured), json!(null));
    }
}
