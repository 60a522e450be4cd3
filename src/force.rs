use enum_map::Enum;
use serde::{Deserialize, Serialize};
use strum::EnumIter;


#[derive(
    Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Enum, EnumIter, Serialize, Deserialize,
)]
pub enum Force {
    White,
    Black,
}

impl Force {
    // Wire name, as used by the `/chess/pieces` endpoint.
    pub fn to_wire_name(self) -> &'static str {
        match self {
            Force::White => "WHITE",
            Force::Black => "BLACK",
        }
    }

    // Case-insensitive. Surrounding whitespace is not allowed.
    pub fn from_wire_name(name: &str) -> Option<Self> {
        match name.to_ascii_uppercase().as_str() {
            "WHITE" => Some(Force::White),
            "BLACK" => Some(Force::Black),
            _ => None,
        }
    }
}
