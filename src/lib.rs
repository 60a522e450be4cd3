#![forbid(unsafe_code)]
#![cfg_attr(feature = "strict", deny(warnings))]

pub mod cell;
pub mod coord;
pub mod force;
pub mod loader;
pub mod matrix;
pub mod piece;
pub mod render;
pub mod test_util;
pub mod util;

pub use cell::*;
pub use coord::*;
pub use force::*;
pub use loader::*;
pub use matrix::*;
pub use piece::*;
pub use render::*;
