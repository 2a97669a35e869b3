pub mod board;
pub mod common;

pub use board::{Board, Neighbors, hex_offsets};
pub use common::Position;
