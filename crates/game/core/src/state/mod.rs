//! Authoritative board state representation.
//!
//! This module owns the occupancy grid, cell coordinates and the hex
//! adjacency rule. Front-ends read this state but mutate it exclusively
//! through the engine.
pub mod error;
pub mod types;

pub use error::StateError;
pub use types::{Board, Neighbors, Position, hex_offsets};
