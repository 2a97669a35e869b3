//! Hex-grid rules for "trap the cat".
//!
//! `cat-core` owns the board model, the pixel layout of the staggered hex
//! grid and the escape search that drives the cat. It has no I/O: shells
//! feed it clicks (as cells or canvas points) and draw whatever it reports.
//! All state mutation flows through [`engine::GameEngine`], and supporting
//! crates depend on the types re-exported here.
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod geometry;
pub mod search;
pub mod state;

pub use config::GameConfig;
pub use engine::{BlockError, BlockOutcome, BlockResult, GameEngine, Outcome, SetupError};
pub use env::{PcgRng, RngOracle, RollStream, compute_seed};
pub use error::{ErrorSeverity, GameError};
pub use geometry::{Layout, LayoutError, Point, Rect};
pub use search::{EscapeRoute, find_escape};
pub use state::{Board, Neighbors, Position, StateError, hex_offsets};
