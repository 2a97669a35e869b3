//! Deterministic randomness for board generation.
//!
//! Boards are generated from a single `u64` seed. The [`RngOracle`] trait
//! keeps the generator swappable, and [`RollStream`] turns a seed into a
//! reproducible sequence of bounded rolls.
mod rng;

pub use rng::{PcgRng, RngOracle, RollStream, compute_seed};
