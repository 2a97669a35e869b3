//! Shared bootstrap utilities for client front-ends.
//!
//! Provides configuration loading and engine setup that can be reused by the
//! terminal shell or any other front-end crate.
pub mod builder;
pub mod config;

pub use builder::{EngineBuilder, EngineSetup};
pub use config::ClientConfig;
