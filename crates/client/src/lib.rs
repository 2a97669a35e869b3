//! Line-oriented terminal shell for trap-the-cat.
//!
//! The shell owns a [`cat_core::GameEngine`], draws the board as text and
//! turns typed commands into engine calls. It never decides game rules; every
//! outcome it prints comes from the engine.
pub mod command;
pub mod logging;
pub mod render;
pub mod shell;

pub use command::{Command, CommandError};
pub use shell::Shell;
