//! Builds the engine and config bundle used by front-ends.
use anyhow::{Context, Result};
use cat_core::GameEngine;

use crate::config::ClientConfig;

/// Builder that assembles a ready-to-play engine from client configuration.
pub struct EngineBuilder {
    config: ClientConfig,
}

impl EngineBuilder {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    /// Override the seed of the first board.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Lays out the board and generates the first obstacle set.
    pub fn build(self) -> Result<EngineSetup> {
        let game = &self.config.game;
        let mut engine = GameEngine::new(game.clone()).with_context(|| {
            format!(
                "cannot lay out a {size}x{size} board on a {width}px canvas",
                size = game.board_size,
                width = game.canvas_width,
            )
        })?;
        engine.restart(self.config.seed);

        tracing::info!(
            size = engine.size(),
            seed = engine.seed(),
            cell_size = engine.layout().cell_size(),
            "engine ready"
        );

        Ok(EngineSetup {
            config: self.config,
            engine,
        })
    }
}

pub struct EngineSetup {
    pub config: ClientConfig,
    pub engine: GameEngine,
}
