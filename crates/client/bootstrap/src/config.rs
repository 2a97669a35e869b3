//! Client configuration structures and loaders.
use std::env;
use std::path::PathBuf;

use cat_core::GameConfig;

/// Configuration required to bootstrap an engine and its shell.
#[derive(Clone, Debug, Default)]
pub struct ClientConfig {
    pub game: GameConfig,
    /// Seed for the first board; `None` draws a fresh one.
    pub seed: Option<u64>,
    /// Write logs to a file in this directory instead of stderr.
    pub log_dir: Option<PathBuf>,
}

impl ClientConfig {
    pub const fn new(game: GameConfig) -> Self {
        Self {
            game,
            seed: None,
            log_dir: None,
        }
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `CAT_BOARD_SIZE` - Rows and columns of the board (default: 11)
    /// - `CAT_CANVAS_WIDTH` - Canvas width in pixels (default: 400)
    /// - `CAT_PADDING` - Canvas padding in pixels (default: 20)
    /// - `CAT_X_GAP` - Horizontal gap between cells (default: 3)
    /// - `CAT_SEED` - Seed for the first board (default: random)
    /// - `CAT_LOG_DIR` - Directory for the log file (default: log to stderr)
    ///
    /// Values that fail to parse are ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(size) = read_var::<u32>(&lookup, "CAT_BOARD_SIZE") {
            config.game.board_size = size;
        }
        if let Some(width) = read_var::<f64>(&lookup, "CAT_CANVAS_WIDTH") {
            config.game.canvas_width = width;
        }
        if let Some(padding) = read_var::<f64>(&lookup, "CAT_PADDING") {
            config.game.padding = padding;
        }
        if let Some(gap) = read_var::<f64>(&lookup, "CAT_X_GAP") {
            config.game.x_gap = gap;
        }

        config.seed = read_var::<u64>(&lookup, "CAT_SEED");
        config.log_dir = lookup("CAT_LOG_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from);

        config
    }
}

fn read_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    lookup(key)?.trim().parse().ok()
}
