//! Engine construction and board generation.

use tracing::{debug, info};

use crate::config::GameConfig;
use crate::env::RollStream;
use crate::geometry::{Layout, LayoutError, Point};
use crate::state::{Board, Position, StateError};

use super::{GameEngine, Outcome, SetupError};

impl GameEngine {
    /// Creates an engine with an empty `config.board_size` board and the cat
    /// in the centre. Call [`reset`](Self::reset) to scatter obstacles.
    pub fn new(config: GameConfig) -> Result<Self, LayoutError> {
        let layout = Layout::from_config(&config)?;
        let board = Board::new(config.board_size);
        let cat = board.center();

        Ok(Self {
            config,
            layout,
            board,
            cat,
            outcome: Outcome::InProgress,
            seed: 0,
            moves: 0,
        })
    }

    /// Builds an engine around a hand-made board.
    ///
    /// The layout follows the board's size rather than `config.board_size`.
    /// A cat placed on the boundary starts out as [`Outcome::CatEscaped`].
    pub fn from_board(
        mut config: GameConfig,
        board: Board,
        cat: Position,
    ) -> Result<Self, SetupError> {
        config.board_size = board.size();
        let layout = Layout::from_config(&config)?;

        if !board.contains(cat) {
            return Err(StateError::TokenOutOfBounds {
                position: cat,
                size: board.size(),
            }
            .into());
        }
        if board.is_blocked(cat) {
            return Err(StateError::TokenOnBlockedCell { position: cat }.into());
        }

        let outcome = if board.is_boundary(cat) {
            Outcome::CatEscaped
        } else {
            Outcome::InProgress
        };

        Ok(Self {
            config,
            layout,
            board,
            cat,
            outcome,
            seed: 0,
            moves: 0,
        })
    }

    /// Starts a new game on a `size` x `size` board.
    ///
    /// The layout is only recomputed when the size changes; if that fails the
    /// engine is left exactly as it was. Without a seed a fresh one is drawn,
    /// and either way the seed used is available from [`seed`](Self::seed).
    pub fn reset(&mut self, size: u32, seed: Option<u64>) -> Result<(), LayoutError> {
        if size != self.board.size() {
            let config = self.config.clone().with_board_size(size);
            let layout = Layout::from_config(&config)?;
            self.config = config;
            self.layout = layout;
            self.board = Board::new(size);
        }

        self.regenerate(seed.unwrap_or_else(rand::random));
        Ok(())
    }

    /// Starts a new game on a board of the current size.
    pub fn restart(&mut self, seed: Option<u64>) {
        self.regenerate(seed.unwrap_or_else(rand::random));
    }

    /// Top-left corner of the cat sprite.
    pub fn token_top_left(&self) -> Point {
        self.layout.cell_top_left(self.cat)
    }

    fn regenerate(&mut self, seed: u64) {
        self.board.clear();
        self.cat = self.board.center();
        self.outcome = Outcome::InProgress;
        self.seed = seed;
        self.moves = 0;

        let placed = place_obstacles(
            &mut self.board,
            self.cat,
            seed,
            self.config.max_extra_obstacles,
        );

        info!(
            size = self.board.size(),
            seed,
            obstacles = placed,
            cat = %self.cat,
            "board reset"
        );
    }
}

/// Roll context for the obstacle count.
const COUNT_ROLLS: u32 = 0;
/// Roll context for obstacle coordinates.
const CELL_ROLLS: u32 = 1;

/// Blocks `N + r` random free cells other than `cat`, `r` drawn from
/// `[0, max_extra]`. Collisions are redrawn until the count is met.
///
/// Tiny boards cannot hold that many obstacles next to the cat, so the count
/// is capped at every cell but the cat's.
fn place_obstacles(board: &mut Board, cat: Position, seed: u64, max_extra: u32) -> usize {
    let size = board.size();
    let extra = RollStream::new(seed).context(COUNT_ROLLS).range(0, max_extra);
    let mut rolls = RollStream::new(seed).context(CELL_ROLLS);

    let free = (size as usize * size as usize).saturating_sub(1);
    let wanted = (size as usize + extra as usize).min(free);

    let mut placed = 0;
    while placed < wanted {
        let x = rolls.range(0, size - 1) as i32;
        let y = rolls.range(0, size - 1) as i32;
        let position = Position::new(x, y);
        if position == cat || !board.block(position) {
            continue;
        }
        placed += 1;
    }

    debug!(wanted, extra, draws = rolls.draws(), "obstacles placed");
    placed
}
