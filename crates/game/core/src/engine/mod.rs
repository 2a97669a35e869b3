//! Board lifecycle and turn resolution.
//!
//! The [`GameEngine`] is the single owner of the board, the cat position and
//! the game outcome. Shells mutate it through [`GameEngine::reset`] and
//! [`GameEngine::attempt_block`] only; everything else is a read-only query.
//! Each call runs to completion synchronously and either applies fully or
//! leaves the engine untouched.

mod errors;
mod outcome;
mod setup;

pub use errors::{BlockError, SetupError};
pub use outcome::{BlockOutcome, BlockResult, Outcome};

use tracing::{debug, info};

use crate::config::GameConfig;
use crate::geometry::{Layout, Point, Rect};
use crate::search::{EscapeRoute, find_escape};
use crate::state::{Board, Position};

/// Trap-the-cat engine.
///
/// Not meant for concurrent mutation: every mutating call takes `&mut self`,
/// so callers serialize access to one instance.
#[derive(Clone, Debug)]
pub struct GameEngine {
    config: GameConfig,
    layout: Layout,
    board: Board,
    cat: Position,
    outcome: Outcome,
    /// Seed the current board was generated from (0 for hand-built boards).
    seed: u64,
    /// Accepted blocks since the last reset.
    moves: u32,
}

impl GameEngine {
    /// Current pixel layout: cell size, padding, gaps, rows and columns.
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Flat row-major occupancy (`true` = blocked).
    pub fn cells(&self) -> &[bool] {
        self.board.cells()
    }

    pub fn size(&self) -> u32 {
        self.board.size()
    }

    pub fn token_position(&self) -> Position {
        self.cat
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Maps a canvas point to a board cell, `None` for gaps and padding.
    pub fn pixel_to_cell(&self, point: Point) -> Option<Position> {
        self.layout.pixel_to_cell(point)
    }

    pub fn cell_top_left(&self, position: Position) -> Point {
        self.layout.cell_top_left(position)
    }

    pub fn cell_center(&self, position: Position) -> Point {
        self.layout.cell_center(position)
    }

    pub fn cell_rect(&self, position: Position) -> Rect {
        self.layout.cell_rect(position)
    }

    /// Where the cat sprite is drawn.
    pub fn token_rect(&self) -> Rect {
        self.layout.cell_rect(self.cat)
    }

    /// Route the cat would take if it moved now, without moving it.
    pub fn escape_route(&self) -> Option<EscapeRoute> {
        find_escape(&self.board, self.cat)
    }

    /// Whether [`attempt_block`](Self::attempt_block) would accept `target`.
    ///
    /// Shells use this for hover feedback.
    pub fn can_block(&self, target: Position) -> bool {
        self.validate_block(target).is_ok()
    }

    /// Blocks `target` and lets the cat respond with one step.
    ///
    /// The cat follows the shortest escape route and advances a single hex
    /// along it. Stepping onto the boundary ends the game as
    /// [`Outcome::CatEscaped`]; having no route at all ends it as
    /// [`Outcome::CatTrapped`] with the cat left in place.
    pub fn attempt_block(&mut self, target: Position) -> BlockResult {
        self.validate_block(target)?;

        self.board.block(target);
        self.moves += 1;

        let from = self.cat;
        let remaining_hops = match find_escape(&self.board, from) {
            Some(route) => {
                self.cat = route.next_step();
                debug!(
                    blocked = %target,
                    from = %from,
                    to = %self.cat,
                    goal = %route.goal(),
                    hops = route.hops(),
                    "cat moved along escape route"
                );
                if self.board.is_boundary(self.cat) {
                    self.outcome = Outcome::CatEscaped;
                }
                Some(route.hops().saturating_sub(1))
            }
            None => {
                debug!(blocked = %target, at = %from, "no escape route left");
                self.outcome = Outcome::CatTrapped;
                None
            }
        };

        if self.outcome.is_terminal() {
            info!(
                outcome = %self.outcome,
                moves = self.moves,
                cat = %self.cat,
                "game over"
            );
        }

        Ok(BlockOutcome {
            blocked: target,
            from,
            to: self.cat,
            remaining_hops,
            outcome: self.outcome,
        })
    }

    /// Checks block preconditions in order: game open, in bounds, free, not the cat.
    fn validate_block(&self, target: Position) -> Result<(), BlockError> {
        if self.outcome.is_terminal() {
            return Err(BlockError::GameAlreadyOver {
                outcome: self.outcome,
            });
        }
        if !self.board.contains(target) {
            return Err(BlockError::OutOfBounds {
                position: target,
                size: self.board.size(),
            });
        }
        if self.board.is_blocked(target) {
            return Err(BlockError::CellOccupied { position: target });
        }
        if target == self.cat {
            return Err(BlockError::CellIsToken { position: target });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GameError;

    fn engine(rows: &[&str], cat: Position) -> GameEngine {
        let board = Board::from_rows(rows).unwrap();
        GameEngine::from_board(GameConfig::default(), board, cat).unwrap()
    }

    fn open_five() -> GameEngine {
        engine(
            &[". . . . .", " . . . . .", ". . . . .", " . . . . .", ". . . . ."],
            Position::new(2, 2),
        )
    }

    #[test]
    fn block_moves_cat_one_step() {
        let mut engine = open_five();
        let result = engine.attempt_block(Position::new(3, 3)).unwrap();

        assert_eq!(result.blocked, Position::new(3, 3));
        assert_eq!(result.from, Position::new(2, 2));
        assert_eq!(result.to, Position::new(1, 2));
        assert_eq!(result.remaining_hops, Some(1));
        assert_eq!(result.outcome, Outcome::InProgress);
        assert!(result.cat_moved());
        assert_eq!(engine.token_position(), Position::new(1, 2));
        assert_eq!(engine.moves(), 1);
    }

    #[test]
    fn reaching_the_edge_ends_the_game() {
        let mut engine = open_five();
        engine.attempt_block(Position::new(3, 3)).unwrap();
        let result = engine.attempt_block(Position::new(3, 1)).unwrap();

        assert_eq!(result.to, Position::new(0, 2));
        assert_eq!(result.outcome, Outcome::CatEscaped);
        assert_eq!(result.remaining_hops, Some(0));
        assert_eq!(engine.outcome(), Outcome::CatEscaped);
    }

    #[test]
    fn rejections_are_checked_in_order() {
        let mut engine = engine(
            &[". . . . .", " . # . . .", ". . . . .", " . . . . .", ". . . . ."],
            Position::new(2, 2),
        );

        assert_eq!(
            engine.attempt_block(Position::new(5, 0)),
            Err(BlockError::OutOfBounds {
                position: Position::new(5, 0),
                size: 5
            })
        );
        assert_eq!(
            engine.attempt_block(Position::new(1, 1)),
            Err(BlockError::CellOccupied {
                position: Position::new(1, 1)
            })
        );
        assert_eq!(
            engine.attempt_block(Position::new(2, 2)),
            Err(BlockError::CellIsToken {
                position: Position::new(2, 2)
            })
        );
        assert_eq!(engine.moves(), 0);
        assert_eq!(engine.board().blocked_count(), 1);
    }

    #[test]
    fn can_block_mirrors_attempt_block() {
        let engine = open_five();
        assert!(engine.can_block(Position::new(0, 0)));
        assert!(!engine.can_block(Position::new(2, 2)));
        assert!(!engine.can_block(Position::new(-1, 0)));
    }

    #[test]
    fn block_errors_classify_severity() {
        let occupied = BlockError::CellOccupied {
            position: Position::ORIGIN,
        };
        assert!(occupied.severity().is_recoverable());
        assert_eq!(occupied.error_code(), "BLOCK_CELL_OCCUPIED");

        let over = BlockError::GameAlreadyOver {
            outcome: Outcome::CatTrapped,
        };
        assert!(!over.severity().is_recoverable());
        assert_eq!(over.to_string(), "game is already over (cat_trapped)");
    }

    #[test]
    fn escape_route_peeks_without_moving() {
        let engine = open_five();
        let route = engine.escape_route().unwrap();
        assert_eq!(route.next_step(), Position::new(1, 2));
        assert_eq!(engine.token_position(), Position::new(2, 2));
    }

    #[test]
    fn token_rect_follows_the_cat() {
        let mut engine = open_five();
        engine.attempt_block(Position::new(4, 4)).unwrap();
        assert_eq!(engine.token_rect(), engine.cell_rect(Position::new(1, 2)));
        assert_eq!(
            engine.pixel_to_cell(engine.token_rect().center()),
            Some(engine.token_position())
        );
    }
}
