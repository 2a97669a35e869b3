//! Text rendering of the board and engine reports.
use std::fmt::Write;

use cat_core::{BlockError, BlockOutcome, EscapeRoute, GameEngine, Outcome, Position};

pub const CAT: char = 'C';
pub const BLOCKED: char = '#';
pub const FREE: char = '.';

/// Draws the board with odd rows indented half a cell, like the canvas.
///
/// ```text
///    0 1 2 3 4
/// 0  . . # . .
/// 1   . . . . .
/// 2  . # C . .
/// ```
pub fn board(engine: &GameEngine) -> String {
    let board = engine.board();
    let size = board.size() as i32;
    let cat = engine.token_position();
    let mut out = String::new();

    out.push_str("   ");
    for x in 0..size {
        let _ = write!(out, "{:<2}", x % 10);
    }
    out.truncate(out.trim_end().len());
    out.push('\n');

    for y in 0..size {
        let _ = write!(out, "{:<2} ", y);
        if y % 2 == 1 {
            out.push(' ');
        }
        for x in 0..size {
            if x > 0 {
                out.push(' ');
            }
            let position = Position::new(x, y);
            out.push(if position == cat {
                CAT
            } else if board.is_blocked(position) {
                BLOCKED
            } else {
                FREE
            });
        }
        out.push('\n');
    }
    out
}

pub fn block_outcome(report: &BlockOutcome, moves: u32) -> String {
    let mut out = format!("Blocked {}.", report.blocked);
    match report.outcome {
        Outcome::CatEscaped => {
            let _ = write!(out, " The cat reached {} and escaped!", report.to);
        }
        Outcome::CatTrapped => {
            let _ = write!(out, " You trapped the cat in {moves} moves!");
        }
        Outcome::InProgress => {
            let _ = write!(out, " The cat moves {} -> {}", report.from, report.to);
            if let Some(hops) = report.remaining_hops {
                let _ = write!(out, " ({hops} from the edge)");
            }
            out.push('.');
        }
    }
    out
}

pub fn rejection(err: &BlockError) -> String {
    match err {
        BlockError::GameAlreadyOver { .. } => {
            "The game is over. Type `reset` to play again.".to_string()
        }
        other => format!("Can't block: {other}."),
    }
}

pub fn hint(route: Option<&EscapeRoute>) -> String {
    match route {
        Some(route) if route.hops() == 0 => "The cat is already on the edge.".to_string(),
        Some(route) => {
            let path: Vec<String> = route.cells().iter().map(ToString::to_string).collect();
            format!(
                "The cat heads for {} in {} hops: {}",
                route.goal(),
                route.hops(),
                path.join(" -> ")
            )
        }
        None => "The cat has nowhere left to go.".to_string(),
    }
}

pub const HELP: &str = "\
Commands:
  <col> <row>        block a cell
  px <x> <y>         block the cell under a canvas pixel
  hint               show the cat's current escape route
  board              redraw the board
  reset [seed]       new board, same size
  size <n> [seed]    new board of size n
  help               this text
  quit               leave";
