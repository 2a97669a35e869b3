//! Breadth-first escape search over hex adjacency.
//!
//! The search runs from the cat's cell and stops at the first boundary cell it
//! dequeues, which gives a route with the fewest hops. Parents are kept in a
//! flat arena indexed by cell, so reconstruction is a walk over indices with
//! no per-node allocation.

use std::collections::VecDeque;

use crate::state::{Board, Position};

/// Shortest route from the cat to the board edge.
///
/// Only [`find_escape`] builds routes, so a route always holds at least its
/// start cell. It serializes for shells but cannot be deserialized.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EscapeRoute {
    /// Cells from start to goal, both inclusive.
    cells: Vec<Position>,
}

impl EscapeRoute {
    pub fn start(&self) -> Position {
        self.cells[0]
    }

    /// Boundary cell the route ends on.
    pub fn goal(&self) -> Position {
        self.cells[self.cells.len() - 1]
    }

    /// Cell the cat moves to this turn: the one right after the start.
    ///
    /// When the start already sits on the boundary the route has a single
    /// cell and the cat stays put.
    pub fn next_step(&self) -> Position {
        self.cells.get(1).copied().unwrap_or(self.cells[0])
    }

    /// Number of moves from start to goal.
    pub fn hops(&self) -> usize {
        self.cells.len() - 1
    }

    pub fn cells(&self) -> &[Position] {
        &self.cells
    }
}

/// Finds the shortest route from `start` to any boundary cell.
///
/// Frontier order is FIFO and neighbours are expanded in
/// [`hex_offsets`](crate::state::hex_offsets) order, so among equally short
/// routes the one reached first in that order wins. Returns `None` when every
/// reachable cell is interior, i.e. the cat is trapped.
pub fn find_escape(board: &Board, start: Position) -> Option<EscapeRoute> {
    let start_idx = board.index(start)?;
    let len = board.cells().len();

    let mut parents: Vec<Option<usize>> = vec![None; len];
    let mut visited = vec![false; len];
    let mut queue = VecDeque::with_capacity(len);

    visited[start_idx] = true;
    queue.push_back(start_idx);

    while let Some(current) = queue.pop_front() {
        let position = board.position(current);
        if board.is_boundary(position) {
            return Some(reconstruct(board, &parents, current));
        }

        for next in board.passable_neighbors(position) {
            let Some(idx) = board.index(next) else {
                continue;
            };
            if visited[idx] {
                continue;
            }
            visited[idx] = true;
            parents[idx] = Some(current);
            queue.push_back(idx);
        }
    }

    None
}

fn reconstruct(board: &Board, parents: &[Option<usize>], goal: usize) -> EscapeRoute {
    let mut cells = vec![board.position(goal)];
    let mut cursor = goal;
    while let Some(parent) = parents[cursor] {
        cells.push(board.position(parent));
        cursor = parent;
    }
    cells.reverse();
    EscapeRoute { cells }
}
