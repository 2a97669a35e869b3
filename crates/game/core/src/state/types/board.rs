use arrayvec::ArrayVec;

use crate::config::GameConfig;
use crate::state::StateError;

use super::Position;

/// Hex neighbours of a cell, in enumeration order.
pub type Neighbors = ArrayVec<Position, 6>;

/// Neighbour offsets `(dx, dy)` for a cell on row `y`.
///
/// Odd rows are shifted right, so their diagonal neighbours lean right
/// (`v = +1`); even rows lean left (`v = -1`). The order is part of the
/// contract: the escape search breaks ties between equally short routes by it.
pub const fn hex_offsets(y: i32) -> [(i32, i32); 6] {
    let v = if y.rem_euclid(2) == 1 { 1 } else { -1 };
    [(-1, 0), (1, 0), (0, -1), (0, 1), (v, -1), (v, 1)]
}

/// Square occupancy grid stored row-major (`index = y * size + x`).
///
/// `true` marks a blocked cell. The board knows nothing about the cat; the
/// engine keeps the token position next to it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "BoardCells")
)]
pub struct Board {
    size: u32,
    cells: Vec<bool>,
}

impl Board {
    /// Creates an all-free board of `size` x `size` cells.
    pub fn new(size: u32) -> Self {
        let len = size as usize * size as usize;
        Self {
            size,
            cells: vec![false; len],
        }
    }

    /// Wraps flat row-major occupancy (`true` = blocked).
    pub fn from_cells(size: u32, cells: Vec<bool>) -> Result<Self, StateError> {
        if size < GameConfig::MIN_BOARD_SIZE {
            return Err(StateError::BoardTooSmall {
                size,
                min: GameConfig::MIN_BOARD_SIZE,
            });
        }
        let expected = (size as usize).checked_mul(size as usize);
        if expected != Some(cells.len()) {
            return Err(StateError::CellCountMismatch {
                size,
                expected: expected.unwrap_or(usize::MAX),
                found: cells.len(),
            });
        }
        Ok(Self { size, cells })
    }

    /// Parses a hand-drawn board.
    ///
    /// Each row is one string; `#` marks a blocked cell and `.` a free one.
    /// Whitespace is ignored so odd rows can be indented to mirror the
    /// on-screen offset. The board must be square.
    pub fn from_rows(rows: &[&str]) -> Result<Self, StateError> {
        let size = rows.len();
        if size < GameConfig::MIN_BOARD_SIZE as usize {
            return Err(StateError::BoardTooSmall {
                size: size as u32,
                min: GameConfig::MIN_BOARD_SIZE,
            });
        }

        let mut board = Self::new(size as u32);
        for (y, row) in rows.iter().enumerate() {
            let glyphs: Vec<char> = row.chars().filter(|c| !c.is_whitespace()).collect();
            if glyphs.len() != size {
                return Err(StateError::RaggedRow {
                    row: y,
                    expected: size,
                    found: glyphs.len(),
                });
            }
            for (x, glyph) in glyphs.into_iter().enumerate() {
                match glyph {
                    '#' => {
                        board.block(Position::new(x as i32, y as i32));
                    }
                    '.' => {}
                    other => {
                        return Err(StateError::InvalidGlyph {
                            glyph: other,
                            row: y,
                        });
                    }
                }
            }
        }

        Ok(board)
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    /// Flat row-major occupancy, suitable for drawing without copying.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && position.x < self.size as i32
            && position.y < self.size as i32
    }

    /// Returns the flat index of `position`, or `None` when out of bounds.
    pub fn index(&self, position: Position) -> Option<usize> {
        self.contains(position)
            .then(|| position.y as usize * self.size as usize + position.x as usize)
    }

    /// Inverse of [`Board::index`]. `index` must be below `size * size`.
    pub fn position(&self, index: usize) -> Position {
        let size = self.size as usize;
        Position::new((index % size) as i32, (index / size) as i32)
    }

    /// Out-of-bounds positions report as not blocked; pair with `contains`.
    pub fn is_blocked(&self, position: Position) -> bool {
        self.index(position).is_some_and(|idx| self.cells[idx])
    }

    /// In bounds and free.
    pub fn is_passable(&self, position: Position) -> bool {
        self.index(position).is_some_and(|idx| !self.cells[idx])
    }

    /// Marks a cell blocked. Returns false if it was out of bounds or already blocked.
    pub fn block(&mut self, position: Position) -> bool {
        match self.index(position) {
            Some(idx) if !self.cells[idx] => {
                self.cells[idx] = true;
                true
            }
            _ => false,
        }
    }

    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = false);
    }

    pub fn blocked_count(&self) -> usize {
        self.cells.iter().filter(|&&blocked| blocked).count()
    }

    /// Blocked positions in row-major order.
    pub fn blocked(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, blocked)| **blocked)
            .map(|(idx, _)| self.position(idx))
    }

    /// `(⌊N/2⌋, ⌊N/2⌋)`, where the cat starts.
    pub fn center(&self) -> Position {
        let mid = (self.size / 2) as i32;
        Position::new(mid, mid)
    }

    /// True for in-bounds cells on the outer ring; reaching one means escape.
    pub fn is_boundary(&self, position: Position) -> bool {
        let last = self.size as i32 - 1;
        self.contains(position)
            && (position.x == 0 || position.y == 0 || position.x == last || position.y == last)
    }

    /// In-bounds hex neighbours of `position`, blocked or not.
    pub fn neighbors(&self, position: Position) -> Neighbors {
        hex_offsets(position.y)
            .into_iter()
            .map(|(dx, dy)| position.offset(dx, dy))
            .filter(|&next| self.contains(next))
            .collect()
    }

    /// Neighbours the cat could step onto.
    pub fn passable_neighbors(&self, position: Position) -> impl Iterator<Item = Position> + '_ {
        self.neighbors(position)
            .into_iter()
            .filter(|&next| self.is_passable(next))
    }
}

/// Unchecked wire form of [`Board`]; validated by [`Board::from_cells`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct BoardCells {
    size: u32,
    cells: Vec<bool>,
}

#[cfg(feature = "serde")]
impl TryFrom<BoardCells> for Board {
    type Error = StateError;

    fn try_from(raw: BoardCells) -> Result<Self, Self::Error> {
        Board::from_cells(raw.size, raw.cells)
    }
}
