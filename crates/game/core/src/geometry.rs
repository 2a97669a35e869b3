//! Pixel layout of the offset hex board.
//!
//! Cells are drawn as circles on a brick pattern where odd rows shift right by
//! half a cell. [`Layout`] maps logical cells to canvas pixels and back; it is
//! the only place the engine deals with pixels at all.

use crate::config::GameConfig;
use crate::error::{ErrorSeverity, GameError};
use crate::state::Position;

/// Point in canvas pixel space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in canvas pixel space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn top_left(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Closed containment: all four edges are inside.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.y >= self.y
            && point.x <= self.x + self.width
            && point.y <= self.y + self.height
    }
}

/// Errors raised when a canvas cannot hold the requested board.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum LayoutError {
    #[error("board size {size} is too small (min: {min})")]
    BoardTooSmall { size: u32, min: u32 },

    #[error("layout parameter `{name}` must be finite and non-negative (got {value})")]
    InvalidParameter { name: &'static str, value: f64 },

    #[error(
        "canvas too small for a {size}x{size} board (cell size {cell_size:.3}, row gap {y_gap:.3})"
    )]
    InvalidLayout { size: u32, cell_size: f64, y_gap: f64 },
}

impl GameError for LayoutError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            LayoutError::BoardTooSmall { .. } => "LAYOUT_BOARD_TOO_SMALL",
            LayoutError::InvalidParameter { .. } => "LAYOUT_INVALID_PARAMETER",
            LayoutError::InvalidLayout { .. } => "LAYOUT_INVALID_LAYOUT",
        }
    }
}

/// Derived pixel metrics for a square board on a square canvas.
///
/// `cell_size` reserves half a cell of horizontal room for the odd-row shift;
/// the row gap is whatever vertical space is left once the rows are placed, so
/// the board fills the canvas in both directions.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(rename_all = "camelCase")
)]
pub struct Layout {
    cell_size: f64,
    padding: f64,
    x_gap: f64,
    y_gap: f64,
    cols: u32,
    rows: u32,
}

impl Layout {
    /// Computes the layout of a `size` x `size` board on a `canvas_width` wide canvas.
    ///
    /// ```text
    /// cell_size = (W - 2P - x_gap * (N - 1)) / (N + 0.5)
    /// y_gap     = (W - 2P - N * cell_size) / (N - 1)
    /// ```
    pub fn new(
        canvas_width: f64,
        size: u32,
        padding: f64,
        x_gap: f64,
    ) -> Result<Self, LayoutError> {
        if size < GameConfig::MIN_BOARD_SIZE {
            return Err(LayoutError::BoardTooSmall {
                size,
                min: GameConfig::MIN_BOARD_SIZE,
            });
        }
        for (name, value) in [
            ("canvas_width", canvas_width),
            ("padding", padding),
            ("x_gap", x_gap),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(LayoutError::InvalidParameter { name, value });
            }
        }

        let n = size as f64;
        let usable = canvas_width - padding * 2.0;
        let cell_size = (usable - x_gap * (n - 1.0)) / (n + 0.5);
        let y_gap = (usable - n * cell_size) / (n - 1.0);
        if cell_size <= 0.0 || y_gap <= 0.0 {
            return Err(LayoutError::InvalidLayout {
                size,
                cell_size,
                y_gap,
            });
        }

        Ok(Self {
            cell_size,
            padding,
            x_gap,
            y_gap,
            cols: size,
            rows: size,
        })
    }

    /// Layout for the board described by `config`.
    pub fn from_config(config: &GameConfig) -> Result<Self, LayoutError> {
        Self::new(
            config.canvas_width,
            config.board_size,
            config.padding,
            config.x_gap,
        )
    }

    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    pub fn padding(&self) -> f64 {
        self.padding
    }

    pub fn x_gap(&self) -> f64 {
        self.x_gap
    }

    pub fn y_gap(&self) -> f64 {
        self.y_gap
    }

    pub fn cols(&self) -> u32 {
        self.cols
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Top-left corner of the cell's bounding square. Does not check bounds.
    pub fn cell_top_left(&self, position: Position) -> Point {
        let col = position.x as f64;
        let row = position.y as f64;
        let shift = if position.is_odd_row() {
            self.cell_size / 2.0
        } else {
            0.0
        };
        Point::new(
            self.padding + col * self.cell_size + col * self.x_gap + shift,
            self.padding + row * self.cell_size + row * self.y_gap,
        )
    }

    /// Centre of the circular cell marker.
    pub fn cell_center(&self, position: Position) -> Point {
        let top_left = self.cell_top_left(position);
        let half = self.cell_size / 2.0;
        Point::new(top_left.x + half, top_left.y + half)
    }

    /// Bounding square of the cell.
    pub fn cell_rect(&self, position: Position) -> Rect {
        let top_left = self.cell_top_left(position);
        Rect {
            x: top_left.x,
            y: top_left.y,
            width: self.cell_size,
            height: self.cell_size,
        }
    }

    /// Maps a canvas point to the cell under it.
    ///
    /// Cells are closed squares: a point on any edge of a cell's rect maps to
    /// that cell, matching [`Rect::contains`]. Returns `None` for points in the
    /// padding, in the gaps between cells, or off the board; a point is never
    /// snapped to the nearest cell. With a zero gap an edge shared by two cells
    /// belongs to neither.
    pub fn pixel_to_cell(&self, point: Point) -> Option<Position> {
        let row = self.axis_index(
            point.y - self.padding,
            self.cell_size + self.y_gap,
            self.rows,
        )?;
        let shift = if row % 2 == 1 {
            self.cell_size / 2.0
        } else {
            0.0
        };
        let col = self.axis_index(
            point.x - self.padding - shift,
            self.cell_size + self.x_gap,
            self.cols,
        )?;
        Some(Position::new(col, row))
    }

    /// Index of the cell span containing `offset` along one axis.
    ///
    /// `floor(offset / pitch)` is the last span starting at or before the
    /// point and `ceil((offset - cell) / pitch)` the first span ending at or
    /// after it. They agree only when the point lies inside a cell.
    fn axis_index(&self, offset: f64, pitch: f64, count: u32) -> Option<i32> {
        let first = (offset / pitch).floor();
        let last = ((offset - self.cell_size) / pitch).ceil();
        (first == last && first >= 0.0 && first < count as f64).then_some(first as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn layout(size: u32) -> Layout {
        Layout::new(400.0, size, 20.0, 3.0).unwrap()
    }

    #[test]
    fn derives_cell_size_and_row_gap() {
        let layout = layout(11);
        let cell = 330.0 / 11.5;
        assert!((layout.cell_size() - cell).abs() < EPS);
        assert!((layout.y_gap() - (360.0 - 11.0 * cell) / 10.0).abs() < EPS);
        assert_eq!(layout.cols(), 11);
        assert_eq!(layout.rows(), 11);
    }

    #[test]
    fn rows_fill_the_canvas_height() {
        let layout = layout(11);
        let bottom = layout.cell_rect(Position::new(0, 10));
        assert!((bottom.y + bottom.height - (400.0 - 20.0)).abs() < EPS);
    }

    #[test]
    fn odd_rows_shift_by_half_a_cell() {
        let layout = layout(5);
        let even = layout.cell_top_left(Position::new(2, 0));
        let odd = layout.cell_top_left(Position::new(2, 1));
        assert!((odd.x - even.x - layout.cell_size() / 2.0).abs() < EPS);
        assert!((odd.y - even.y - layout.cell_size() - layout.y_gap()).abs() < EPS);
    }

    #[test]
    fn center_round_trips_for_every_cell() {
        for size in [2, 5, 11, 15] {
            let layout = layout(size);
            for y in 0..size as i32 {
                for x in 0..size as i32 {
                    let cell = Position::new(x, y);
                    assert_eq!(layout.pixel_to_cell(layout.cell_center(cell)), Some(cell));
                }
            }
        }
    }

    #[test]
    fn rect_corners_inside_the_cell_map_back() {
        let layout = layout(7);
        let cell = Position::new(3, 3);
        let rect = layout.cell_rect(cell);
        let inset = 0.25;
        assert_eq!(
            layout.pixel_to_cell(Point::new(rect.x + inset, rect.y + inset)),
            Some(cell)
        );
        assert_eq!(
            layout.pixel_to_cell(Point::new(
                rect.x + rect.width - inset,
                rect.y + rect.height - inset
            )),
            Some(cell)
        );
    }

    #[test]
    fn row_gap_maps_to_nothing() {
        let layout = layout(5);
        let upper = layout.cell_rect(Position::new(1, 0));
        let gap_y = upper.y + upper.height + layout.y_gap() / 2.0;
        assert_eq!(layout.pixel_to_cell(Point::new(upper.center().x, gap_y)), None);
    }

    #[test]
    fn column_gap_maps_to_nothing() {
        let layout = layout(5);
        for row in [0, 1] {
            let left = layout.cell_rect(Position::new(1, row));
            let gap_x = left.x + left.width + layout.x_gap() / 2.0;
            assert_eq!(
                layout.pixel_to_cell(Point::new(gap_x, left.center().y)),
                None
            );
        }
    }

    #[test]
    fn padding_and_outside_map_to_nothing() {
        let layout = layout(5);
        assert_eq!(layout.pixel_to_cell(Point::new(5.0, 5.0)), None);
        assert_eq!(layout.pixel_to_cell(Point::new(-30.0, 100.0)), None);
        assert_eq!(layout.pixel_to_cell(Point::new(200.0, 395.0)), None);
        assert_eq!(layout.pixel_to_cell(Point::new(f64::NAN, 100.0)), None);
    }

    #[test]
    fn odd_row_left_margin_is_not_a_cell() {
        let layout = layout(5);
        let first_odd = layout.cell_rect(Position::new(0, 1));
        let point = Point::new(first_odd.x - layout.cell_size() / 4.0, first_odd.center().y);
        assert_eq!(layout.pixel_to_cell(point), None);
    }

    #[test]
    fn rejects_canvas_too_small() {
        let err = Layout::new(40.0, 11, 20.0, 3.0).unwrap_err();
        assert!(matches!(err, LayoutError::InvalidLayout { size: 11, .. }));
        assert_eq!(err.error_code(), "LAYOUT_INVALID_LAYOUT");
    }

    #[test]
    fn rejects_single_cell_board() {
        assert_eq!(
            Layout::new(400.0, 1, 20.0, 3.0).unwrap_err(),
            LayoutError::BoardTooSmall { size: 1, min: 2 }
        );
    }

    #[test]
    fn rejects_negative_and_non_finite_parameters() {
        assert!(matches!(
            Layout::new(400.0, 5, -1.0, 3.0),
            Err(LayoutError::InvalidParameter { name: "padding", .. })
        ));
        assert!(matches!(
            Layout::new(f64::INFINITY, 5, 20.0, 3.0),
            Err(LayoutError::InvalidParameter {
                name: "canvas_width",
                ..
            })
        ));
    }

    #[test]
    fn rect_contains_its_center() {
        let rect = layout(5).cell_rect(Position::new(4, 3));
        assert!(rect.contains(rect.center()));
        assert!(rect.contains(Point::new(rect.x + rect.width, rect.y + rect.height)));
        assert!(!rect.contains(Point::new(rect.x + rect.width + 0.5, rect.y)));
        assert_eq!(rect.top_left(), layout(5).cell_top_left(Position::new(4, 3)));
    }

    #[test]
    fn cell_edges_map_to_the_cell() {
        // cell_size 100, x_gap 10, y_gap 60
        let layout = Layout::new(260.0, 2, 0.0, 10.0).unwrap();
        assert_eq!(layout.cell_size(), 100.0);
        assert_eq!(layout.y_gap(), 60.0);

        let right_edge = Point::new(100.0, 50.0);
        assert!(layout.cell_rect(Position::new(0, 0)).contains(right_edge));
        assert_eq!(layout.pixel_to_cell(right_edge), Some(Position::new(0, 0)));
        assert_eq!(layout.pixel_to_cell(Point::new(100.5, 50.0)), None);
        assert_eq!(
            layout.pixel_to_cell(Point::new(110.0, 50.0)),
            Some(Position::new(1, 0))
        );

        let bottom_edge = Point::new(50.0, 100.0);
        assert!(layout.cell_rect(Position::new(0, 0)).contains(bottom_edge));
        assert_eq!(layout.pixel_to_cell(bottom_edge), Some(Position::new(0, 0)));
    }

    #[test]
    fn shared_edge_without_gap_maps_to_nothing() {
        let layout = Layout::new(250.0, 2, 0.0, 0.0).unwrap();
        assert_eq!(layout.cell_size(), 100.0);
        assert_eq!(layout.pixel_to_cell(Point::new(100.0, 50.0)), None);
        assert_eq!(
            layout.pixel_to_cell(Point::new(99.5, 50.0)),
            Some(Position::new(0, 0))
        );
        assert_eq!(
            layout.pixel_to_cell(Point::new(100.5, 50.0)),
            Some(Position::new(1, 0))
        );
    }
}
