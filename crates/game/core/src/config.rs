/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Number of rows and columns of the square board.
    pub board_size: u32,
    /// Width (and height) of the square canvas the board is laid out on, in pixels.
    pub canvas_width: f64,
    /// Empty margin between the canvas edge and the outermost cells.
    pub padding: f64,
    /// Horizontal gap between neighbouring cells in a row.
    /// The vertical gap is derived from the canvas size.
    pub x_gap: f64,
    /// Upper bound (inclusive) of the random number of obstacles placed on top
    /// of `board_size` when a board is generated.
    pub max_extra_obstacles: u32,
}

impl GameConfig {
    // ===== compile-time constants =====
    /// Smallest board the layout math supports (the row gap divides by `size - 1`).
    pub const MIN_BOARD_SIZE: u32 = 2;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_BOARD_SIZE: u32 = 11;
    pub const DEFAULT_CANVAS_WIDTH: f64 = 400.0;
    pub const DEFAULT_PADDING: f64 = 20.0;
    pub const DEFAULT_X_GAP: f64 = 3.0;
    pub const DEFAULT_MAX_EXTRA_OBSTACLES: u32 = 5;

    pub fn new() -> Self {
        Self {
            board_size: Self::DEFAULT_BOARD_SIZE,
            canvas_width: Self::DEFAULT_CANVAS_WIDTH,
            padding: Self::DEFAULT_PADDING,
            x_gap: Self::DEFAULT_X_GAP,
            max_extra_obstacles: Self::DEFAULT_MAX_EXTRA_OBSTACLES,
        }
    }

    pub fn with_board_size(mut self, board_size: u32) -> Self {
        self.board_size = board_size;
        self
    }

    pub fn with_canvas_width(mut self, canvas_width: f64) -> Self {
        self.canvas_width = canvas_width;
        self
    }

    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_x_gap(mut self, x_gap: f64) -> Self {
        self.x_gap = x_gap;
        self
    }

    pub fn with_max_extra_obstacles(mut self, max_extra_obstacles: u32) -> Self {
        self.max_extra_obstacles = max_extra_obstacles;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
