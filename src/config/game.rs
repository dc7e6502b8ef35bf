/// Game configuration constants.
///
/// This module defines the default maze dimensions used by the demo host.
/// The engine itself accepts any positive dimensions.

/// Number of rows in the maze grid.
pub const MAZE_ROWS: usize = 30;

/// Number of columns in the maze grid.
pub const MAZE_COLS: usize = 30;
