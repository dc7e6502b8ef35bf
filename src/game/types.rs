use serde::{Deserialize, Serialize};

/// A single grid cell: carved open by the generator, or left as wall.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Cell {
    Wall,
    Open,
}

/// A (row, column) coordinate on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Apply a signed offset. Returns `None` if the result would underflow;
    /// the upper bound is checked by the caller against the grid.
    pub fn step(self, d_row: isize, d_col: isize) -> Option<Position> {
        Some(Position {
            row: self.row.checked_add_signed(d_row)?,
            col: self.col.checked_add_signed(d_col)?,
        })
    }
}

/// The four cardinal movement directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Row/column delta of a one-cell step in this direction.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

/// The player: a current position, reset to the start cell on every
/// generation and mutated only by validated moves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Position,
}

impl Player {
    pub fn new(pos: Position) -> Self {
        Self { pos }
    }
}

/// A generated maze.
///
/// Immutable once built: only the generator constructs one, no public
/// mutators exist, and regeneration replaces the grid wholesale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grid {
    pub(crate) cells: Vec<Vec<Cell>>,
    pub(crate) start: Position,
    pub(crate) goal: Position,
}

impl Grid {
    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    pub fn cols(&self) -> usize {
        self.cells.first().map_or(0, |row| row.len())
    }

    /// The fixed entry cell, `(0, 0)`.
    pub fn start(&self) -> Position {
        self.start
    }

    /// The fixed exit cell: the room cell closest to the bottom-right corner
    /// of the carving lattice.
    pub fn goal(&self) -> Position {
        self.goal
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.row < self.rows() && pos.col < self.cols()
    }

    /// Cell value at `pos`. `pos` must be in bounds.
    pub fn cell(&self, pos: Position) -> Cell {
        self.cells[pos.row][pos.col]
    }

    /// Whether `pos` is in bounds and walkable.
    pub fn is_open(&self, pos: Position) -> bool {
        self.in_bounds(pos) && self.cells[pos.row][pos.col] == Cell::Open
    }

    pub fn is_goal(&self, pos: Position) -> bool {
        pos == self.goal
    }
}
