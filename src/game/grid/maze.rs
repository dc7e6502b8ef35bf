//! Maze generation.
//!
//! Randomized depth-first carving over a room/wall lattice: room cells sit
//! at even coordinates, wall cells separate them. The result is a perfect
//! maze: exactly one path between any two room cells reachable from the
//! start.

use anyhow::{Result, bail};
use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::game::types::{Cell, Direction, Grid, Position};

/// Generate a `rows` x `cols` maze with the default random source.
///
/// Dimensions should be odd for the carving to reach every room cell; with
/// even dimensions the trailing row/column stays wall (see
/// [`generate_with_rng`]).
pub fn generate(rows: usize, cols: usize) -> Result<Grid> {
    generate_with_rng(rows, cols, &mut rand::rng())
}

/// Generate a maze using the given random source.
///
/// Carving walks the lattice of even-coordinate room cells with an explicit
/// stack, opening the wall cell between a room and an unvisited neighbor two
/// steps away. Direction order is a fresh uniform shuffle at every step.
///
/// Fails if either dimension is zero. Even dimensions are accepted as-is:
/// the last row/column holds no room cells and stays wall, matching the
/// lattice rather than silently resizing the request.
pub fn generate_with_rng<R: Rng>(rows: usize, cols: usize, rng: &mut R) -> Result<Grid> {
    if rows == 0 || cols == 0 {
        bail!("maze dimensions must be positive (got {rows}x{cols})");
    }

    let mut cells = vec![vec![Cell::Wall; cols]; rows];
    let mut visited = vec![vec![false; cols]; rows];

    let start = Position { row: 0, col: 0 };
    cells[start.row][start.col] = Cell::Open;
    visited[start.row][start.col] = true;

    // Iterative DFS: the top of the stack is the current room cell. Advance
    // into a random unvisited neighbor, or pop to backtrack.
    let mut stack = vec![start];
    while let Some(&pos) = stack.last() {
        let mut dirs = Direction::ALL;
        dirs.shuffle(rng);

        let mut advanced = false;
        for dir in dirs {
            let Some((wall, next)) = carve_target(pos, dir, rows, cols) else {
                continue;
            };
            if visited[next.row][next.col] {
                continue;
            }

            // Open the wall between the two rooms, then the room itself.
            cells[wall.row][wall.col] = Cell::Open;
            cells[next.row][next.col] = Cell::Open;
            visited[next.row][next.col] = true;
            stack.push(next);
            advanced = true;
            break;
        }

        if !advanced {
            stack.pop();
        }
    }

    let goal = Position {
        row: (rows - 1) / 2 * 2,
        col: (cols - 1) / 2 * 2,
    };

    let open = cells
        .iter()
        .flatten()
        .filter(|&&cell| cell == Cell::Open)
        .count();
    debug!("carved {open} open cells in a {rows}x{cols} maze, goal at {goal:?}");

    Ok(Grid { cells, start, goal })
}

/// The wall cell one step away and the room cell two steps away in the given
/// direction, if the room lies on the grid.
fn carve_target(
    pos: Position,
    dir: Direction,
    rows: usize,
    cols: usize,
) -> Option<(Position, Position)> {
    let (d_row, d_col) = dir.delta();
    let wall = pos.step(d_row, d_col)?;
    let room = pos.step(d_row * 2, d_col * 2)?;
    (room.row < rows && room.col < cols).then_some((wall, room))
}
