//! Player movement system.
//!
//! Validates directional moves against a generated grid. Illegal moves are
//! not errors: a player bumping into a wall is normal interaction, so the
//! move is a silent no-op and the caller gets the unchanged position back.

use crate::game::types::{Direction, Grid, Position};

/// Try to move the player by `(d_row, d_col)`.
///
/// Returns the candidate position iff the delta is a single cardinal step
/// (exactly one of `d_row`/`d_col` is non-zero, with magnitude 1), the
/// candidate is in bounds, and the candidate cell is open. Otherwise
/// returns `player` unchanged. Pure function of its inputs.
pub fn try_move(grid: &Grid, player: Position, d_row: isize, d_col: isize) -> Position {
    // Cardinal steps only; diagonals and zero deltas are rejected.
    if d_row.abs() + d_col.abs() != 1 {
        return player;
    }

    match player.step(d_row, d_col) {
        Some(candidate) if grid.is_open(candidate) => candidate,
        _ => player,
    }
}

/// [`try_move`] with a [`Direction`] instead of a raw delta.
pub fn try_move_dir(grid: &Grid, player: Position, direction: Direction) -> Position {
    let (d_row, d_col) = direction.delta();
    try_move(grid, player, d_row, d_col)
}
