//! Maze rendering (terminal).
//!
//! This module prints the grid and player state for the standalone demo.

use crate::game::types::{Cell, Grid, Player, Position};

/// Print the maze to the terminal: walls as solid blocks, open floor as
/// spaces, the player as `P`, the goal as `G`.
pub fn print_grid(grid: &Grid, player: &Player) {
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let pos = Position { row, col };
            let symbol = if player.pos == pos {
                "P "
            } else if grid.is_goal(pos) {
                "G "
            } else {
                match grid.cell(pos) {
                    Cell::Wall => "██",
                    Cell::Open => "  ",
                }
            };
            print!("{symbol}");
        }
        println!();
    }
}

/// Print the player position and move counter.
pub fn print_status(player: &Player, moves: u32) {
    println!(
        "Position: ({}, {})  Moves: {}",
        player.pos.row, player.pos.col, moves
    );
    println!();
}
