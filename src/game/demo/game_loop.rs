//! Standalone game loop for local testing/demo.
//!
//! This module provides an interactive loop for playing the maze in the
//! terminal. It stands in for the real host application: it renders the
//! grid, forwards directional input, and reacts when the goal is reached.

use anyhow::Result;
use log::debug;

use crate::config;
use crate::game::demo::render::{print_grid, print_status};
use crate::game::state::GameState;
use crate::game::types::Direction;

use std::io::{self, Write};

enum Input {
    Move(Direction),
    Quit,
    Unknown,
}

/// Prompt the user for a movement direction.
fn get_player_input() -> Result<Input> {
    print!("Enter direction (← ↑ ↓ →, or q to quit), then press Enter: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(match input.trim() {
        "\x1b[D" => Input::Move(Direction::Left),
        "\x1b[C" => Input::Move(Direction::Right),
        "\x1b[A" => Input::Move(Direction::Up),
        "\x1b[B" => Input::Move(Direction::Down),
        "q" => Input::Quit,
        _ => Input::Unknown,
    })
}

/// Ask whether to play another maze after a win.
fn wants_restart() -> Result<bool> {
    print!("Play again? (y/n): ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim() == "y")
}

/// Run the interactive maze loop until the player quits.
pub fn run_game_loop() -> Result<()> {
    let mut state = GameState::new(config::game::MAZE_ROWS, config::game::MAZE_COLS)?;

    println!("Maze start! Reach G from the top-left corner.");
    print_grid(&state.grid, &state.player);
    print_status(&state.player, state.moves);

    loop {
        match get_player_input()? {
            Input::Move(direction) => {
                state.apply_move(direction);
            }
            Input::Quit => break,
            Input::Unknown => continue,
        }

        print_grid(&state.grid, &state.player);
        print_status(&state.player, state.moves);

        if state.is_solved() {
            println!("🎉 Clear! Solved in {} moves.", state.moves);
            debug!("final state: {}", serde_json::to_string(&state)?);
            if !wants_restart()? {
                break;
            }
            state.restart()?;
            print_grid(&state.grid, &state.player);
            print_status(&state.player, state.moves);
        }
    }

    Ok(())
}
