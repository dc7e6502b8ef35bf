//! Entry point for the standalone terminal demo.
//!
//! Initializes logging and runs the interactive maze loop.

use anyhow::Result;
use maze_engine::game::demo::run_game_loop;

fn main() -> Result<()> {
    // Initialize logger from environment variable (default to info level).
    env_logger::init();

    run_game_loop()
}
