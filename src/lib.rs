//! Maze game core.
//!
//! Generates a perfect maze on a fixed-size grid and validates player
//! movement against it. The host application owns rendering, input, and
//! dialogs; it drives this crate with plain data and reacts to plain
//! return values. A terminal demo host ships in [`game::demo`].

pub mod config;
pub mod game;
