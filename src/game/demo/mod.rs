//! Standalone terminal demo.
//!
//! Plays the role of the host application: rendering, input, and the
//! win/restart dialog.

pub mod game_loop;
pub mod render;

pub use game_loop::*;
pub use render::*;
