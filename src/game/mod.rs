pub mod state;
pub mod types;

pub mod demo;
pub mod grid;
pub mod systems;
