pub mod maze;

pub use maze::*;
