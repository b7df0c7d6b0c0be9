//! **carved** is a rectangular maze generation and route finding library.
//!
//! Mazes are carved with the randomized iterative depth-first "backtracker"
//! algorithm, optionally loosened with extra cycle-forming passages, and
//! solved with a deterministic depth-first search between the north-west
//! and south-east corners.

pub mod cells;
pub mod errors;
pub mod generators;
pub mod grid;
pub mod grid_displays;
pub mod maze;
pub mod pathing;
pub mod units;
mod utils;
