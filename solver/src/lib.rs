#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub mod board;
pub mod bunch;
pub mod heuristic;
pub mod solver;
pub mod tile;

pub use board::{Board, Cell, Line};
pub use bunch::Bunch;
pub use heuristic::{LongestWord, OrderingHeuristic, RareLetters};
pub use solver::{BruteForceSolver, Solution, Solver};
pub use tile::Tile;
