//! Conway's Game of Life on a fixed-size, non-wrapping grid.

pub use cell::CellState;
pub use error::LifeError;
pub use grid::Grid;
pub use pos::Position;

pub mod cell;
pub mod error;
pub mod grid;
pub mod pos;
pub mod rule;
