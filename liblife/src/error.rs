use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LifeError {
    #[error("invalid grid dimensions {rows}x{cols}, both must be positive")]
    InvalidDimension { rows: isize, cols: isize },

    #[error("cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfBounds {
        row: isize,
        col: isize,
        rows: usize,
        cols: usize,
    },

    #[error("can't place {requested} alive cells on a grid with {capacity} cells")]
    PopulationTooLarge { requested: usize, capacity: usize },
}
