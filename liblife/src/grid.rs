use std::fmt;

use itertools::Itertools;

use crate::{cell::CellState, error::LifeError, pos::Position, rule};

/// The Moore neighborhood: every offset of the surrounding 3x3 block except the center.
const NEIGHBOR_OFFSETS: &[[isize; 2]] = &[
    [-1, -1],
    [-1, 0],
    [-1, 1],
    [0, -1],
    [0, 1],
    [1, -1],
    [1, 0],
    [1, 1],
];

/// A fixed-size grid of cells, stored row-major. Positions outside the grid are always dead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<CellState>,
}

impl Grid {
    pub fn new(rows: isize, cols: isize) -> Result<Self, LifeError> {
        let invalid = LifeError::InvalidDimension { rows, cols };

        if rows <= 0 || cols <= 0 {
            return Err(invalid);
        }

        let (rows, cols) = (rows as usize, cols as usize);
        let cell_count = rows.checked_mul(cols).ok_or(invalid)?;

        Ok(Self {
            rows,
            cols,
            cells: vec![CellState::default(); cell_count],
        })
    }

    /// Creates a grid and sets every given position alive, failing on the first bad one.
    pub fn with_alive_cells<I, P>(rows: isize, cols: isize, alive_cells: I) -> Result<Self, LifeError>
    where
        I: IntoIterator<Item = P>,
        P: Into<Position>,
    {
        let mut grid = Self::new(rows, cols)?;

        for pos in alive_cells {
            grid.set_cell(pos, CellState::Alive)?;
        }

        Ok(grid)
    }

    pub fn new_random(rows: isize, cols: isize, alive_cells: usize) -> Result<Self, LifeError> {
        let mut grid = Self::new(rows, cols)?;

        let capacity = grid.cells.len();
        if alive_cells > capacity {
            return Err(LifeError::PopulationTooLarge {
                requested: alive_cells,
                capacity,
            });
        }

        let mut available_indices = (0..capacity).collect_vec();

        for _ in 0..alive_cells {
            let chosen_index = rand::random_range(0..available_indices.len());
            let cell_index = available_indices.swap_remove(chosen_index);
            grid.cells[cell_index] = CellState::Alive;
        }

        Ok(grid)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn cell<P>(&self, pos: P) -> Result<CellState, LifeError>
    where
        P: Into<Position>,
    {
        let pos = pos.into();
        self.get(pos).ok_or_else(|| self.out_of_bounds(pos))
    }

    pub fn set_cell<P>(&mut self, pos: P, state: CellState) -> Result<(), LifeError>
    where
        P: Into<Position>,
    {
        let pos = pos.into();
        let index = self.pos_to_index(pos).ok_or_else(|| self.out_of_bounds(pos))?;
        self.cells[index] = state;
        Ok(())
    }

    /// Counts the live cells among the eight neighbors of `pos`.
    /// Neighbors past the edge count as dead; the grid does not wrap around.
    pub fn count_alive_neighbors<P>(&self, pos: P) -> usize
    where
        P: Into<Position>,
    {
        let pos = pos.into();

        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(|&[d_row, d_col]| self.get(pos.offset(d_row, d_col)?))
            .filter(|neighbor| neighbor.is_alive())
            .count()
    }

    /// Replaces the current generation with the next one.
    ///
    /// Every next state is computed from the untouched current generation into a fresh
    /// buffer, which is only swapped in once complete.
    pub fn advance_generation(&mut self) {
        let next_cells = self
            .enumerate_cells()
            .map(|(pos, cell)| rule::next_state(cell, self.count_alive_neighbors(pos)))
            .collect_vec();

        self.cells = next_cells;
    }

    pub fn render(&self) -> Vec<Vec<CellState>> {
        self.cells.chunks(self.cols).map(<[_]>::to_vec).collect()
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    pub fn is_extinct(&self) -> bool {
        self.population() == 0
    }

    pub fn alive_cells(&self) -> impl Iterator<Item = Position> + '_ {
        self.enumerate_cells()
            .filter(|(_, cell)| cell.is_alive())
            .map(|(pos, _)| pos)
    }

    pub fn enumerate_cells(&self) -> impl Iterator<Item = (Position, CellState)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(index, cell)| (self.index_to_pos(index), *cell))
    }

    fn get(&self, pos: Position) -> Option<CellState> {
        let index = self.pos_to_index(pos)?;
        self.cells.get(index).copied()
    }

    fn pos_to_index(&self, pos: Position) -> Option<usize> {
        let row = usize::try_from(pos.row).ok()?;
        let col = usize::try_from(pos.col).ok()?;

        if row >= self.rows || col >= self.cols {
            return None;
        }

        Some(col + row * self.cols)
    }

    fn index_to_pos(&self, index: usize) -> Position {
        Position {
            row: (index / self.cols) as isize,
            col: (index % self.cols) as isize,
        }
    }

    fn out_of_bounds(&self, pos: Position) -> LifeError {
        LifeError::OutOfBounds {
            row: pos.row,
            col: pos.col,
            rows: self.rows,
            cols: self.cols,
        }
    }
}

/// One line per row, cells as space separated `0`/`1`.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols) {
            writeln!(f, "{}", row.iter().join(" "))?;
        }

        Ok(())
    }
}
