//! Property-based tests for generation stepping.
//!
//! Random grids are stepped once and compared against a cell-by-cell evaluation
//! of the rule over a snapshot of the previous generation.

use liblife::{CellState, Grid, LifeError, Position, rule};
use proptest::prelude::*;

fn grid_strategy() -> impl Strategy<Value = Grid> {
    (1isize..9, 1isize..9).prop_flat_map(|(rows, cols)| {
        prop::collection::vec(any::<bool>(), (rows * cols) as usize).prop_map(move |cells| {
            let alive = cells
                .iter()
                .enumerate()
                .filter(|(_, alive)| **alive)
                .map(|(index, _)| Position::new(index as isize / cols, index as isize % cols));

            Grid::with_alive_cells(rows, cols, alive).unwrap()
        })
    })
}

/// Neighbor count computed straight from the rendered rows, with explicit bounds checks.
fn reference_neighbors(rows: &[Vec<CellState>], row: usize, col: usize) -> usize {
    let mut count = 0;

    for d_row in -1isize..=1 {
        for d_col in -1isize..=1 {
            if d_row == 0 && d_col == 0 {
                continue;
            }

            let r = row as isize + d_row;
            let c = col as isize + d_col;
            if r < 0 || c < 0 || r as usize >= rows.len() || c as usize >= rows[0].len() {
                continue;
            }

            if rows[r as usize][c as usize].is_alive() {
                count += 1;
            }
        }
    }

    count
}

proptest! {
    #[test]
    fn prop_neighbor_count_is_clamped(grid in grid_strategy()) {
        let rows = grid.render();

        for (pos, _) in grid.enumerate_cells() {
            let count = grid.count_alive_neighbors(pos);
            prop_assert!(count <= 8);
            prop_assert_eq!(
                count,
                reference_neighbors(&rows, pos.row as usize, pos.col as usize)
            );
        }
    }

    #[test]
    fn prop_step_reads_only_previous_generation(grid in grid_strategy()) {
        let previous = grid.render();
        let mut next = grid.clone();
        next.advance_generation();

        prop_assert_eq!(next.rows(), grid.rows());
        prop_assert_eq!(next.cols(), grid.cols());

        for (pos, state) in next.enumerate_cells() {
            let (row, col) = (pos.row as usize, pos.col as usize);
            let expected = rule::next_state(previous[row][col], reference_neighbors(&previous, row, col));
            prop_assert_eq!(state, expected, "cell {:?}", pos);
        }
    }

    #[test]
    fn prop_dead_grid_is_fixed_point(rows in 1isize..20, cols in 1isize..20) {
        let mut grid = Grid::new(rows, cols).unwrap();
        grid.advance_generation();
        prop_assert!(grid.is_extinct());
    }

    #[test]
    fn prop_non_positive_dimensions_fail(rows in -5isize..=0, cols in -5isize..10) {
        prop_assert_eq!(Grid::new(rows, cols), Err(LifeError::InvalidDimension { rows, cols }));
        prop_assert_eq!(Grid::new(cols, rows), Err(LifeError::InvalidDimension { rows: cols, cols: rows }));
    }

    #[test]
    fn prop_outside_positions_fail(grid in grid_strategy(), over in 0isize..3) {
        let mut grid = grid;
        let rows = grid.rows() as isize;
        let cols = grid.cols() as isize;

        let results = [
            grid.set_cell([rows + over, 0], CellState::Alive),
            grid.set_cell([0, cols + over], CellState::Alive),
            grid.set_cell([-1 - over, 0], CellState::Alive),
            grid.cell([0, -1 - over]).map(|_| ()),
        ];

        for result in results {
            let out_of_bounds = matches!(result, Err(LifeError::OutOfBounds { .. }));
            prop_assert!(out_of_bounds, "expected OutOfBounds, got {:?}", result);
        }
    }
}
