use crate::cell::CellState;

/// Conway's B3/S23 rule: a live cell survives with two or three live neighbors,
/// a dead cell comes alive with exactly three.
pub fn next_state(current: CellState, alive_neighbors: usize) -> CellState {
    match (current, alive_neighbors) {
        (CellState::Alive, 2 | 3) => CellState::Alive, // Survival
        (CellState::Dead, 3) => CellState::Alive,      // Birth
        _ => CellState::Dead,
    }
}
