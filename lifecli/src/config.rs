use std::{fs, path::Path};

use anyhow::Context;
use liblife::Grid;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub rows: isize,
    pub cols: isize,

    /// Cells set alive before the first generation, as `[row, col]` pairs.
    pub alive_cells: Vec<[isize; 2]>,

    /// Seeds this many randomly placed alive cells instead of `alive_cells`.
    pub random_alive_cells: Option<usize>,

    /// Number of generations to simulate. Asked for on stdin when missing.
    pub generations: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rows: 5,
            cols: 5,
            alive_cells: vec![[1, 2], [2, 3], [3, 1], [3, 2], [3, 3]],
            random_alive_cells: None,
            generations: None,
        }
    }
}

impl Config {
    pub fn load<P>(path: P) -> anyhow::Result<Self>
    where
        P: AsRef<Path>,
    {
        let config_serialized = fs::read(path).context("Couldn't read config")?;
        let config =
            serde_json::from_slice(&config_serialized).context("Couldn't deserialize config")?;
        Ok(config)
    }

    pub fn seed_grid(&self) -> anyhow::Result<Grid> {
        let grid = match self.random_alive_cells {
            Some(alive_count) => Grid::new_random(self.rows, self.cols, alive_count),
            None => Grid::with_alive_cells(self.rows, self.cols, self.alive_cells.iter().copied()),
        };

        grid.context("Couldn't seed grid")
    }
}
