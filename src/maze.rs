use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::cells::GridCoordinate;
use crate::errors::*;
use crate::generators;
use crate::grid::Grid;
use crate::pathing;
use crate::units::{Height, Width};

const MIN_EDGE_DENSITY: f64 = 0.5;
const MAX_EDGE_DENSITY: f64 = 1.0;

/// Maze generation engine over one rectangular grid.
///
/// `edge_density` controls how many cycle-forming passages are opened on top
/// of the carved spanning tree: 1.0 is a perfect maze with a unique route
/// between any two cells, lower values add extra routes, and the value is
/// clamped to [0.5, 1.0] on construction. The extra-passage pass is a
/// best-effort approximation - see `generators::add_extra_links`.
///
/// Passing a seed makes generation fully deterministic; otherwise the engine
/// seeds itself from OS entropy.
#[derive(Debug)]
pub struct Maze {
    grid: Grid,
    edge_density: f64,
    rng: StdRng,
}

impl Maze {
    /// Fails with `ErrorKind::InvalidDimensions` when either side is zero.
    pub fn new(width: Width,
               height: Height,
               edge_density: f64,
               seed: Option<u64>)
               -> Result<Maze> {
        let grid = Grid::new(width, height)?;
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(Maze {
            grid,
            edge_density: edge_density.max(MIN_EDGE_DENSITY).min(MAX_EDGE_DENSITY),
            rng,
        })
    }

    pub fn edge_density(&self) -> f64 {
        self.edge_density
    }

    /// Read-only view of the grid for rendering walls.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Carve a fresh maze, discarding whatever the grid held before. Every
    /// cell is reachable from every other cell afterwards, whatever the
    /// density.
    pub fn generate(&mut self) {
        generators::recursive_backtracker(&mut self.grid, &mut self.rng);
        if self.edge_density < MAX_EDGE_DENSITY {
            generators::add_extra_links(&mut self.grid, self.edge_density, &mut self.rng);
        }
    }

    /// Route from the north-west to the south-east corner, or an empty
    /// sequence if no route exists. Non-destructive: walls are untouched and
    /// the search may be repeated any number of times with the same result.
    pub fn find_path(&mut self) -> Vec<GridCoordinate> {
        pathing::find_path(&mut self.grid)
    }
}
