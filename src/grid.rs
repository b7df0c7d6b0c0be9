use rand::rngs::StdRng;
use rand::Rng;
use std::fmt;

use crate::cells::{offset_coordinate, Cell, CoordinateSmallVec, GridCoordinate, GridDirection,
                   ALL_DIRECTIONS};
use crate::errors::*;
use crate::grid_displays;
use crate::units::{Height, Width};

/// A rectangular grid of cells stored as a flat row-major arena.
///
/// Linking is the only way link flags change and always writes both sides of
/// the shared wall, so the flags stay symmetric: if a cell is open to the
/// south, the cell below it is open to the north.
#[derive(Eq, PartialEq, Clone, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a fully walled grid. Zero on either side is rejected rather
    /// than producing an empty grid that later operations would silently
    /// accept.
    pub fn new(width: Width, height: Height) -> Result<Grid> {
        if width.0 == 0 || height.0 == 0 {
            return Err(ErrorKind::InvalidDimensions(width.0, height.0).into());
        }
        let mut grid = Grid {
            width: width.0,
            height: height.0,
            cells: Vec::new(),
        };
        grid.reset();
        Ok(grid)
    }

    /// Discard all links and visited markers, returning every cell to the
    /// fresh fully walled state.
    pub fn reset(&mut self) {
        let cells = (0..self.size())
            .map(|index| Cell::new(self.index_to_coordinate(index)))
            .collect();
        self.cells = cells;
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn size(&self) -> usize {
        self.width * self.height
    }

    /// Bounds-checked cell lookup. None means "no cell there", which callers
    /// treat as the absence of a neighbour rather than a failure.
    pub fn cell_at(&self, coord: GridCoordinate) -> Option<&Cell> {
        self.coordinate_to_index(coord).map(|index| &self.cells[index])
    }

    /// Open the passage from `coord` towards `direction`: two flag writes,
    /// one on each cell sharing the wall. A missing neighbour (boundary
    /// direction or out-of-bounds `coord`) makes this a silent no-op, which
    /// the extra-passage pass relies on for its wasted attempts.
    pub fn link(&mut self, coord: GridCoordinate, direction: GridDirection) {
        let from = match self.coordinate_to_index(coord) {
            Some(index) => index,
            None => return,
        };
        let to = match self.neighbour_at_direction(coord, direction)
                           .and_then(|neighbour| self.coordinate_to_index(neighbour)) {
            Some(index) => index,
            None => return,
        };
        self.cells[from].links.open(direction);
        self.cells[to].links.open(direction.opposite());
    }

    /// Is the passage from `coord` towards `direction` open?
    pub fn is_linked(&self, coord: GridCoordinate, direction: GridDirection) -> bool {
        self.cell_at(coord).map_or(false, |cell| cell.links.at(direction))
    }

    pub fn neighbour_at_direction(&self,
                                  coord: GridCoordinate,
                                  direction: GridDirection)
                                  -> Option<GridCoordinate> {
        offset_coordinate(coord, direction).filter(|c| self.is_valid_coordinate(*c))
    }

    /// Cells to the north, east, south or west of a coordinate, whether or
    /// not a passage links them.
    pub fn neighbours(&self, coord: GridCoordinate) -> CoordinateSmallVec {
        ALL_DIRECTIONS.iter()
                      .filter_map(|&direction| self.neighbour_at_direction(coord, direction))
                      .collect()
    }

    pub fn random_cell(&self, rng: &mut StdRng) -> GridCoordinate {
        let index = rng.gen::<usize>() % self.size();
        self.index_to_coordinate(index)
    }

    /// Total number of open passages. Each passage sets the east or south
    /// flag on exactly one of its two cells, so counting those flags counts
    /// every passage once.
    pub fn links_count(&self) -> usize {
        self.cells
            .iter()
            .map(|cell| cell.links.east as usize + cell.links.south as usize)
            .sum()
    }

    pub fn iter(&self) -> CellIter {
        CellIter {
            current_cell_number: 0,
            width: self.width,
            cells_count: self.size(),
        }
    }

    pub fn iter_row(&self) -> RowIter {
        RowIter {
            current_row: 0,
            width: self.width,
            height: self.height,
        }
    }

    pub(crate) fn is_visited(&self, coord: GridCoordinate) -> bool {
        self.cell_at(coord).map_or(false, |cell| cell.visited)
    }

    pub(crate) fn mark_visited(&mut self, coord: GridCoordinate) {
        if let Some(index) = self.coordinate_to_index(coord) {
            self.cells[index].visited = true;
        }
    }

    pub(crate) fn clear_visited(&mut self) {
        for cell in &mut self.cells {
            cell.visited = false;
        }
    }

    pub(crate) fn coordinate_to_index(&self, coord: GridCoordinate) -> Option<usize> {
        if self.is_valid_coordinate(coord) {
            Some(coord.y as usize * self.width + coord.x as usize)
        } else {
            None
        }
    }

    fn index_to_coordinate(&self, index: usize) -> GridCoordinate {
        let y = index / self.width;
        let x = index - (y * self.width);
        GridCoordinate {
            x: x as u32,
            y: y as u32,
        }
    }

    fn is_valid_coordinate(&self, coord: GridCoordinate) -> bool {
        (coord.x as usize) < self.width && (coord.y as usize) < self.height
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", grid_displays::render_text(self, None))
    }
}

#[derive(Debug, Copy, Clone)]
pub struct CellIter {
    current_cell_number: usize,
    width: usize,
    cells_count: usize,
}
impl Iterator for CellIter {
    type Item = GridCoordinate;
    fn next(&mut self) -> Option<Self::Item> {
        if self.current_cell_number < self.cells_count {
            let y = self.current_cell_number / self.width;
            let x = self.current_cell_number - (y * self.width);
            self.current_cell_number += 1;
            Some(GridCoordinate::new(x as u32, y as u32))
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.cells_count - self.current_cell_number;
        (remaining, Some(remaining))
    }
}

impl<'a> IntoIterator for &'a Grid {
    type Item = GridCoordinate;
    type IntoIter = CellIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[derive(Debug, Copy, Clone)]
pub struct RowIter {
    current_row: usize,
    width: usize,
    height: usize,
}
impl Iterator for RowIter {
    type Item = Vec<GridCoordinate>;
    fn next(&mut self) -> Option<Self::Item> {
        if self.current_row < self.height {
            let y = self.current_row as u32;
            let row = (0..self.width)
                .map(|x| GridCoordinate::new(x as u32, y))
                .collect();
            self.current_row += 1;
            Some(row)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.height - self.current_row;
        (remaining, Some(remaining))
    }
}
