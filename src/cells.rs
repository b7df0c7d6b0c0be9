use smallvec::SmallVec;

#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct GridCoordinate {
    pub x: u32,
    pub y: u32,
}
impl GridCoordinate {
    pub fn new(x: u32, y: u32) -> GridCoordinate {
        GridCoordinate { x, y }
    }
}
pub type CoordinateSmallVec = SmallVec<[GridCoordinate; 4]>;

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum GridDirection {
    North,
    East,
    South,
    West,
}

/// Fixed compass ordering used everywhere a cell's sides are walked, which
/// keeps neighbour expansion deterministic for the pathfinder.
pub const ALL_DIRECTIONS: [GridDirection; 4] = [GridDirection::North,
                                                GridDirection::East,
                                                GridDirection::South,
                                                GridDirection::West];

impl GridDirection {
    pub fn opposite(self) -> GridDirection {
        match self {
            GridDirection::North => GridDirection::South,
            GridDirection::East => GridDirection::West,
            GridDirection::South => GridDirection::North,
            GridDirection::West => GridDirection::East,
        }
    }
}

/// Coordinate one cell away in the given direction.
/// Returns None if the coordinate is not representable (north of row zero or
/// west of column zero). Offsets past the far grid edges are representable
/// and are culled by the grid's bounds check instead.
pub fn offset_coordinate(coord: GridCoordinate, dir: GridDirection) -> Option<GridCoordinate> {
    let (x, y) = (coord.x, coord.y);
    match dir {
        GridDirection::North => {
            if y > 0 {
                Some(GridCoordinate { x, y: y - 1 })
            } else {
                None
            }
        }
        GridDirection::East => Some(GridCoordinate { x: x + 1, y }),
        GridDirection::South => Some(GridCoordinate { x, y: y + 1 }),
        GridDirection::West => {
            if x > 0 {
                Some(GridCoordinate { x: x - 1, y })
            } else {
                None
            }
        }
    }
}

/// Passage flags for the four sides of a cell. A set flag is an open passage
/// (no wall) to the adjacent cell on that side.
///
/// Symmetry is maintained by `Grid::link`, the only mutation path: opening a
/// side always opens the matching side of the neighbour.
#[derive(Eq, PartialEq, Copy, Clone, Debug, Default)]
pub struct CellLinks {
    pub north: bool,
    pub east: bool,
    pub south: bool,
    pub west: bool,
}

impl CellLinks {
    pub fn at(&self, dir: GridDirection) -> bool {
        match dir {
            GridDirection::North => self.north,
            GridDirection::East => self.east,
            GridDirection::South => self.south,
            GridDirection::West => self.west,
        }
    }

    pub(crate) fn open(&mut self, dir: GridDirection) {
        match dir {
            GridDirection::North => self.north = true,
            GridDirection::East => self.east = true,
            GridDirection::South => self.south = true,
            GridDirection::West => self.west = true,
        }
    }

    pub fn count(&self) -> usize {
        self.north as usize + self.east as usize + self.south as usize + self.west as usize
    }
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct Cell {
    pub coord: GridCoordinate,
    pub links: CellLinks,
    /// Transient marker shared by the carving and search passes. Each pass
    /// clears it before use; it never outlives a single pass.
    pub(crate) visited: bool,
}

impl Cell {
    pub(crate) fn new(coord: GridCoordinate) -> Cell {
        Cell {
            coord,
            links: CellLinks::default(),
            visited: false,
        }
    }
}
