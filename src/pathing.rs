use crate::cells::{GridCoordinate, ALL_DIRECTIONS};
use crate::grid::Grid;

/// Depth-first route from the north-west corner (0,0) to the south-east
/// corner (width-1, height-1), following open passages only.
///
/// Neighbours are expanded in the fixed north, east, south, west order, so
/// for a given set of links the returned route is deterministic. It is a
/// depth-first route, not necessarily the shortest one.
///
/// All visited markers are cleared before the search, independent of any
/// earlier use by the carving pass. Link flags are never touched. Returns an
/// empty sequence when the corners are not connected, which cannot happen on
/// a freshly generated maze but is handled rather than assumed away.
pub fn find_path(grid: &mut Grid) -> Vec<GridCoordinate> {
    grid.clear_visited();

    let start = GridCoordinate::new(0, 0);
    let end = GridCoordinate::new(grid.width() as u32 - 1, grid.height() as u32 - 1);

    // Predecessors keyed by the flat arena index rather than a map keyed on
    // cell identity.
    let mut came_from: Vec<Option<GridCoordinate>> = vec![None; grid.size()];
    let mut stack = vec![start];
    grid.mark_visited(start);

    while let Some(current) = stack.pop() {
        if current == end {
            return reconstruct_path(grid, &came_from, start, end);
        }

        for &direction in &ALL_DIRECTIONS {
            if !grid.is_linked(current, direction) {
                continue;
            }
            if let Some(neighbour) = grid.neighbour_at_direction(current, direction) {
                if !grid.is_visited(neighbour) {
                    grid.mark_visited(neighbour);
                    if let Some(index) = grid.coordinate_to_index(neighbour) {
                        came_from[index] = Some(current);
                    }
                    stack.push(neighbour);
                }
            }
        }
    }

    Vec::new()
}

fn reconstruct_path(grid: &Grid,
                    came_from: &[Option<GridCoordinate>],
                    start: GridCoordinate,
                    end: GridCoordinate)
                    -> Vec<GridCoordinate> {
    let mut path = vec![end];
    let mut current = end;

    while current != start {
        let previous = grid.coordinate_to_index(current)
                           .and_then(|index| came_from[index]);
        match previous {
            Some(coord) => {
                path.push(coord);
                current = coord;
            }
            None => break,
        }
    }

    path.reverse();
    path
}
