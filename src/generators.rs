use rand::rngs::StdRng;
use rand::Rng;
use smallvec::SmallVec;

use crate::cells::{GridCoordinate, GridDirection, ALL_DIRECTIONS};
use crate::grid::Grid;

/// Carve a spanning tree over the whole grid with the randomized iterative
/// depth-first "backtracker" algorithm.
///
/// Starting from the north-west corner, walk to a random unvisited neighbour
/// and open the wall between, backtracking whenever a cell has no unvisited
/// neighbours left. Every cell is pushed and popped exactly once, so the
/// walk terminates after width*height pushes and the result links every
/// cell: a perfect maze with exactly width*height - 1 passages.
///
/// The tree is not a uniformly random spanning tree - the algorithm is
/// biased towards long winding corridors.
pub fn recursive_backtracker(grid: &mut Grid, rng: &mut StdRng) {
    grid.reset();

    let start = GridCoordinate::new(0, 0);
    grid.mark_visited(start);
    let mut stack = vec![start];

    while let Some(&current) = stack.last() {
        let unvisited: SmallVec<[(GridCoordinate, GridDirection); 4]> =
            ALL_DIRECTIONS.iter()
                          .filter_map(|&direction| {
                              grid.neighbour_at_direction(current, direction)
                                  .map(|neighbour| (neighbour, direction))
                          })
                          .filter(|&(neighbour, _)| !grid.is_visited(neighbour))
                          .collect();

        if unvisited.is_empty() {
            stack.pop();
        } else {
            let (next, direction) = unvisited[rng.gen::<usize>() % unvisited.len()];
            grid.link(current, direction);
            grid.mark_visited(next);
            stack.push(next);
        }
    }
}

/// Open extra passages beyond the spanning tree so the maze has multiple
/// routes between cells. `edge_density` 1.0 adds nothing; lower values add
/// more, down to the 0.5 floor.
///
/// The target count is `floor((1 - density) * (walls - tree edges))` where
/// `walls` counts every adjacent cell pair in the grid. Each attempt picks a
/// random cell and direction and opens the wall only when a neighbour exists
/// there and the wall is still closed; other attempts are wasted without a
/// retry, so this is a best-effort approximation of the target, not an exact
/// count. Returns the number of passages actually opened.
pub fn add_extra_links(grid: &mut Grid, edge_density: f64, rng: &mut StdRng) -> usize {
    let (width, height) = (grid.width(), grid.height());
    let total_possible_walls = (width - 1) * height + (height - 1) * width;
    let tree_edges = width * height - 1;
    let target = ((1.0 - edge_density) * (total_possible_walls - tree_edges) as f64)
        .floor() as usize;

    let mut added = 0;
    for _ in 0..target {
        let coord = grid.random_cell(rng);
        let direction = ALL_DIRECTIONS[rng.gen::<usize>() % ALL_DIRECTIONS.len()];

        if grid.neighbour_at_direction(coord, direction).is_some() &&
           !grid.is_linked(coord, direction) {
            grid.link(coord, direction);
            added += 1;
        }
    }
    added
}

#[cfg(test)]
mod tests {

    use quickcheck::{quickcheck, TestResult};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::units::{Height, Width};

    fn carved_grid(width: usize, height: usize, seed: u64) -> Grid {
        let mut grid = Grid::new(Width(width), Height(height)).expect("valid test dimensions");
        let mut rng = StdRng::seed_from_u64(seed);
        recursive_backtracker(&mut grid, &mut rng);
        grid
    }

    /// Number of cells reachable from the north-west corner through open
    /// passages only.
    fn reachable_cells_count(grid: &Grid) -> usize {
        let mut seen = vec![false; grid.size()];
        let mut stack = vec![GridCoordinate::new(0, 0)];
        seen[0] = true;
        let mut count = 0;

        while let Some(current) = stack.pop() {
            count += 1;
            for &direction in &ALL_DIRECTIONS {
                if !grid.is_linked(current, direction) {
                    continue;
                }
                if let Some(neighbour) = grid.neighbour_at_direction(current, direction) {
                    let index = neighbour.y as usize * grid.width() + neighbour.x as usize;
                    if !seen[index] {
                        seen[index] = true;
                        stack.push(neighbour);
                    }
                }
            }
        }
        count
    }

    fn assert_symmetric_links(grid: &Grid) {
        for coord in grid.iter() {
            for &direction in &ALL_DIRECTIONS {
                match grid.neighbour_at_direction(coord, direction) {
                    Some(neighbour) => {
                        assert_eq!(grid.is_linked(coord, direction),
                                   grid.is_linked(neighbour, direction.opposite()),
                                   "asymmetric wall between {:?} and {:?}",
                                   coord,
                                   neighbour);
                    }
                    None => {
                        assert!(!grid.is_linked(coord, direction),
                                "boundary cell {:?} linked out of the grid",
                                coord);
                    }
                }
            }
        }
    }

    #[test]
    fn backtracker_carves_a_spanning_tree() {
        for seed in 0..10 {
            let grid = carved_grid(5, 4, seed);
            assert_eq!(grid.links_count(), 5 * 4 - 1);
            assert_eq!(reachable_cells_count(&grid), 5 * 4);
            assert_symmetric_links(&grid);
        }
    }

    #[test]
    fn single_cell_grid_has_no_links() {
        let grid = carved_grid(1, 1, 7);
        assert_eq!(grid.links_count(), 0);
    }

    #[test]
    fn two_cell_grid_has_the_only_possible_link() {
        for seed in 0..5 {
            let grid = carved_grid(2, 1, seed);
            assert_eq!(grid.links_count(), 1);
            assert!(grid.is_linked(GridCoordinate::new(0, 0), GridDirection::East));
            assert!(grid.is_linked(GridCoordinate::new(1, 0), GridDirection::West));
        }
    }

    #[test]
    fn same_seed_carves_the_same_maze() {
        let first = carved_grid(8, 8, 42);
        let second = carved_grid(8, 8, 42);
        assert_eq!(first, second);
    }

    #[test]
    fn extra_links_never_remove_tree_edges() {
        let mut grid = Grid::new(Width(6), Height(6)).expect("valid test dimensions");
        let mut rng = StdRng::seed_from_u64(3);
        recursive_backtracker(&mut grid, &mut rng);
        let tree_edges = grid.links_count();

        let added = add_extra_links(&mut grid, 0.5, &mut rng);
        assert_eq!(grid.links_count(), tree_edges + added);
        assert!(grid.links_count() >= tree_edges);
        assert_symmetric_links(&grid);
        assert_eq!(reachable_cells_count(&grid), 6 * 6);
    }

    #[test]
    fn full_density_adds_nothing() {
        let mut grid = carved_grid(5, 5, 11);
        let mut rng = StdRng::seed_from_u64(11);
        let added = add_extra_links(&mut grid, 1.0, &mut rng);
        assert_eq!(added, 0);
        assert_eq!(grid.links_count(), 5 * 5 - 1);
    }

    #[test]
    fn extra_links_on_a_single_cell_grid_are_harmless() {
        let mut grid = carved_grid(1, 1, 0);
        let mut rng = StdRng::seed_from_u64(0);
        let added = add_extra_links(&mut grid, 0.5, &mut rng);
        assert_eq!(added, 0);
        assert_eq!(grid.links_count(), 0);
    }

    #[test]
    fn quickcheck_spanning_tree_properties() {
        fn prop(width: u8, height: u8) -> TestResult {
            if width == 0 || height == 0 || width > 12 || height > 12 {
                return TestResult::discard();
            }
            let (w, h) = (width as usize, height as usize);
            let grid = carved_grid(w, h, u64::from(width) << 8 | u64::from(height));

            assert_symmetric_links(&grid);
            TestResult::from_bool(grid.links_count() == w * h - 1 &&
                                  reachable_cells_count(&grid) == w * h)
        }
        quickcheck(prop as fn(u8, u8) -> TestResult);
    }
}
