use crate::cells::{GridCoordinate, GridDirection};
use crate::grid::Grid;
use crate::utils;
use crate::utils::FnvHashSet;

/// Something that draws the three character wide body of a cell in the
/// textual rendering, e.g. route markers or start/end markers.
pub trait GridDisplay {
    fn render_cell_body(&self, coord: GridCoordinate) -> String;
}

#[derive(Debug)]
pub struct PathDisplay {
    on_path_coordinates: FnvHashSet<GridCoordinate>,
}
impl PathDisplay {
    pub fn new(path: &[GridCoordinate]) -> Self {
        let mut on_path_coordinates = utils::fnv_hashset(path.len());
        on_path_coordinates.extend(path.iter().cloned());
        PathDisplay { on_path_coordinates }
    }
}
impl GridDisplay for PathDisplay {
    fn render_cell_body(&self, coord: GridCoordinate) -> String {
        if self.on_path_coordinates.contains(&coord) {
            String::from(" . ")
        } else {
            String::from("   ")
        }
    }
}

#[derive(Debug)]
pub struct StartEndPointsDisplay {
    start: GridCoordinate,
    end: GridCoordinate,
}
impl StartEndPointsDisplay {
    pub fn new(start: GridCoordinate, end: GridCoordinate) -> Self {
        StartEndPointsDisplay { start, end }
    }
}
impl GridDisplay for StartEndPointsDisplay {
    fn render_cell_body(&self, coord: GridCoordinate) -> String {
        if coord == self.start {
            String::from(" S ")
        } else if coord == self.end {
            String::from(" E ")
        } else {
            String::from("   ")
        }
    }
}

/// Render the grid walls as ASCII, one `+---+` band per cell row. Open
/// passages leave a gap in the east or south wall of the cell. The overlay,
/// when given, fills each cell body.
pub fn render_text(grid: &Grid, overlay: Option<&dyn GridDisplay>) -> String {
    let mut output = String::new();

    output.push('+');
    for _ in 0..grid.width() {
        output.push_str("---+");
    }
    output.push('\n');

    for row in grid.iter_row() {
        let mut body_line = String::from("|");
        let mut south_line = String::from("+");

        for coord in row {
            match overlay {
                Some(display) => body_line.push_str(&display.render_cell_body(coord)),
                None => body_line.push_str("   "),
            }
            body_line.push_str(if grid.is_linked(coord, GridDirection::East) {
                " "
            } else {
                "|"
            });

            south_line.push_str(if grid.is_linked(coord, GridDirection::South) {
                "   "
            } else {
                "---"
            });
            south_line.push('+');
        }

        output.push_str(&body_line);
        output.push('\n');
        output.push_str(&south_line);
        output.push('\n');
    }

    output
}
