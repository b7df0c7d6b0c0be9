use carved::{
    grid_displays::{self, PathDisplay, StartEndPointsDisplay},
    maze::Maze,
    units::{Height, Width},
};
use docopt::Docopt;
use serde_derive::Deserialize;
use std::{fs::File, io, io::prelude::*};

const USAGE: &str = "Carved

Usage:
    carved_driver -h | --help
    carved_driver [(--grid-size=<n>|[--grid-width=<w> --grid-height=<h>])] [--density=<d>] [--seed=<s>] [--show-path|--mark-start-end] [--text-out=<path>]

Options:
    -h --help            Show this screen.
    --grid-size=<n>      The grid size is n * n.
    --grid-width=<w>     The grid width in a w*h grid [default: 20].
    --grid-height=<h>    The grid height in a w*h grid [default: 20].
    --density=<d>        Edge density in [0.5, 1.0]; 1.0 is a perfect maze [default: 1.0].
    --seed=<s>           Seed for deterministic generation.
    --show-path          Overlay the route from the north-west to the south-east corner.
    --mark-start-end     Draw 'S' (start) and 'E' (end) on the route endpoints.
    --text-out=<path>    Output file path for the textual rendering of the maze.
";

#[derive(Debug, Deserialize)]
struct MazeArgs {
    flag_grid_size: Option<usize>,
    flag_grid_width: usize,
    flag_grid_height: usize,
    flag_density: f64,
    flag_seed: Option<u64>,
    flag_show_path: bool,
    flag_mark_start_end: bool,
    flag_text_out: String,
}

mod errors {
    use error_chain::*;
    error_chain! {
        links {
            Carved(::carved::errors::Error, ::carved::errors::ErrorKind);
        }
        foreign_links {
            DocOptFailure(::docopt::Error);
        }
    }
}
use crate::errors::*;

fn main() -> Result<()> {
    let args: MazeArgs = Docopt::new(USAGE).and_then(|d| d.deserialize())?;

    let (width, height) = if let Some(square_grid_size) = args.flag_grid_size {
        (square_grid_size, square_grid_size)
    } else {
        (args.flag_grid_width, args.flag_grid_height)
    };

    let mut maze = Maze::new(Width(width), Height(height), args.flag_density, args.flag_seed)?;
    maze.generate();

    let rendered = if args.flag_show_path {
        let path = maze.find_path();
        let display = PathDisplay::new(&path);
        grid_displays::render_text(maze.grid(), Some(&display))
    } else if args.flag_mark_start_end {
        let path = maze.find_path();
        if let (Some(&start), Some(&end)) = (path.first(), path.last()) {
            let display = StartEndPointsDisplay::new(start, end);
            grid_displays::render_text(maze.grid(), Some(&display))
        } else {
            format!("{}", maze.grid())
        }
    } else {
        format!("{}", maze.grid())
    };

    if args.flag_text_out.is_empty() {
        println!("{}", rendered);
    } else {
        write_text_to_file(&rendered, &args.flag_text_out)
            .chain_err(|| format!("Failed to write maze to text file {}", args.flag_text_out))?;
    }

    Ok(())
}

fn write_text_to_file(data: &str, file_name: &str) -> io::Result<()> {
    let mut f = File::create(file_name)?;
    f.write_all(data.as_bytes())?;
    Ok(())
}
