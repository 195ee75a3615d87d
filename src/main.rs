use docopt::Docopt;
use log::info;
use serde_derive::Deserialize;
use corridors::{
    cells::{Direction, GridCoordinate},
    choosers::RandomChooser,
    generators,
    options::PathOptions,
    paths::PathLayout,
    units::{ColumnsCount, PathsCount, RowsCount},
};
use std::{
    fs::File,
    io,
    io::prelude::*,
};

const USAGE: &str = "Corridors

Usage:
    corridors_driver -h | --help
    corridors_driver [--rows=<r>] [--columns=<c>] [--max-paths=<n>] [--start-row=<y>] [--start-column=<x>] [--exit=<side>] [--seed=<s>] [--show-links] [--text-out=<path>]

Options:
    -h --help              Show this screen.
    --rows=<r>             Number of rows in the grid [default: 5].
    --columns=<c>          Number of columns in the grid [default: 5].
    --max-paths=<n>        The most paths to carve. Fewer are carved if no more fit [default: 3].
    --start-row=<y>        Row of the cell every path starts from, 0 is the top row [default: 4].
    --start-column=<x>     Column of the cell every path starts from, 0 is the left column [default: 2].
    --exit=<side>          The grid edge paths leave through: up, down, left or right [default: up].
    --seed=<s>             Seed the random choices so the same layout can be carved again.
    --show-links           Show the direction each path takes out of a cell instead of its path id.
    --text-out=<path>      Output file path for the textual rendering of the grid.
";
#[derive(Debug, Deserialize)]
struct CorridorsArgs {
    flag_rows: usize,
    flag_columns: usize,
    flag_max_paths: usize,
    flag_start_row: u32,
    flag_start_column: u32,
    flag_exit: String,
    flag_seed: Option<u64>,
    flag_show_links: bool,
    flag_text_out: String,
}

// Errors from the corridors library are linked in, so `?` works on library results too.
mod errors {
    use error_chain::*;
    error_chain! {

        links {
            Corridors(::corridors::errors::Error, ::corridors::errors::ErrorKind);
        }

        foreign_links {
            DocOptFailure(::docopt::Error);
            Io(::std::io::Error);
        }
    }
}
use crate::errors::*;

fn main() -> Result<()> {
    env_logger::init();

    let args: CorridorsArgs = Docopt::new(USAGE).and_then(|d| d.deserialize())?;
    let options = path_options(&args)?;

    let mut chooser = match args.flag_seed {
        Some(seed) => RandomChooser::from_seed(seed),
        None => RandomChooser::from_entropy(),
    };
    let layout = generators::generate_paths(&options, &mut chooser)?;
    info!("{} of {} paths generated", layout.paths_generated().0, options.max_paths.0);

    let text = render_layout(&layout, args.flag_show_links);
    if args.flag_text_out.is_empty() {
        print!("{}", text);
    } else {
        write_text_to_file(&text, &args.flag_text_out)
            .chain_err(|| format!("Failed to write grid to text file {}", args.flag_text_out))?;
    }

    Ok(())
}

fn path_options(args: &CorridorsArgs) -> Result<PathOptions> {
    let exit_side: Direction = args.flag_exit.parse()?;
    Ok(PathOptions::new(RowsCount(args.flag_rows),
                        ColumnsCount(args.flag_columns),
                        PathsCount(args.flag_max_paths),
                        GridCoordinate::new(args.flag_start_row, args.flag_start_column),
                        exit_side))
}

fn render_layout(layout: &PathLayout, show_links: bool) -> String {
    let mut text = if show_links {
        format!("{:#}", layout.grid())
    } else {
        format!("{}", layout.grid())
    };
    text.push_str(&format!("paths generated: {}\n", layout.paths_generated().0));
    text
}

fn write_text_to_file(data: &str, file_name: &str) -> io::Result<()> {
    let mut f = File::create(file_name)?;
    f.write_all(data.as_bytes())?;
    Ok(())
}
