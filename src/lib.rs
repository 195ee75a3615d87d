//! **corridors** carves non-intersecting paths through a rectangular grid for use as a game
//! level's traversable layout.
//!
//! Every path begins at the same start cell and leaves the grid through one chosen edge.
//! Paths are grown by a randomised walk with backtracking, one at a time, until the requested
//! number of paths is reached or no further path fits.
//!
//! ```
//! use corridors::{generators, choosers::RandomChooser, options::PathOptions};
//!
//! let options = PathOptions::default();
//! let layout = generators::generate_paths(&options, &mut RandomChooser::from_seed(1)).unwrap();
//! assert!(layout.paths_generated() <= options.max_paths);
//! print!("{}", layout.grid());
//! ```

pub mod cells;
pub mod choosers;
pub mod errors;
pub mod generators;
pub mod grid;
pub mod grid_displays;
pub mod grid_iterators;
pub mod nodes;
pub mod options;
pub mod paths;
pub mod units;
