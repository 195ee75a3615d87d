use log::{debug, trace};

use crate::cells::{Direction, DirectionSmallVec, GridCoordinate};
use crate::choosers::{DirectionChooser, RandomChooser};
use crate::errors::*;
use crate::grid::PathGrid;
use crate::nodes::PathNode;
use crate::options::PathOptions;
use crate::paths::{Path, PathLayout};
use crate::units::{PathId, PathsCount};

/// Carve up to `options.max_paths` paths through a new grid.
///
/// Every path starts from the same start cell and leaves the grid through `options.exit_side`.
/// Paths never share a cell. Generation stops at the first path that cannot be carved, so the
/// layout may hold fewer paths than requested; that is not an error.
///
/// Errors are only returned for invalid options, before any grid is built.
pub fn generate_paths<C>(options: &PathOptions, chooser: &mut C) -> Result<PathLayout>
    where C: DirectionChooser + ?Sized
{
    options.validate()?;

    let mut grid = PathGrid::new(options.rows, options.columns)?;
    grid.set_node(options.start, PathNode::start())?;

    // max_paths is only an upper bound, far more than fit is still valid.
    let PathsCount(max_paths) = options.max_paths;
    let mut paths = Vec::new();
    let mut path_id = PathId(0);

    while paths.len() < max_paths {
        match generate_path(&mut grid, options.start, options.exit_side, path_id, chooser) {
            Some(path) => {
                debug!("carved path {:?} with {} cells", path.id(), path.len());
                paths.push(path);
                match path_id.checked_next() {
                    Some(next_id) => path_id = next_id,
                    None => {
                        debug!("path ids exhausted after {} paths", paths.len());
                        break;
                    }
                }
            }
            None => {
                debug!("no room for path {:?}, stopping after {} paths", path_id, paths.len());
                break;
            }
        }
    }

    Ok(PathLayout::new(grid, options.start, paths))
}

/// `generate_paths` with a freshly seeded random chooser.
pub fn generate_random_paths(options: &PathOptions) -> Result<PathLayout> {
    let mut chooser = RandomChooser::from_entropy();
    generate_paths(options, &mut chooser)
}

/// Walk one new path from `start` to the `exit_side` edge of the grid, writing its nodes
/// into the grid as it goes. Returns None if no path can leave the start cell.
///
/// A randomised walk with backtracking. From the current cell a direction is valid if it
/// steps into an empty cell or steps off the grid through the exit side. When the walk is
/// boxed in, the current cell is marked with a temporary node so it is never entered again
/// and the walk retreats one cell along its trail. Only a boxed in start cell ends the walk
/// in failure.
///
/// The temporary markers are removed again before returning. A failed walk has backtracked
/// out of every cell it entered, so it leaves the grid as it found it.
pub fn generate_path<C>(grid: &mut PathGrid,
                        start: GridCoordinate,
                        exit_side: Direction,
                        path_id: PathId,
                        chooser: &mut C)
                        -> Option<Path>
    where C: DirectionChooser + ?Sized
{
    let mut walk = Walk::new(start, path_id);

    let exited = loop {
        let candidates = valid_directions(grid, walk.current, exit_side);

        if candidates.is_empty() {
            if !walk.backtrack(grid) {
                break false;
            }
            continue;
        }

        let direction = chooser.choose(&candidates);
        match walk.advance(grid, direction) {
            Some(next) => walk.current = next,
            None => break true,
        }
    };

    walk.clear_markers(grid);

    if exited {
        let cells = walk.trail.iter().skip(1).map(|&(coord, _)| coord).collect();
        Some(Path::new(path_id, cells, exit_side))
    } else {
        None
    }
}

/// The directions that can be taken from `coord`, in `Direction::CARDINALS` order.
pub fn valid_directions(grid: &PathGrid,
                        coord: GridCoordinate,
                        exit_side: Direction)
                        -> DirectionSmallVec {
    Direction::CARDINALS
        .iter()
        .cloned()
        .filter(|&dir| can_move_in_direction(grid, coord, dir, exit_side))
        .collect()
}

fn can_move_in_direction(grid: &PathGrid,
                         coord: GridCoordinate,
                         direction: Direction,
                         exit_side: Direction)
                         -> bool {
    if !direction.is_cardinal() {
        return false;
    }
    match grid.neighbour_at_direction(coord, direction) {
        Some(neighbour) => grid.is_empty_cell(neighbour),
        // Stepping off a valid cell crosses the edge on that side
        None => direction == exit_side,
    }
}

/// In progress state of a single path attempt.
struct Walk {
    start: GridCoordinate,
    path_id: PathId,
    current: GridCoordinate,
    /// Direction from `current` back to the cell the walk came from.
    direction_to_previous: Direction,
    /// Cells stepped forward out of, start first, each with its own direction to previous.
    trail: Vec<(GridCoordinate, Direction)>,
    markers: Vec<GridCoordinate>,
}

impl Walk {
    fn new(start: GridCoordinate, path_id: PathId) -> Walk {
        Walk {
            start,
            path_id,
            current: start,
            direction_to_previous: Direction::None,
            trail: Vec::new(),
            markers: Vec::new(),
        }
    }

    /// Commit the current cell to the path heading in `direction`. Returns the cell stepped
    /// into, or None when the step leaves the grid.
    fn advance(&mut self, grid: &mut PathGrid, direction: Direction) -> Option<GridCoordinate> {
        if self.current != self.start {
            let node = PathNode::normal(direction, self.direction_to_previous, self.path_id);
            self.write(grid, self.current, node);
        }
        self.trail.push((self.current, self.direction_to_previous));
        self.direction_to_previous = direction.opposite();

        grid.neighbour_at_direction(self.current, direction)
    }

    /// Mark the current cell as a dead end and retreat to the previous cell.
    /// Returns false when there is nowhere to retreat to.
    fn backtrack(&mut self, grid: &mut PathGrid) -> bool {
        if self.current == self.start {
            return false;
        }
        match self.trail.pop() {
            Some((previous, previous_direction)) => {
                trace!("path {:?} dead end at {:?}, back to {:?}",
                       self.path_id, self.current, previous);
                let marker = PathNode::temporary(self.path_id);
                self.write(grid, self.current, marker);
                self.markers.push(self.current);
                self.current = previous;
                self.direction_to_previous = previous_direction;
                true
            }
            None => false,
        }
    }

    fn write(&self, grid: &mut PathGrid, coord: GridCoordinate, node: PathNode) {
        let written = grid.set_node(coord, node);
        debug_assert!(written.is_ok(), "walk left the grid at {:?}", coord);
    }

    fn clear_markers(&mut self, grid: &mut PathGrid) {
        for marker in self.markers.drain(..) {
            let cleared = grid.clear_node(marker);
            debug_assert!(cleared.is_ok(), "marker outside the grid at {:?}", marker);
        }
    }
}
