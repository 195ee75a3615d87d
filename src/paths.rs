use crate::cells::{Direction, GridCoordinate};
use crate::grid::PathGrid;
use crate::units::{PathId, PathsCount};

/// One corridor carved through a grid.
///
/// The cells run in walking order: the first is adjacent to the start cell and the last steps
/// off the grid through the exit side. A start cell lying on the exit side itself gives a path
/// with no cells.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Path {
    id: PathId,
    cells: Vec<GridCoordinate>,
    exit_side: Direction,
}

impl Path {
    pub fn new(id: PathId, cells: Vec<GridCoordinate>, exit_side: Direction) -> Path {
        Path {
            id,
            cells,
            exit_side,
        }
    }

    #[inline]
    pub fn id(&self) -> PathId {
        self.id
    }

    #[inline]
    pub fn cells(&self) -> &[GridCoordinate] {
        &self.cells
    }

    #[inline]
    pub fn exit_side(&self) -> Direction {
        self.exit_side
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, coord: GridCoordinate) -> bool {
        self.cells.contains(&coord)
    }

    pub fn first(&self) -> Option<GridCoordinate> {
        self.cells.first().cloned()
    }

    pub fn last(&self) -> Option<GridCoordinate> {
        self.cells.last().cloned()
    }
}

/// A grid populated with paths, as handed back to the caller.
#[derive(Debug, Clone)]
pub struct PathLayout {
    grid: PathGrid,
    start: GridCoordinate,
    paths: Vec<Path>,
}

impl PathLayout {
    pub(crate) fn new(grid: PathGrid, start: GridCoordinate, paths: Vec<Path>) -> PathLayout {
        PathLayout { grid, start, paths }
    }

    #[inline]
    pub fn grid(&self) -> &PathGrid {
        &self.grid
    }

    #[inline]
    pub fn start(&self) -> GridCoordinate {
        self.start
    }

    #[inline]
    pub fn paths(&self) -> &[Path] {
        &self.paths
    }

    #[inline]
    pub fn paths_generated(&self) -> PathsCount {
        PathsCount(self.paths.len())
    }

    pub fn path(&self, id: PathId) -> Option<&Path> {
        self.paths.iter().find(|path| path.id() == id)
    }

    /// Split into the populated grid and the generated paths.
    pub fn into_parts(self) -> (PathGrid, Vec<Path>) {
        (self.grid, self.paths)
    }
}
