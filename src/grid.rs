use std::fmt;

use crate::cells::{Direction, GridCoordinate};
use crate::errors::*;
use crate::grid_iterators::{CellIter, RowIter};
use crate::nodes::{NodeRole, PathNode};
use crate::units::{ColumnsCount, RowsCount};

/// Largest number of rows or columns, every row and column index must fit a `GridCoordinate`.
pub const MAX_DIMENSION: usize = u32::MAX as usize;

/// Fixed size rectangular storage of optional path nodes, at most one node per cell.
#[derive(Clone, Eq, PartialEq)]
pub struct PathGrid {
    cells: Vec<Option<PathNode>>,
    rows: RowsCount,
    columns: ColumnsCount,
}

impl fmt::Debug for PathGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "PathGrid :: rows: {:?}, columns: {:?}, occupied: {:?}",
               self.rows, self.columns, self.occupied_count())
    }
}

impl PathGrid {
    /// Create a grid with every cell empty.
    pub fn new(rows: RowsCount, columns: ColumnsCount) -> Result<PathGrid> {
        if rows.0 == 0 {
            return Err(ErrorKind::InvalidRows(rows.0).into());
        }
        if columns.0 == 0 {
            return Err(ErrorKind::InvalidColumns(columns.0).into());
        }

        if rows.0 > MAX_DIMENSION || columns.0 > MAX_DIMENSION {
            return Err(ErrorKind::GridTooLarge(rows.0, columns.0).into());
        }
        let cells_count = rows.0
            .checked_mul(columns.0)
            .ok_or_else(|| Error::from(ErrorKind::GridTooLarge(rows.0, columns.0)))?;

        let mut cells: Vec<Option<PathNode>> = Vec::new();
        if cells.try_reserve_exact(cells_count).is_err() {
            return Err(ErrorKind::GridTooLarge(rows.0, columns.0).into());
        }
        cells.resize(cells_count, None);

        Ok(PathGrid {
            cells,
            rows,
            columns,
        })
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn rows(&self) -> RowsCount {
        self.rows
    }

    #[inline]
    pub fn columns(&self) -> ColumnsCount {
        self.columns
    }

    /// Is the grid coordinate valid for this grid - within the grid's dimensions
    #[inline]
    pub fn is_valid_coordinate(&self, coord: GridCoordinate) -> bool {
        (coord.row as usize) < self.rows.0 && (coord.column as usize) < self.columns.0
    }

    /// Convert a grid coordinate to a one dimensional index in the range 0...grid.size().
    /// Returns None if the grid coordinate is invalid.
    #[inline]
    pub fn grid_coordinate_to_index(&self, coord: GridCoordinate) -> Option<usize> {
        if self.is_valid_coordinate(coord) {
            Some(coord.row as usize * self.columns.0 + coord.column as usize)
        } else {
            None
        }
    }

    /// The node stored at a cell. None if the cell is empty or the coordinate is invalid.
    pub fn node(&self, coord: GridCoordinate) -> Option<&PathNode> {
        self.grid_coordinate_to_index(coord)
            .and_then(|index| self.cells[index].as_ref())
    }

    /// A valid cell holding no node.
    pub fn is_empty_cell(&self, coord: GridCoordinate) -> bool {
        self.grid_coordinate_to_index(coord)
            .map_or(false, |index| self.cells[index].is_none())
    }

    /// Store a node at a cell, returning whatever node it replaced.
    pub fn set_node(&mut self, coord: GridCoordinate, node: PathNode) -> Result<Option<PathNode>> {
        let index = self.checked_index(coord)?;
        Ok(self.cells[index].replace(node))
    }

    /// Empty a cell, returning the node it held.
    pub fn clear_node(&mut self, coord: GridCoordinate) -> Result<Option<PathNode>> {
        let index = self.checked_index(coord)?;
        Ok(self.cells[index].take())
    }

    /// The adjacent cell in the given direction. None if stepping that way leaves the grid.
    pub fn neighbour_at_direction(&self,
                                  coord: GridCoordinate,
                                  direction: Direction)
                                  -> Option<GridCoordinate> {
        coord.offset(direction)
             .and_then(|neighbour_coord| {
                 if self.is_valid_coordinate(neighbour_coord) {
                     Some(neighbour_coord)
                 } else {
                     None
                 }
             })
    }

    #[inline]
    pub fn iter(&self) -> CellIter {
        CellIter::new(self.rows, self.columns)
    }

    #[inline]
    pub fn iter_row(&self) -> RowIter {
        RowIter::new(self.rows, self.columns)
    }

    /// Every occupied cell with its node, in row-major order.
    pub fn iter_nodes<'a>(&'a self) -> impl Iterator<Item = (GridCoordinate, &'a PathNode)> + 'a {
        let row_length = self.columns.0;
        self.cells
            .iter()
            .enumerate()
            .filter_map(move |(index, cell)| {
                cell.as_ref()
                    .map(|node| (GridCoordinate::from_row_major_index(index, row_length), node))
            })
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    pub fn count_role(&self, role: NodeRole) -> usize {
        self.cells
            .iter()
            .filter(|cell| cell.map_or(false, |node| node.role == role))
            .count()
    }

    /// Empty every cell holding a temporary node. Returns the number of cells emptied.
    pub fn remove_temporary_nodes(&mut self) -> usize {
        let mut removed = 0;
        for cell in self.cells.iter_mut() {
            if cell.map_or(false, |node| node.is_temporary()) {
                *cell = None;
                removed += 1;
            }
        }
        removed
    }

    fn checked_index(&self, coord: GridCoordinate) -> Result<usize> {
        self.grid_coordinate_to_index(coord)
            .ok_or_else(|| ErrorKind::InvalidGridCoordinate(coord.row, coord.column).into())
    }
}
