use crate::cells::{Direction, GridCoordinate};
use crate::errors::*;
use crate::grid::MAX_DIMENSION;
use crate::units::{ColumnsCount, PathsCount, RowsCount};

/// Parameters for carving paths through a new grid.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct PathOptions {
    pub rows: RowsCount,
    pub columns: ColumnsCount,
    /// Generation stops early if no further path fits.
    pub max_paths: PathsCount,
    pub start: GridCoordinate,
    /// The grid edge every path leaves through.
    pub exit_side: Direction,
}

impl Default for PathOptions {
    fn default() -> PathOptions {
        PathOptions {
            rows: RowsCount(5),
            columns: ColumnsCount(5),
            max_paths: PathsCount(3),
            start: GridCoordinate::new(4, 2),
            exit_side: Direction::Up,
        }
    }
}

impl PathOptions {
    pub fn new(rows: RowsCount,
               columns: ColumnsCount,
               max_paths: PathsCount,
               start: GridCoordinate,
               exit_side: Direction)
               -> PathOptions {
        PathOptions {
            rows,
            columns,
            max_paths,
            start,
            exit_side,
        }
    }

    /// Check every option, reporting the first invalid one.
    pub fn validate(&self) -> Result<()> {
        let RowsCount(rows) = self.rows;
        let ColumnsCount(columns) = self.columns;
        let PathsCount(max_paths) = self.max_paths;

        if rows == 0 {
            return Err(ErrorKind::InvalidRows(rows).into());
        }
        if columns == 0 {
            return Err(ErrorKind::InvalidColumns(columns).into());
        }
        if rows > MAX_DIMENSION || columns > MAX_DIMENSION {
            return Err(ErrorKind::GridTooLarge(rows, columns).into());
        }
        if max_paths == 0 {
            return Err(ErrorKind::InvalidMaxPaths(max_paths).into());
        }
        if self.start.row as usize >= rows {
            return Err(ErrorKind::InvalidStartRow(self.start.row, rows).into());
        }
        if self.start.column as usize >= columns {
            return Err(ErrorKind::InvalidStartColumn(self.start.column, columns).into());
        }
        if !self.exit_side.is_cardinal() {
            return Err(ErrorKind::NoneEndingSide.into());
        }
        Ok(())
    }
}
