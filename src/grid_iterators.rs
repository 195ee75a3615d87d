use std::fmt;

use crate::cells::GridCoordinate;
use crate::units::{ColumnsCount, RowsCount};

/// Row-major iteration over every coordinate of a grid.
#[derive(Copy, Clone)]
pub struct CellIter {
    row_length: usize,
    current_cell_number: usize,
    cells_count: usize,
}

impl CellIter {
    pub(crate) fn new(rows: RowsCount, columns: ColumnsCount) -> CellIter {
        CellIter {
            row_length: columns.0,
            current_cell_number: 0,
            cells_count: rows.0 * columns.0,
        }
    }
}

impl fmt::Debug for CellIter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f,
               "CellIter :: current_cell_number: {:?}, cells_count: {:?}",
               self.current_cell_number,
               self.cells_count)
    }
}

impl ExactSizeIterator for CellIter {} // default impl using size_hint()
impl Iterator for CellIter {
    type Item = GridCoordinate;
    fn next(&mut self) -> Option<Self::Item> {
        if self.current_cell_number < self.cells_count {
            let coord = GridCoordinate::from_row_major_index(self.current_cell_number,
                                                             self.row_length);
            self.current_cell_number += 1;
            Some(coord)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let lower_bound = self.cells_count - self.current_cell_number;
        let upper_bound = lower_bound;
        (lower_bound, Some(upper_bound))
    }
}

/// Iteration over the grid one whole row at a time, top row first.
#[derive(Debug, Copy, Clone)]
pub struct RowIter {
    current_row: usize,
    rows_count: usize,
    row_length: usize,
}

impl RowIter {
    pub(crate) fn new(rows: RowsCount, columns: ColumnsCount) -> RowIter {
        RowIter {
            current_row: 0,
            rows_count: rows.0,
            row_length: columns.0,
        }
    }
}

impl ExactSizeIterator for RowIter {}
impl Iterator for RowIter {
    type Item = Vec<GridCoordinate>;
    fn next(&mut self) -> Option<Self::Item> {
        if self.current_row < self.rows_count {
            let row = self.current_row as u32;
            let coords = (0..self.row_length)
                .map(|column| GridCoordinate::new(row, column as u32))
                .collect();
            self.current_row += 1;
            Some(coords)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.rows_count - self.current_row;
        (remaining, Some(remaining))
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn cell_iter() {
        let iter = CellIter::new(RowsCount(2), ColumnsCount(2));
        assert_eq!(iter.len(), 4);
        assert_eq!(iter.collect::<Vec<GridCoordinate>>(),
                   &[GridCoordinate::new(0, 0),
                     GridCoordinate::new(0, 1),
                     GridCoordinate::new(1, 0),
                     GridCoordinate::new(1, 1)]);
    }

    #[test]
    fn row_iter() {
        let iter = RowIter::new(RowsCount(2), ColumnsCount(3));
        assert_eq!(iter.len(), 2);
        assert_eq!(iter.collect::<Vec<Vec<GridCoordinate>>>(),
                   &[vec![GridCoordinate::new(0, 0),
                          GridCoordinate::new(0, 1),
                          GridCoordinate::new(0, 2)],
                     vec![GridCoordinate::new(1, 0),
                          GridCoordinate::new(1, 1),
                          GridCoordinate::new(1, 2)]]);
    }
}
