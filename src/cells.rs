use std::convert::From;
use std::fmt;
use std::str::FromStr;

use smallvec::SmallVec;

use crate::errors::{Error, ErrorKind};
use crate::units::{ColumnIndex, RowIndex};

/// Row-major position of a cell. Row 0 lies on the `Up` edge of a grid and column 0 on the
/// `Left` edge.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct GridCoordinate {
    pub row: u32,
    pub column: u32,
}

#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug)]
pub enum Direction {
    None,
    Up,
    Down,
    Left,
    Right,
}

pub type DirectionSmallVec = SmallVec<[Direction; 4]>;

impl Direction {
    /// The four directions a walk can take, in the order moves are considered.
    pub const CARDINALS: [Direction; 4] =
        [Direction::Up, Direction::Right, Direction::Down, Direction::Left];

    /// The reverse of the direction, `None` is its own reverse.
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::None => Direction::None,
        }
    }

    #[inline]
    pub fn is_cardinal(self) -> bool {
        self != Direction::None
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match *self {
            Direction::None => "none",
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Direction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Direction, Error> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(Direction::None),
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            _ => Err(ErrorKind::UnrecognizedDirection(s.to_string()).into()),
        }
    }
}

impl GridCoordinate {
    pub fn new(row: u32, column: u32) -> GridCoordinate {
        GridCoordinate { row, column }
    }

    #[inline]
    pub fn from_row_column_indices(row_index: RowIndex, column_index: ColumnIndex) -> Self {
        let (RowIndex(row), ColumnIndex(column)) = (row_index, column_index);
        GridCoordinate::new(row as u32, column as u32)
    }

    #[inline]
    pub fn from_row_major_index(index: usize, row_length: usize) -> GridCoordinate {
        GridCoordinate::new((index / row_length) as u32, (index % row_length) as u32)
    }

    /// Creates a new coordinate offset 1 cell away in the given direction.
    /// Returns None if the coordinate is not representable, i.e. above row 0 or left of
    /// column 0.
    pub fn offset(self, direction: Direction) -> Option<GridCoordinate> {
        let (row, column) = (self.row, self.column);
        match direction {
            Direction::Up => {
                if row > 0 {
                    Some(GridCoordinate::new(row - 1, column))
                } else {
                    None
                }
            }
            Direction::Down => row.checked_add(1).map(|r| GridCoordinate::new(r, column)),
            Direction::Left => {
                if column > 0 {
                    Some(GridCoordinate::new(row, column - 1))
                } else {
                    None
                }
            }
            Direction::Right => column.checked_add(1).map(|c| GridCoordinate::new(row, c)),
            Direction::None => Some(self),
        }
    }
}

impl From<(u32, u32)> for GridCoordinate {
    fn from(row_column_pair: (u32, u32)) -> GridCoordinate {
        GridCoordinate::new(row_column_pair.0, row_column_pair.1)
    }
}
