use crate::cells::Direction;
use crate::units::PathId;

#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub enum NodeRole {
    /// The single cell every path begins from.
    Start,
    /// A committed cell of a path.
    Normal,
    /// A dead end marked while backtracking, only ever present during a path attempt.
    Temporary,
}

/// The content of an occupied grid cell.
///
/// `direction_to_next` points at the cell the path continues into (or off the grid through the
/// exit edge), `direction_to_previous` points back at the cell the path came from.
#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub struct PathNode {
    pub direction_to_next: Direction,
    pub direction_to_previous: Direction,
    pub path_id: PathId,
    pub role: NodeRole,
}

impl PathNode {
    pub fn start() -> PathNode {
        PathNode {
            direction_to_next: Direction::None,
            direction_to_previous: Direction::None,
            path_id: PathId::START,
            role: NodeRole::Start,
        }
    }

    pub fn normal(direction_to_next: Direction,
                  direction_to_previous: Direction,
                  path_id: PathId)
                  -> PathNode {
        PathNode {
            direction_to_next,
            direction_to_previous,
            path_id,
            role: NodeRole::Normal,
        }
    }

    pub fn temporary(path_id: PathId) -> PathNode {
        PathNode {
            direction_to_next: Direction::None,
            direction_to_previous: Direction::None,
            path_id,
            role: NodeRole::Temporary,
        }
    }

    #[inline]
    pub fn is_start(&self) -> bool {
        self.role == NodeRole::Start
    }

    #[inline]
    pub fn is_temporary(&self) -> bool {
        self.role == NodeRole::Temporary
    }
}
