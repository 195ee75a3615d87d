#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct RowsCount(pub usize);
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct ColumnsCount(pub usize);

#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash, Ord, PartialOrd)]
pub struct RowIndex(pub usize);
#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash, Ord, PartialOrd)]
pub struct ColumnIndex(pub usize);

#[derive(Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct PathsCount(pub usize);

/// Identifier of the path owning a grid node. The start node is owned by no path and carries
/// the reserved id `-1`.
#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash, Ord, PartialOrd)]
pub struct PathId(pub i32);

impl PathId {
    pub const START: PathId = PathId(-1);

    /// The id following this one, None once ids run out.
    #[inline]
    pub fn checked_next(self) -> Option<PathId> {
        self.0.checked_add(1).map(PathId)
    }
}
