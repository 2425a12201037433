/// Cell represents the state of one position on the grid.
///
/// `PendingAlive` and `PendingDead` are marks left by a generation step that
/// have not been committed yet. A pending cell keeps its old effective status
/// until the grid commits it, so every cell in a generation is evaluated
/// against the same snapshot.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
    PendingAlive,
    PendingDead,
}

impl Cell {
    /// Effective alive status: `Alive` or `PendingDead`
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive | Cell::PendingDead)
    }

    pub const fn is_pending(self) -> bool {
        matches!(self, Cell::PendingAlive | Cell::PendingDead)
    }

    /// Committed state of a pending mark
    pub const fn resolve(self) -> Self {
        match self {
            Cell::PendingAlive => Cell::Alive,
            Cell::PendingDead => Cell::Dead,
            other => other,
        }
    }

    /// Conway's rules (B3/S23) expressed as a mark:
    /// 1. Live cell with fewer than 2 or more than 3 neighbors is marked to die
    /// 2. Dead cell with exactly 3 neighbors is marked to be born
    /// 3. Anything else is left alone (`None`)
    pub const fn transition(self, neighbors: u8) -> Option<Self> {
        match (self.is_alive(), neighbors) {
            (true, 2 | 3) => None,
            (true, _) => Some(Cell::PendingDead),
            (false, 3) => Some(Cell::PendingAlive),
            (false, _) => None,
        }
    }
}
