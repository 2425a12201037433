//! Strategy for answering neighbor-count queries.
//!
//! Both modes give the same answers; they differ only in where the cost is
//! paid. `Incremental` keeps a side array up to date on every write, so a
//! generation touches only the cells that changed. `Recount` keeps no extra
//! state and sums the eight neighbors on every query.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum NeighborMode {
    /// Per-cell counts maintained on every effective status change
    #[default]
    Incremental,
    /// Counts summed from the eight neighbors on demand
    Recount,
}

impl NeighborMode {
    pub fn all() -> Vec<NeighborMode> {
        vec![NeighborMode::Incremental, NeighborMode::Recount]
    }

    /// Display name, also accepted by `from_name`
    pub fn name(&self) -> &'static str {
        match self {
            NeighborMode::Incremental => "incremental",
            NeighborMode::Recount => "recount",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            NeighborMode::Incremental => "Side array of counts, O(changed cells x 8) per tick",
            NeighborMode::Recount => "No side array, O(cells x 8) per tick",
        }
    }

    pub fn from_name(name: &str) -> Option<NeighborMode> {
        Self::all()
            .into_iter()
            .find(|mode| mode.name().eq_ignore_ascii_case(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_modes_returns_two() {
        assert_eq!(NeighborMode::all().len(), 2);
    }

    #[test]
    fn test_default_is_incremental() {
        assert_eq!(NeighborMode::default(), NeighborMode::Incremental);
    }

    #[test]
    fn test_names_round_trip() {
        for mode in NeighborMode::all() {
            assert_eq!(NeighborMode::from_name(mode.name()), Some(mode));
        }
        assert_eq!(NeighborMode::from_name("RECOUNT"), Some(NeighborMode::Recount));
        assert_eq!(NeighborMode::from_name("simd"), None);
    }
}
