use super::{Cell, Grid, GridError};

/// Represents a pattern that can be placed on the grid
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub width: usize,
    pub height: usize,
    pub cells: Vec<(usize, usize)>, // Relative coordinates of alive cells
}

impl Pattern {
    /// Create a new pattern from alive cell coordinates
    pub fn new(name: &'static str, description: &'static str, cells: Vec<(usize, usize)>) -> Self {
        let width = cells.iter().map(|(x, _)| *x).max().unwrap_or(0) + 1;
        let height = cells.iter().map(|(_, y)| *y).max().unwrap_or(0) + 1;
        Self { name, description, width, height, cells }
    }

    /// Place pattern with its top-left corner at (x, y); wraps around the edges
    pub fn place_on(&self, grid: &mut Grid, x: isize, y: isize) -> Result<(), GridError> {
        for &(dx, dy) in &self.cells {
            grid.set_cell(Cell::Alive, x + dx as isize, y + dy as isize)?;
        }
        Ok(())
    }

    /// Place pattern centered on the grid
    pub fn place_centered(&self, grid: &mut Grid) -> Result<(), GridError> {
        let (w, h) = grid.dimensions();
        let x = (w as isize - self.width as isize) / 2;
        let y = (h as isize - self.height as isize) / 2;
        self.place_on(grid, x, y)
    }

    /// Whether exactly this pattern, and nothing else, is alive at (x, y)
    pub fn matches_at(&self, grid: &Grid, x: isize, y: isize) -> Result<bool, GridError> {
        if grid.alive_count() != self.cells.len() {
            return Ok(false);
        }
        for &(dx, dy) in &self.cells {
            if !grid.is_alive(x + dx as isize, y + dy as isize)? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

/// Classic Game of Life patterns library
pub mod presets {
    use super::*;

    /// Block - simple still life
    pub fn block() -> Pattern {
        Pattern::new(
            "Block",
            "Still life",
            vec![
                (0, 0), (1, 0),
                (0, 1), (1, 1),
            ],
        )
    }

    /// Blinker - period 2 oscillator, horizontal phase
    pub fn blinker() -> Pattern {
        Pattern::new(
            "Blinker",
            "Oscillator (period 2)",
            vec![(0, 0), (1, 0), (2, 0)],
        )
    }

    /// Toad - period 2 oscillator
    pub fn toad() -> Pattern {
        Pattern::new(
            "Toad",
            "Oscillator (period 2)",
            vec![
                (1, 0), (2, 0), (3, 0),
                (0, 1), (1, 1), (2, 1),
            ],
        )
    }

    /// Beacon - period 2 oscillator
    pub fn beacon() -> Pattern {
        Pattern::new(
            "Beacon",
            "Oscillator (period 2)",
            vec![
                (0, 0), (1, 0),
                (0, 1),
                (3, 2),
                (2, 3), (3, 3),
            ],
        )
    }

    /// Glider - simplest spaceship, moves one cell down-right every 4 generations
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            "Moves diagonally (period 4)",
            vec![
                (1, 0),
                (2, 1),
                (0, 2), (1, 2), (2, 2),
            ],
        )
    }

    /// Lightweight Spaceship (LWSS)
    pub fn lwss() -> Pattern {
        Pattern::new(
            "LWSS",
            "Lightweight Spaceship (period 4)",
            vec![
                (1, 0), (4, 0),
                (0, 1),
                (0, 2), (4, 2),
                (0, 3), (1, 3), (2, 3), (3, 3),
            ],
        )
    }

    /// R-pentomino - methuselah, settles after 1103 generations on an unbounded plane
    pub fn r_pentomino() -> Pattern {
        Pattern::new(
            "R-pentomino",
            "Methuselah",
            vec![
                (1, 0), (2, 0),
                (0, 1), (1, 1),
                (1, 2),
            ],
        )
    }

    /// Get all available patterns
    pub fn all_patterns() -> Vec<Pattern> {
        vec![
            block(),
            blinker(),
            toad(),
            beacon(),
            glider(),
            lwss(),
            r_pentomino(),
        ]
    }

    /// Look up a preset by name, ignoring case
    pub fn find(name: &str) -> Option<Pattern> {
        all_patterns()
            .into_iter()
            .find(|pattern| pattern.name.eq_ignore_ascii_case(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_bounds() {
        let glider = presets::glider();
        assert_eq!((glider.width, glider.height), (3, 3));
        let lwss = presets::lwss();
        assert_eq!((lwss.width, lwss.height), (5, 4));
    }

    #[test]
    fn test_place_wraps_around_edges() {
        let mut grid = Grid::new(6, 6);
        presets::block().place_on(&mut grid, 5, 5).unwrap();

        assert_eq!(grid.alive_count(), 4);
        for (x, y) in [(5, 5), (0, 5), (5, 0), (0, 0)] {
            assert!(grid.is_alive(x, y).unwrap());
        }
    }

    #[test]
    fn test_place_centered_and_match() {
        let mut grid = Grid::new(10, 10);
        let toad = presets::toad();
        toad.place_centered(&mut grid).unwrap();

        assert!(toad.matches_at(&grid, 3, 4).unwrap());
        assert!(!toad.matches_at(&grid, 4, 4).unwrap());
    }

    #[test]
    fn test_find_preset() {
        assert_eq!(presets::find("glider").map(|p| p.name), Some("Glider"));
        assert_eq!(presets::find("LWSS").map(|p| p.cells.len()), Some(9));
        assert!(presets::find("gun").is_none());
    }

    #[test]
    fn test_place_on_empty_grid_fails() {
        let mut grid = Grid::new(0, 0);
        assert!(presets::blinker().place_on(&mut grid, 0, 0).is_err());
    }
}
