use super::{Cell, GridError, NeighborMode};
use rand::Rng;
use tracing::debug;

/// Offsets of the eight surrounding positions, row by row
#[rustfmt::skip]
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0),           (1, 0),
    (-1, 1),  (0, 1),  (1, 1),
];

/// Grid stores the cells of a toroidal board in a flat row-major buffer.
///
/// Every coordinate is wrapped onto the board before indexing, so the left
/// neighbor of column 0 is the last column and likewise for rows. In
/// `Incremental` mode the grid also keeps a live-neighbor count per cell,
/// patched on every write that flips a cell's effective alive status.
#[derive(Clone, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    /// Live-neighbor count per cell, empty in `Recount` mode
    neighbors: Vec<u8>,
    mode: NeighborMode,
    alive_count: usize,
}

impl Grid {
    /// Create a new grid with all cells dead and incremental neighbor counts
    pub fn new(width: usize, height: usize) -> Self {
        Self::with_mode(width, height, NeighborMode::default())
    }

    pub fn with_mode(width: usize, height: usize, mode: NeighborMode) -> Self {
        let len = width * height;
        Self {
            width,
            height,
            cells: vec![Cell::Dead; len],
            neighbors: Self::empty_counts(mode, len),
            mode,
            alive_count: 0,
        }
    }

    fn empty_counts(mode: NeighborMode, len: usize) -> Vec<u8> {
        match mode {
            NeighborMode::Incremental => vec![0; len],
            NeighborMode::Recount => Vec::new(),
        }
    }

    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    pub const fn mode(&self) -> NeighborMode {
        self.mode
    }

    /// Number of cells whose effective status is alive
    pub const fn alive_count(&self) -> usize {
        self.alive_count
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Row-major view of every cell
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Wrap signed coordinates onto the torus and convert to a flat index
    fn wrap(&self, x: isize, y: isize) -> Result<usize, GridError> {
        if self.cells.is_empty() {
            return Err(GridError::OutOfRange {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        let nx = x.rem_euclid(self.width as isize) as usize;
        let ny = y.rem_euclid(self.height as isize) as usize;
        Ok(ny * self.width + nx)
    }

    pub fn cell_at(&self, x: isize, y: isize) -> Result<Cell, GridError> {
        self.wrap(x, y).map(|idx| self.cells[idx])
    }

    pub fn is_alive(&self, x: isize, y: isize) -> Result<bool, GridError> {
        self.cell_at(x, y).map(Cell::is_alive)
    }

    /// Write a cell, keeping the alive count and neighbor counts in step
    pub fn set_cell(&mut self, cell: Cell, x: isize, y: isize) -> Result<(), GridError> {
        let idx = self.wrap(x, y)?;
        self.set_index(idx, cell);
        Ok(())
    }

    pub fn neighbors_count(&self, x: isize, y: isize) -> Result<u8, GridError> {
        self.wrap(x, y).map(|idx| self.neighbors_at_index(idx))
    }

    pub(crate) fn cell_at_index(&self, idx: usize) -> Cell {
        self.cells[idx]
    }

    pub(crate) fn neighbors_at_index(&self, idx: usize) -> u8 {
        match self.mode {
            NeighborMode::Incremental => self.neighbors[idx],
            NeighborMode::Recount => self.count_live_neighbors(idx),
        }
    }

    pub(crate) fn set_index(&mut self, idx: usize, cell: Cell) {
        let was_alive = self.cells[idx].is_alive();
        self.cells[idx] = cell;

        let is_alive = cell.is_alive();
        if was_alive == is_alive {
            return;
        }

        if is_alive {
            self.alive_count += 1;
        } else {
            self.alive_count -= 1;
        }

        if self.mode == NeighborMode::Incremental {
            for n in self.neighbor_indices(idx) {
                if is_alive {
                    self.neighbors[n] += 1;
                } else {
                    self.neighbors[n] -= 1;
                }
            }
        }
    }

    /// Flat indices of the eight wrap-around neighbors of `idx`.
    /// On boards narrower or shorter than 3 the same index can appear more than once.
    fn neighbor_indices(&self, idx: usize) -> [usize; 8] {
        let w = self.width as isize;
        let h = self.height as isize;
        let x = (idx % self.width) as isize;
        let y = (idx / self.width) as isize;

        NEIGHBOR_OFFSETS.map(|(dx, dy)| {
            let nx = (x + dx).rem_euclid(w) as usize;
            let ny = (y + dy).rem_euclid(h) as usize;
            ny * self.width + nx
        })
    }

    /// Count live neighbors by summing the eight surrounding cells
    fn count_live_neighbors(&self, idx: usize) -> u8 {
        self.neighbor_indices(idx)
            .into_iter()
            .filter(|&n| self.cells[n].is_alive())
            .count() as u8
    }

    /// Rebuild the alive count and neighbor counts from the cells
    fn recount(&mut self) {
        self.alive_count = self.cells.iter().filter(|cell| cell.is_alive()).count();
        if self.mode == NeighborMode::Incremental {
            self.neighbors = (0..self.cells.len())
                .map(|idx| self.count_live_neighbors(idx))
                .collect();
        }
    }

    /// Resize the board, keeping cells that are still in bounds.
    /// New rows and columns are added dead on the high-index side; shrinking
    /// truncates from the same side.
    pub fn resize(&mut self, width: isize, height: isize) -> Result<(), GridError> {
        let new_width = usize::try_from(width)
            .map_err(|_| GridError::InvalidArgument { name: "width", value: width })?;
        let new_height = usize::try_from(height)
            .map_err(|_| GridError::InvalidArgument { name: "height", value: height })?;

        let mut cells = vec![Cell::Dead; new_width * new_height];
        let keep_width = new_width.min(self.width);
        for y in 0..new_height.min(self.height) {
            let src = y * self.width;
            let dst = y * new_width;
            cells[dst..dst + keep_width].copy_from_slice(&self.cells[src..src + keep_width]);
        }

        debug!(
            from_width = self.width,
            from_height = self.height,
            to_width = new_width,
            to_height = new_height,
            "resizing grid"
        );

        self.width = new_width;
        self.height = new_height;
        self.cells = cells;
        self.recount();
        Ok(())
    }

    /// Set every cell to dead
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Dead);
        self.neighbors.fill(0);
        self.alive_count = 0;
        debug!(width = self.width, height = self.height, "cleared grid");
    }

    /// Fill every cell alive or dead with equal probability
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for idx in 0..self.cells.len() {
            let cell = if rng.random_bool(0.5) { Cell::Alive } else { Cell::Dead };
            self.set_index(idx, cell);
        }
        debug!(alive = self.alive_count, "randomized grid");
    }

    /// Resolve every pending mark into its committed state
    pub fn commit(&mut self) {
        for idx in 0..self.cells.len() {
            let cell = self.cells[idx];
            if cell.is_pending() {
                self.set_index(idx, cell.resolve());
            }
        }
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        (0..self.height)
            .flat_map(move |y| (0..self.width).map(move |x| (x, y)))
            .map(|(x, y)| (x, y, self.cells[y * self.width + x]))
    }
}
