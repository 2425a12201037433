//! Plain-text grid snapshots.
//!
//! One line per row, `1` for an alive cell and `0` for a dead one, with no
//! separators. Every row must have the same length. A snapshot is decoded and
//! validated in full before anything touches the target grid.

use crate::domain::{Cell, Grid, GridError};
use std::{fs, io, path::Path};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("snapshot has no cells")]
    Empty,
    #[error("line {line} has {found} cells, expected {expected}")]
    RaggedRow {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("unexpected character {found:?} at line {line}, column {column}")]
    InvalidCharacter {
        line: usize,
        column: usize,
        found: char,
    },
}

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("malformed snapshot: {0}")]
    Format(#[from] FormatError),
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error("snapshot i/o failed: {0}")]
    Io(#[from] io::Error),
}

/// A decoded, validated rectangle of alive/dead cells
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    width: usize,
    height: usize,
    alive: Vec<bool>,
}

impl Snapshot {
    /// Capture the effective alive status of every cell
    pub fn from_grid(grid: &Grid) -> Self {
        let (width, height) = grid.dimensions();
        Self {
            width,
            height,
            alive: grid.cells().iter().map(|cell| cell.is_alive()).collect(),
        }
    }

    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn is_alive(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height && self.alive[y * self.width + x]
    }

    pub fn alive_count(&self) -> usize {
        self.alive.iter().filter(|&&alive| alive).count()
    }

    /// Resize `grid` to the snapshot and replace its contents
    pub fn apply_to(&self, grid: &mut Grid) -> Result<(), SnapshotError> {
        grid.resize(self.width as isize, self.height as isize)?;
        grid.clear();
        for y in 0..self.height {
            for x in 0..self.width {
                if self.alive[y * self.width + x] {
                    grid.set_cell(Cell::Alive, x as isize, y as isize)?;
                }
            }
        }
        Ok(())
    }
}

pub fn encode(grid: &Grid) -> String {
    let (width, height) = grid.dimensions();
    let mut text = String::with_capacity((width + 1) * height);
    for (i, cell) in grid.cells().iter().enumerate() {
        text.push(if cell.is_alive() { '1' } else { '0' });
        if (i + 1) % width == 0 {
            text.push('\n');
        }
    }
    text
}

pub fn decode(text: &str) -> Result<Snapshot, FormatError> {
    let mut width = None;
    let mut height = 0;
    let mut alive = Vec::new();

    for (row, line) in text.lines().enumerate() {
        let mut found = 0;
        for (column, ch) in line.chars().enumerate() {
            match ch {
                '0' => alive.push(false),
                '1' => alive.push(true),
                other => {
                    return Err(FormatError::InvalidCharacter {
                        line: row + 1,
                        column: column + 1,
                        found: other,
                    });
                }
            }
            found += 1;
        }

        let expected = *width.get_or_insert(found);
        if found != expected {
            return Err(FormatError::RaggedRow {
                line: row + 1,
                expected,
                found,
            });
        }
        height += 1;
    }

    match width {
        Some(width) if width > 0 => Ok(Snapshot {
            width,
            height,
            alive,
        }),
        _ => Err(FormatError::Empty),
    }
}

/// Decode `text` and load it into `grid`; on a format error the grid is left untouched
pub fn load_into(grid: &mut Grid, text: &str) -> Result<(), SnapshotError> {
    let snapshot = decode(text)?;
    snapshot.apply_to(grid)
}

pub fn read_file(path: impl AsRef<Path>) -> Result<Snapshot, SnapshotError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let snapshot = decode(&text)?;
    info!(
        path = %path.display(),
        width = snapshot.width,
        height = snapshot.height,
        "loaded snapshot"
    );
    Ok(snapshot)
}

pub fn write_file(path: impl AsRef<Path>, grid: &Grid) -> Result<(), SnapshotError> {
    let path = path.as_ref();
    fs::write(path, encode(grid))?;
    debug!(path = %path.display(), alive = grid.alive_count(), "saved snapshot");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::presets;

    #[test]
    fn test_encode_rows() {
        let mut grid = Grid::new(4, 3);
        grid.set_cell(Cell::Alive, 0, 0).unwrap();
        grid.set_cell(Cell::Alive, 3, 1).unwrap();
        grid.set_cell(Cell::PendingDead, 3, 1).unwrap();
        grid.set_cell(Cell::PendingAlive, 1, 2).unwrap();

        assert_eq!(encode(&grid), "1000\n0001\n0000\n");
    }

    #[test]
    fn test_decode_and_apply() {
        let snapshot = decode("010\r\n010\n010\n").unwrap();
        assert_eq!(snapshot.dimensions(), (3, 3));
        assert_eq!(snapshot.alive_count(), 3);
        assert!(snapshot.is_alive(1, 2));
        assert!(!snapshot.is_alive(5, 0));

        let mut grid = Grid::new(10, 10);
        presets::block().place_on(&mut grid, 6, 6).unwrap();
        snapshot.apply_to(&mut grid).unwrap();

        assert_eq!(grid.dimensions(), (3, 3));
        assert_eq!(grid.alive_count(), 3);
        assert_eq!(grid.neighbors_count(0, 1).unwrap(), 3);
        assert_eq!(Snapshot::from_grid(&grid), snapshot);
    }

    #[test]
    fn test_decode_rejects_empty() {
        assert_eq!(decode(""), Err(FormatError::Empty));
        assert_eq!(decode("\n"), Err(FormatError::Empty));
    }

    #[test]
    fn test_decode_rejects_ragged_rows() {
        assert_eq!(
            decode("0101\n011\n0000\n"),
            Err(FormatError::RaggedRow {
                line: 2,
                expected: 4,
                found: 3
            })
        );
        assert_eq!(
            decode("01\n\n01\n"),
            Err(FormatError::RaggedRow {
                line: 2,
                expected: 2,
                found: 0
            })
        );
    }

    #[test]
    fn test_decode_rejects_other_characters() {
        assert_eq!(
            decode("010\n0x0\n"),
            Err(FormatError::InvalidCharacter {
                line: 2,
                column: 2,
                found: 'x'
            })
        );
    }

    #[test]
    fn test_failed_load_leaves_grid_untouched() {
        let mut grid = Grid::new(5, 5);
        presets::blinker().place_on(&mut grid, 1, 2).unwrap();
        let before = grid.cells().to_vec();

        let err = load_into(&mut grid, "11111\n111\n").unwrap_err();
        assert!(matches!(err, SnapshotError::Format(FormatError::RaggedRow { .. })));
        assert_eq!(grid.dimensions(), (5, 5));
        assert_eq!(grid.cells(), before.as_slice());
        assert_eq!(grid.alive_count(), 3);
    }

    #[test]
    fn test_file_round_trip() {
        let path = std::env::temp_dir().join(format!("toroidal_life_{}.txt", std::process::id()));
        let mut grid = Grid::new(7, 5);
        presets::glider().place_on(&mut grid, 2, 1).unwrap();

        write_file(&path, &grid).unwrap();
        let snapshot = read_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        let mut loaded = Grid::new(1, 1);
        snapshot.apply_to(&mut loaded).unwrap();
        assert_eq!(loaded.cells(), grid.cells());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = read_file("/nonexistent/toroidal_life/snapshot.txt").unwrap_err();
        assert!(matches!(err, SnapshotError::Io(_)));
    }
}
