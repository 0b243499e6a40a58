//! Shape catalog - canonical piece geometries and display colors
//!
//! Each piece is a boolean matrix over its bounding box. Shapes are data:
//! rotation never mutates a grid, it returns a new one. The catalog holds
//! the seven canonical spawn orientations; every other orientation is
//! reached through [`ShapeGrid::rotated`].

use arrayvec::ArrayVec;

use crate::types::PieceKind;

/// Maximum bounding box edge (the I piece spans four cells)
pub const MAX_SHAPE_DIM: usize = 4;

/// Occupied-cell matrix for one piece orientation.
///
/// Stored in a fixed 4x4 backing array; only `width` x `height` is
/// meaningful. Copy and allocation-free.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeGrid {
    width: u8,
    height: u8,
    cells: [[bool; MAX_SHAPE_DIM]; MAX_SHAPE_DIM],
}

impl ShapeGrid {
    fn from_rows(rows: &[&[u8]]) -> Self {
        let height = rows.len() as u8;
        let width = rows[0].len() as u8;
        let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for (y, row) in rows.iter().enumerate() {
            for (x, &v) in row.iter().enumerate() {
                cells[y][x] = v != 0;
            }
        }
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Whether the cell at (x, y) within the bounding box is occupied
    pub fn filled(&self, x: u8, y: u8) -> bool {
        x < self.width && y < self.height && self.cells[y as usize][x as usize]
    }

    /// Rotate 90 degrees clockwise (transpose + row reversal).
    ///
    /// The bounding box dimensions swap; applying this four times yields
    /// the original grid.
    pub fn rotated(&self) -> Self {
        let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for y in 0..self.width as usize {
            for x in 0..self.height as usize {
                cells[y][x] = self.cells[self.height as usize - 1 - x][y];
            }
        }
        Self {
            width: self.height,
            height: self.width,
            cells,
        }
    }

    /// Offsets of the occupied cells relative to the bounding box origin.
    ///
    /// Every tetromino has exactly four occupied cells.
    pub fn offsets(&self) -> ArrayVec<(i8, i8), 4> {
        let mut out = ArrayVec::new();
        for y in 0..self.height {
            for x in 0..self.width {
                if self.cells[y as usize][x as usize] {
                    out.push((x as i8, y as i8));
                }
            }
        }
        out
    }
}

/// Canonical spawn orientation for a piece kind
pub fn spawn_grid(kind: PieceKind) -> ShapeGrid {
    match kind {
        PieceKind::I => ShapeGrid::from_rows(&[&[1, 1, 1, 1]]),
        PieceKind::O => ShapeGrid::from_rows(&[&[1, 1], &[1, 1]]),
        PieceKind::T => ShapeGrid::from_rows(&[&[0, 1, 0], &[1, 1, 1]]),
        PieceKind::S => ShapeGrid::from_rows(&[&[0, 1, 1], &[1, 1, 0]]),
        PieceKind::Z => ShapeGrid::from_rows(&[&[1, 1, 0], &[0, 1, 1]]),
        PieceKind::J => ShapeGrid::from_rows(&[&[1, 0, 0], &[1, 1, 1]]),
        PieceKind::L => ShapeGrid::from_rows(&[&[0, 0, 1], &[1, 1, 1]]),
    }
}

/// Display color for a piece kind (24-bit RGB)
pub fn color(kind: PieceKind) -> (u8, u8, u8) {
    match kind {
        PieceKind::I => (0, 240, 240),
        PieceKind::O => (240, 240, 0),
        PieceKind::T => (160, 0, 240),
        PieceKind::S => (0, 240, 0),
        PieceKind::Z => (240, 0, 0),
        PieceKind::J => (0, 0, 240),
        PieceKind::L => (240, 160, 0),
    }
}
