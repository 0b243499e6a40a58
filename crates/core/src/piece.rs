//! Active piece - the tetromino under player control

use crate::shapes::{spawn_grid, ShapeGrid};
use crate::types::{PieceKind, BOARD_WIDTH};

/// The falling piece: a shape matrix plus its top-left offset in board
/// coordinates. Move and rotate build candidates; the game state accepts
/// a candidate only after collision validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub shape: ShapeGrid,
    pub x: i8,
    pub y: i8,
}

impl ActivePiece {
    /// Create a piece at its spawn position: horizontally centered on
    /// the board, bounding box top at row 0.
    pub fn spawn(kind: PieceKind) -> Self {
        let shape = spawn_grid(kind);
        let x = (BOARD_WIDTH / 2) as i8 - (shape.width() / 2) as i8;
        Self {
            kind,
            shape,
            x,
            y: 0,
        }
    }

    /// Candidate shifted by (dx, dy)
    pub fn shifted(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Candidate rotated 90 degrees clockwise (position unchanged)
    pub fn rotated(&self) -> Self {
        Self {
            shape: self.shape.rotated(),
            ..*self
        }
    }
}
