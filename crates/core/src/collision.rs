//! Collision detector - pure placement legality check
//!
//! Invoked before every accepted mutation of the active piece or board.

use crate::board::Board;
use crate::shapes::ShapeGrid;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// Test whether placing `shape` with its bounding-box origin at (x, y)
/// is illegal on `board`.
///
/// A placement is illegal when any occupied shape cell maps to a column
/// outside the board, a row at or below the floor, or an occupied board
/// cell. Rows above the visible grid (y < 0) are exempt from the
/// occupancy check so freshly spawned pieces may overhang the top edge.
pub fn collides(board: &Board, shape: &ShapeGrid, x: i8, y: i8) -> bool {
    for (dx, dy) in shape.offsets() {
        let px = x + dx;
        let py = y + dy;

        if px < 0 || px >= BOARD_WIDTH as i8 || py >= BOARD_HEIGHT as i8 {
            return true;
        }
        if py >= 0 && board.is_occupied(px, py) {
            return true;
        }
    }
    false
}
