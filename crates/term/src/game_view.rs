//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::shapes;
use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{GameStatus, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

const PANEL_BG: Rgb = Rgb::new(0, 0, 0);
const BOARD_BG: Rgb = Rgb::new(30, 30, 40);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// A lightweight terminal renderer for the game.
///
/// The board frame is centered in the viewport with the info panel to
/// its right.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default());

        let board_px_w = (BOARD_WIDTH as u16) * self.cell_w;
        let board_px_h = (BOARD_HEIGHT as u16) * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        // Background for play area.
        let bg = CellStyle::colored(Rgb::new(80, 80, 90), BOARD_BG);
        fb.fill_rect(start_x + 1, start_y + 1, board_px_w, board_px_h, ' ', bg);

        // Border.
        let border = CellStyle::colored(Rgb::new(200, 200, 200), PANEL_BG);
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        // Locked board cells.
        for y in 0..BOARD_HEIGHT as u16 {
            for x in 0..BOARD_WIDTH as u16 {
                let cell = snap.board[y as usize][x as usize];
                if let Some(kind) = PieceKind::from_index(cell) {
                    self.draw_board_cell(fb, start_x, start_y, x, y, kind);
                } else {
                    // Optional grid dot.
                    let dot = CellStyle::colored(Rgb::new(90, 90, 100), BOARD_BG).dim();
                    self.fill_cell_rect(fb, start_x, start_y, x, y, '·', dot);
                }
            }
        }

        // Landing preview, shown only while the ghost power-up runs.
        if snap.ghost_visible {
            if let (Some(active), Some(ghost_y)) = (snap.active, snap.ghost_y) {
                let ghost = CellStyle::colored(Rgb::new(140, 140, 140), BOARD_BG).dim();
                for (dx, dy) in active.shape.offsets() {
                    let x = active.x + dx;
                    let y = ghost_y + dy;
                    if x >= 0 && x < BOARD_WIDTH as i8 && y >= 0 && y < BOARD_HEIGHT as i8 {
                        self.fill_cell_rect(fb, start_x, start_y, x as u16, y as u16, '░', ghost);
                    }
                }
            }
        }

        // Active piece.
        if let Some(active) = snap.active {
            for (dx, dy) in active.shape.offsets() {
                let x = active.x + dx;
                let y = active.y + dy;
                if x >= 0 && x < BOARD_WIDTH as i8 && y >= 0 && y < BOARD_HEIGHT as i8 {
                    self.draw_board_cell(fb, start_x, start_y, x as u16, y as u16, active.kind);
                }
            }
        }

        // Side panel (score/next/power-ups).
        self.draw_side_panel(fb, snap, viewport, start_x, start_y, frame_w);

        // Overlays.
        match snap.status {
            GameStatus::NotStarted => {
                self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "PRESS S TO START");
            }
            GameStatus::Paused => {
                self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "PAUSED");
            }
            GameStatus::GameOver => {
                self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
            }
            GameStatus::Playing => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_board_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        x: u16,
        y: u16,
        kind: PieceKind,
    ) {
        let (r, g, b) = shapes::color(kind);
        let style = CellStyle::colored(Rgb::new(r, g, b), BOARD_BG).bold();
        self.fill_cell_rect(fb, start_x, start_y, x, y, '█', style);
    }

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = start_x + 1 + cell_x * self.cell_w;
        let py = start_y + 1 + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 12 {
            return;
        }

        let label = CellStyle::colored(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::colored(Rgb::new(200, 200, 200), PANEL_BG);
        let dim = value.dim();

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.score, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "HIGH", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.high_score, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "LEVEL", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.level, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "LINES", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.lines, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "COMBO", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.combo, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "NEXT", label);
        y = y.saturating_add(1);
        y = self.draw_next_preview(fb, snap.next, panel_x, y, viewport);
        y = y.saturating_add(1);

        fb.put_str(panel_x, y, "POWER-UPS", label);
        y = y.saturating_add(1);
        for (i, slot) in snap.power_up_slots.iter().enumerate() {
            if y >= viewport.height {
                break;
            }
            fb.put_u32(panel_x, y, (i as u32) + 1, dim);
            fb.put_char(panel_x + 1, y, ':', dim);
            match slot {
                Some(kind) => fb.put_str(panel_x + 3, y, kind.as_str(), value),
                None => fb.put_str(panel_x + 3, y, "-", dim),
            }
            y = y.saturating_add(1);
        }

        if let Some(kind) = snap.active_power_up {
            y = y.saturating_add(1);
            fb.put_str(panel_x, y, "ACTIVE", label);
            y = y.saturating_add(1);
            fb.put_str(panel_x, y, kind.as_str(), value);
        }
    }

    /// Draw the next piece as a mini shape grid; returns the row after it.
    fn draw_next_preview(
        &self,
        fb: &mut FrameBuffer,
        next: PieceKind,
        panel_x: u16,
        y: u16,
        viewport: Viewport,
    ) -> u16 {
        let grid = shapes::spawn_grid(next);
        let (r, g, b) = shapes::color(next);
        let style = CellStyle::colored(Rgb::new(r, g, b), PANEL_BG).bold();

        for row in 0..grid.height() {
            let py = y.saturating_add(row as u16);
            if py >= viewport.height {
                break;
            }
            for col in 0..grid.width() {
                if grid.filled(col, row) {
                    let px = panel_x + (col as u16) * 2;
                    fb.put_char(px, py, '█', style);
                    fb.put_char(px + 1, py, '█', style);
                }
            }
        }
        y.saturating_add(grid.height() as u16)
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle::colored(Rgb::new(255, 255, 255), PANEL_BG).bold();
        fb.put_str(x, mid_y, text, style);
    }
}
