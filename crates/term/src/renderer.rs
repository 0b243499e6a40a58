//! TerminalRenderer: flushes framebuffers to the terminal.
//!
//! The renderer keeps the previously presented frame and emits only the
//! changed cell runs of each new one; the first frame after `enter` or
//! `invalidate` repaints everything. Styles are set lazily so a run of
//! same-styled cells costs one escape sequence.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    prev: FrameBuffer,
    force_full: bool,
    queue: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            prev: FrameBuffer::new(0, 0),
            force_full: true,
            queue: Vec::with_capacity(64 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.queue.clear();
        self.queue.queue(terminal::EnterAlternateScreen)?;
        self.queue.queue(cursor::Hide)?;
        self.queue.queue(terminal::DisableLineWrap)?;
        self.flush_queue()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.queue.clear();
        self.queue.queue(ResetColor)?;
        self.queue.queue(SetAttribute(Attribute::Reset))?;
        self.queue.queue(terminal::EnableLineWrap)?;
        self.queue.queue(cursor::Show)?;
        self.queue.queue(terminal::LeaveAlternateScreen)?;
        self.flush_queue()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next present to repaint everything.
    ///
    /// Useful on terminal resize events.
    pub fn invalidate(&mut self) {
        self.force_full = true;
    }

    /// Present a frame, swapping it into the renderer.
    ///
    /// Callers keep one `FrameBuffer` and pass it in every frame; after
    /// the call it holds the previous frame's storage, ready for reuse
    /// without cloning.
    pub fn present(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        let full = self.force_full
            || self.prev.width() != fb.width()
            || self.prev.height() != fb.height();

        self.queue.clear();
        if full {
            encode_frame(None, fb, &mut self.queue)?;
            self.prev.resize(fb.width(), fb.height());
            self.force_full = false;
        } else {
            encode_frame(Some(&self.prev), fb, &mut self.queue)?;
        }
        self.flush_queue()?;

        std::mem::swap(&mut self.prev, fb);
        Ok(())
    }

    fn flush_queue(&mut self) -> Result<()> {
        self.stdout.write_all(&self.queue)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode a frame as terminal commands into `out`.
///
/// With `prev` the output covers only the cell runs that changed since
/// that frame (the two buffers must have equal dimensions); without it
/// the screen is cleared and the whole frame painted.
pub fn encode_frame(
    prev: Option<&FrameBuffer>,
    next: &FrameBuffer,
    out: &mut Vec<u8>,
) -> Result<()> {
    if prev.is_none() {
        out.queue(terminal::Clear(terminal::ClearType::All))?;
    }

    let mut style = StyleTracker::default();
    for y in 0..next.height() {
        let next_row = next.row(y);
        let prev_row = prev.map(|p| p.row(y));
        let w = next_row.len();

        let mut x = 0;
        while x < w {
            if unchanged(prev_row, next_row, x) {
                x += 1;
                continue;
            }
            let start = x;
            while x < w && !unchanged(prev_row, next_row, x) {
                x += 1;
            }

            out.queue(cursor::MoveTo(start as u16, y))?;
            for cell in &next_row[start..x] {
                style.apply(out, cell.style)?;
                out.queue(Print(cell.ch))?;
            }
        }
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

#[inline]
fn unchanged(prev_row: Option<&[crate::fb::Cell]>, next_row: &[crate::fb::Cell], x: usize) -> bool {
    match prev_row {
        Some(prev_row) => prev_row[x] == next_row[x],
        // Full repaint: every cell counts as changed.
        None => false,
    }
}

/// Emits style escape sequences only when the style actually changes.
#[derive(Default)]
struct StyleTracker {
    current: Option<CellStyle>,
}

impl StyleTracker {
    fn apply(&mut self, out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
        if self.current == Some(style) {
            return Ok(());
        }
        out.queue(SetAttribute(Attribute::Reset))?;
        out.queue(SetForegroundColor(to_color(style.fg)))?;
        out.queue(SetBackgroundColor(to_color(style.bg)))?;
        if style.bold {
            out.queue(SetAttribute(Attribute::Bold))?;
        }
        if style.dim {
            out.queue(SetAttribute(Attribute::Dim))?;
        }
        self.current = Some(style);
        Ok(())
    }
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
