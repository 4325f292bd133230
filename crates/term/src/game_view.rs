//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSnapshot, Piece};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{ColorTag, RunState, BOARD_HEIGHT, BOARD_WIDTH};

/// Side of the square "next piece" preview, in board cells
const PREVIEW_CELLS: u16 = 4;

const PLAYFIELD_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

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

/// Top-left corner of the playfield interior
#[derive(Debug, Clone, Copy)]
struct Origin {
    x: u16,
    y: u16,
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// Callers can reuse one framebuffer across frames; it is only resized
    /// when the viewport changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.fill(Cell::default());

        let board_w = (BOARD_WIDTH as u16) * self.cell_w;
        let board_h = (BOARD_HEIGHT as u16) * self.cell_h;
        let frame_w = board_w + 2;
        let frame_h = board_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;
        let origin = Origin {
            x: start_x + 1,
            y: start_y + 1,
        };

        let border = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
        draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        // Locked cells.
        for (y, row) in snap.board.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                match cell {
                    Some(color) => self.draw_block(fb, origin, x as i8, y as i8, *color),
                    None => self.draw_empty(fb, origin, x as u16, y as u16),
                }
            }
        }

        if let Some(current) = &snap.current {
            self.draw_piece(fb, origin, current);
        }

        self.draw_side_panel(fb, snap, viewport, start_x + frame_w + 2, start_y);

        let overlay = match snap.run_state {
            RunState::Idle => Some("PRESS ENTER"),
            RunState::Paused => Some("PAUSED"),
            RunState::GameOver => Some("GAME OVER"),
            RunState::Running => None,
        };
        if let Some(text) = overlay {
            draw_centered(fb, start_x, start_y + frame_h / 2, frame_w, text);
            if snap.run_state == RunState::GameOver {
                let y = start_y + frame_h / 2 + 1;
                draw_centered(fb, start_x, y, frame_w, "R TO RESTART");
            }
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Draw the piece's cells that are inside the board; rows above stay hidden.
    fn draw_piece(&self, fb: &mut FrameBuffer, origin: Origin, piece: &Piece) {
        for (x, y) in piece.board_cells() {
            if (0..BOARD_WIDTH as i8).contains(&x) && (0..BOARD_HEIGHT as i8).contains(&y) {
                self.draw_block(fb, origin, x, y, piece.color);
            }
        }
    }

    fn draw_block(&self, fb: &mut FrameBuffer, origin: Origin, x: i8, y: i8, color: ColorTag) {
        let style = CellStyle::new(color.into(), PLAYFIELD_BG).bold();
        self.fill_cell(fb, origin, x as u16, y as u16, '█', style);
    }

    fn draw_empty(&self, fb: &mut FrameBuffer, origin: Origin, x: u16, y: u16) {
        let style = CellStyle::new(Rgb::new(90, 90, 100), PLAYFIELD_BG).dim();
        self.fill_cell(fb, origin, x, y, '·', style);
    }

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        origin: Origin,
        x: u16,
        y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = origin.x + x * self.cell_w;
        let py = origin.y + y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        panel_x: u16,
        start_y: u16,
    ) {
        if panel_x.saturating_add(PREVIEW_CELLS * self.cell_w) > viewport.width {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);

        let mut y = start_y;
        for (name, n) in [
            ("SCORE", snap.score.score),
            ("LEVEL", snap.score.level),
            ("LINES", snap.score.lines),
        ] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y + 1, n, value);
            y += 3;
        }

        fb.put_str(panel_x, y, "NEXT", label);
        if let Some(next) = &snap.next {
            self.draw_preview(fb, panel_x, y + 1, next);
        }
    }

    /// Center the piece's bounding box inside a 4x4 preview box.
    fn draw_preview(&self, fb: &mut FrameBuffer, x: u16, y: u16, piece: &Piece) {
        let off_x = (PREVIEW_CELLS - piece.shape.width() as u16) / 2;
        let off_y = (PREVIEW_CELLS - piece.shape.height() as u16) / 2;
        let style = CellStyle::new(piece.color.into(), PANEL_BG).bold();
        for (dx, dy) in piece.shape.cells() {
            let px = x + (off_x + dx as u16) * self.cell_w;
            let py = y + (off_y + dy as u16) * self.cell_h;
            fb.fill_rect(px, py, self.cell_w, self.cell_h, '█', style);
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
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

fn draw_centered(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, text: &str) {
    let text_w = text.chars().count() as u16;
    let style = CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
    fb.put_str(x + w.saturating_sub(text_w) / 2, y, text, style);
}
