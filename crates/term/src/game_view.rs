//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Glyph, Rgb};
use crate::types::Coord;

const BOARD_BG: Rgb = Rgb::new(60, 56, 52);
const TEXT: Rgb = Rgb::new(220, 220, 220);

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

/// Colour scheme for a tile value, following the classic palette.
pub fn tile_style(value: u32) -> CellStyle {
    let dark = Rgb::new(119, 110, 101);
    let light = Rgb::new(249, 246, 242);
    let (bg, fg) = match value {
        0 => (Rgb::new(80, 74, 68), Rgb::new(120, 112, 104)),
        2 => (Rgb::new(238, 228, 218), dark),
        4 => (Rgb::new(237, 224, 200), dark),
        8 => (Rgb::new(242, 177, 121), light),
        16 => (Rgb::new(245, 149, 99), light),
        32 => (Rgb::new(246, 124, 95), light),
        64 => (Rgb::new(246, 94, 59), light),
        128 => (Rgb::new(237, 207, 114), light),
        256 => (Rgb::new(237, 204, 97), light),
        512 => (Rgb::new(237, 200, 80), light),
        1024 => (Rgb::new(237, 197, 63), light),
        2048 => (Rgb::new(237, 194, 46), light),
        _ => (Rgb::new(60, 58, 50), light),
    };
    CellStyle::new(fg, bg).bold()
}

/// A lightweight terminal renderer for the 2048 board.
pub struct GameView {
    /// Tile width in terminal columns.
    cell_w: u16,
    /// Tile height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 7x3 keeps tiles roughly square on typical terminal fonts and fits
        // six digits.
        Self {
            cell_w: 7,
            cell_h: 3,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Outer size of the bordered board for a snapshot.
    pub fn frame_size(&self, snap: &GameSnapshot) -> (u16, u16) {
        let w = (snap.cols as u16) * (self.cell_w + 1) + 1;
        let h = (snap.rows as u16) * (self.cell_h + 1) + 1;
        (w, h)
    }

    /// Render the board, side panel and an optional status line into `fb`.
    ///
    /// Callers can reuse one framebuffer across frames; it is only resized
    /// when the viewport changes.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        status: Option<&str>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Glyph::default());

        let (frame_w, frame_h) = self.frame_size(snap);
        let panel_w = 16;
        let total_w = frame_w + 2 + panel_w;
        let start_x = viewport.width.saturating_sub(total_w) / 2;
        // Leave one row under the board for the status line.
        let start_y = viewport.height.saturating_sub(frame_h + 1) / 2;

        // Board background doubles as the grid lines between tiles.
        fb.fill_rect(start_x, start_y, frame_w, frame_h, ' ', CellStyle::new(TEXT, BOARD_BG));

        for row in 0..snap.rows {
            for col in 0..snap.cols {
                let value = snap.value_at(Coord::new(row, col)).unwrap_or(0);
                self.draw_tile(fb, start_x, start_y, row as u16, col as u16, value);
            }
        }

        self.draw_side_panel(fb, snap, viewport, start_x + frame_w + 2, start_y);

        if let Some(text) = status {
            let style = CellStyle::new(Rgb::new(240, 200, 120), Rgb::new(0, 0, 0));
            let status_y = start_y.saturating_add(frame_h);
            fb.put_str_centered(start_x, status_y, frame_w, text, style);
        }

        if snap.game_over {
            let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
            let mid_y = start_y.saturating_add(frame_h / 2);
            fb.put_str_centered(start_x, mid_y, frame_w, " GAME OVER ", style);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        snap: &GameSnapshot,
        status: Option<&str>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, status, viewport, &mut fb);
        fb
    }

    fn draw_tile(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        row: u16,
        col: u16,
        value: u32,
    ) {
        let px = start_x + 1 + col * (self.cell_w + 1);
        let py = start_y + 1 + row * (self.cell_h + 1);
        let style = tile_style(value);

        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);
        let mid = py + self.cell_h / 2;
        if value == 0 {
            fb.put_str_centered(px, mid, self.cell_w, "·", style);
        } else {
            fb.put_str_centered(px, mid, self.cell_w, &value.to_string(), style);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        panel_x: u16,
        start_y: u16,
    ) {
        if panel_x.saturating_add(8) > viewport.width {
            return;
        }

        let label = CellStyle::new(TEXT, Rgb::new(0, 0, 0)).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        let mut y = start_y;
        let rows = [
            ("SCORE", snap.score),
            ("MOVES", snap.moves),
            ("BEST", snap.max_tile),
        ];
        for (name, v) in rows {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y.saturating_add(1), v, value);
            y = y.saturating_add(3);
        }

        for line in ["arrows/hjkl", "r  restart", "q  quit"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, value);
            y = y.saturating_add(1);
        }
    }
}
