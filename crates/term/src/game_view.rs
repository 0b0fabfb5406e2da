//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{PieceKind, Point, BOARD_HEIGHT, BOARD_WIDTH};

const WELL_BG: Rgb = Rgb::new(30, 30, 40);
const BORDER: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
const EMPTY: CellStyle = CellStyle::new(Rgb::new(90, 90, 100), WELL_BG).dim();
const GHOST: CellStyle = CellStyle::new(Rgb::new(140, 140, 140), WELL_BG).dim();
const LABEL: CellStyle = CellStyle::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0)).bold();
const VALUE: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
/// Columns kept between the well and the side panel.
const PANEL_GAP: u16 = 2;
/// Width of the side panel (fits a full u32 score).
const PANEL_W: u16 = 10;

const OVERLAY: CellStyle = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();

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

/// Renders the visible playfield, the falling piece, its ghost and a side panel.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // Two columns per cell roughly squares up terminal glyphs.
        Self { cell_w: 2 }
    }
}

/// Where the bordered well sits in the framebuffer.
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

impl GameView {
    /// Render a snapshot into a fresh framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);

        let w = BOARD_WIDTH as u16 * self.cell_w + 2;
        let h = BOARD_HEIGHT as u16 + 2;
        // Center the well and panel together; fall back to the well alone.
        let with_panel = w + PANEL_GAP + PANEL_W;
        let x = if viewport.width >= with_panel {
            (viewport.width - with_panel) / 2
        } else {
            viewport.width.saturating_sub(w) / 2
        };
        let frame = Frame {
            x,
            y: viewport.height.saturating_sub(h) / 2,
            w,
            h,
        };

        self.draw_border(&mut fb, frame);

        for y in 0..BOARD_HEIGHT as i32 {
            for x in 0..BOARD_WIDTH as i32 {
                let (ch, style) = match snap.cell(x, y) {
                    Some(kind) => ('█', piece_style(kind)),
                    None => ('·', EMPTY),
                };
                self.draw_cell(&mut fb, frame, Point::new(x, y), ch, style);
            }
        }

        if let Some(active) = snap.active {
            if let Some(ghost_y) = snap.ghost_y {
                let dy = ghost_y - active.anchor.y;
                for p in active.cells {
                    self.draw_cell(&mut fb, frame, p.offset(0, dy), '░', GHOST);
                }
            }
            for p in active.cells {
                self.draw_cell(&mut fb, frame, p, '█', piece_style(active.kind));
            }
        }

        self.draw_side_panel(&mut fb, snap, frame);

        if let Some(cond) = snap.status.game_over() {
            let mid = frame.y + frame.h / 2;
            self.draw_centered(&mut fb, frame, mid.saturating_sub(1), "GAME OVER");
            self.draw_centered(&mut fb, frame, mid, cond.as_str());
            self.draw_centered(&mut fb, frame, mid + 1, "R restart");
        }

        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, f: Frame) {
        fb.put_char(f.x, f.y, '┌', BORDER);
        fb.put_char(f.x + f.w - 1, f.y, '┐', BORDER);
        fb.put_char(f.x, f.y + f.h - 1, '└', BORDER);
        fb.put_char(f.x + f.w - 1, f.y + f.h - 1, '┘', BORDER);
        fb.fill_rect(f.x + 1, f.y, f.w - 2, 1, '─', BORDER);
        fb.fill_rect(f.x + 1, f.y + f.h - 1, f.w - 2, 1, '─', BORDER);
        fb.fill_rect(f.x, f.y + 1, 1, f.h - 2, '│', BORDER);
        fb.fill_rect(f.x + f.w - 1, f.y + 1, 1, f.h - 2, '│', BORDER);
    }

    /// Draw one board cell; points in the hidden rows are skipped.
    fn draw_cell(&self, fb: &mut FrameBuffer, f: Frame, p: Point, ch: char, style: CellStyle) {
        if p.x < 0 || p.y < 0 || p.x >= BOARD_WIDTH as i32 || p.y >= BOARD_HEIGHT as i32 {
            return;
        }
        let px = f.x + 1 + p.x as u16 * self.cell_w;
        let py = f.y + 1 + p.y as u16;
        fb.fill_rect(px, py, self.cell_w, 1, ch, style);
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, f: Frame) {
        let x = f.x + f.w + PANEL_GAP;
        if x.saturating_add(PANEL_W) > fb.width() {
            return;
        }

        let mut y = f.y;
        for (label, value) in [("SCORE", snap.score), ("LEVEL", snap.level), ("LINES", snap.lines)] {
            fb.put_str(x, y, label, LABEL);
            fb.put_u32(x, y + 1, value, VALUE);
            y += 3;
        }
        fb.put_str(x, y, "NEXT", LABEL);
        fb.put_str(x, y + 1, piece_letter(snap.next), VALUE);
    }

    fn draw_centered(&self, fb: &mut FrameBuffer, f: Frame, y: u16, text: &str) {
        let len = text.chars().count() as u16;
        let x = f.x + f.w.saturating_sub(len) / 2;
        fb.put_str(x, y, text, OVERLAY);
    }
}

fn piece_style(kind: PieceKind) -> CellStyle {
    let fg = match kind {
        PieceKind::I => Rgb::new(80, 220, 220),
        PieceKind::O => Rgb::new(240, 220, 80),
        PieceKind::T => Rgb::new(200, 120, 220),
        PieceKind::S => Rgb::new(100, 220, 120),
        PieceKind::Z => Rgb::new(220, 80, 80),
        PieceKind::J => Rgb::new(80, 120, 220),
        PieceKind::L => Rgb::new(255, 165, 0),
    };
    CellStyle::new(fg, WELL_BG).bold()
}

fn piece_letter(kind: PieceKind) -> &'static str {
    match kind {
        PieceKind::I => "I",
        PieceKind::O => "O",
        PieceKind::T => "T",
        PieceKind::S => "S",
        PieceKind::Z => "Z",
        PieceKind::J => "J",
        PieceKind::L => "L",
    }
}
