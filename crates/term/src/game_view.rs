//! GameView: maps a `GameSession` into a terminal framebuffer.
//!
//! Pure, no I/O. Settled cells come from the board; the active piece is
//! overlaid from the same shape masks the session uses for collisions.

use crate::core::{Board, GameSession, Piece, VariantSource};
use crate::fb::{FrameBuffer, Rgb, Style};
use crate::types::{Cell, Variant};

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

/// Lays out the playfield and the HUD.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    /// Terminal columns per board cell. 2 keeps cells roughly square.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        Self { cell_w: 2 }
    }
}

impl GameView {
    /// Render the session into a fresh framebuffer.
    pub fn render<S: VariantSource>(&self, session: &GameSession<S>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        let board = session.board();

        // Oversized boards are clipped by the framebuffer rather than wrapped.
        let frame_w = clamp_u16(board.width())
            .saturating_mul(self.cell_w)
            .saturating_add(2);
        let frame_h = clamp_u16(board.height()).saturating_add(2);
        let origin_x = viewport.width.saturating_sub(frame_w) / 2;
        let origin_y = viewport.height.saturating_sub(frame_h) / 2;

        self.draw_border(&mut fb, origin_x, origin_y, frame_w, frame_h);
        self.draw_board(&mut fb, origin_x, origin_y, board);
        if !session.game_over() {
            self.draw_piece(&mut fb, origin_x, origin_y, board, session.active());
        }
        self.draw_hud(&mut fb, session, origin_x.saturating_add(frame_w).saturating_add(2), origin_y);

        if session.game_over() {
            draw_banner(&mut fb, origin_x, origin_y, frame_w, frame_h, "GAME OVER");
        } else if session.paused() {
            draw_banner(&mut fb, origin_x, origin_y, frame_w, frame_h, "PAUSED");
        }

        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        let style = Style::new(Rgb::new(200, 200, 200), PANEL_BG);
        let right = x.saturating_add(w.saturating_sub(1));
        let bottom = y.saturating_add(h.saturating_sub(1));

        fb.put_char(x, y, '┌', style);
        fb.put_char(right, y, '┐', style);
        fb.put_char(x, bottom, '└', style);
        fb.put_char(right, bottom, '┘', style);
        for cx in x.saturating_add(1)..right {
            fb.put_char(cx, y, '─', style);
            fb.put_char(cx, bottom, '─', style);
        }
        for cy in y.saturating_add(1)..bottom {
            fb.put_char(x, cy, '│', style);
            fb.put_char(right, cy, '│', style);
        }
    }

    fn draw_board(&self, fb: &mut FrameBuffer, x: u16, y: u16, board: &Board) {
        let empty = Style::new(Rgb::new(90, 90, 100), PLAYFIELD_BG);
        for (row, cells) in board.rows().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                match cell {
                    Cell::Filled(v) => self.put_block(fb, x, y, row, col, *v),
                    Cell::Empty => self.fill_cell(fb, x, y, row, col, '·', empty),
                }
            }
        }
    }

    fn draw_piece(&self, fb: &mut FrameBuffer, x: u16, y: u16, board: &Board, piece: &Piece) {
        for (row, col) in piece.board_cells(board) {
            self.put_block(fb, x, y, row, col, piece.variant);
        }
    }

    fn put_block(&self, fb: &mut FrameBuffer, x: u16, y: u16, row: usize, col: usize, v: Variant) {
        let style = Style::new(variant_color(v), PLAYFIELD_BG).bold();
        self.fill_cell(fb, x, y, row, col, '█', style);
    }

    fn fill_cell(&self, fb: &mut FrameBuffer, x: u16, y: u16, row: usize, col: usize, ch: char, style: Style) {
        let px = x
            .saturating_add(1)
            .saturating_add(clamp_u16(col).saturating_mul(self.cell_w));
        let py = row_offset(y, row);
        fb.fill_rect(px, py, self.cell_w, 1, ch, style);
    }

    fn draw_hud<S: VariantSource>(&self, fb: &mut FrameBuffer, session: &GameSession<S>, x: u16, y: u16) {
        let label = Style::default().bold();
        let value = Style::new(Rgb::new(200, 200, 200), PANEL_BG);

        let rows = [
            ("SCORE", session.score()),
            ("LEVEL", session.level()),
            ("LINES", session.lines()),
        ];
        let mut cy = y;
        for (name, n) in rows {
            fb.put_str(x, cy, name, label);
            fb.put_str(x, cy.saturating_add(1), &n.to_string(), value);
            cy = cy.saturating_add(3);
        }

        let hint = Style::new(Rgb::new(120, 120, 130), PANEL_BG);
        for line in ["←→ move  ↑ rotate", "↓ drop  ␣ hard drop", "p pause  q quit"] {
            fb.put_str(x, cy, line, hint);
            cy = cy.saturating_add(1);
        }
    }
}

fn draw_banner(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, text: &str) {
    let len = text.chars().count() as u16;
    let tx = x.saturating_add(w.saturating_sub(len) / 2);
    let style = Style::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
    fb.put_str(tx, y.saturating_add(h / 2), text, style);
}

fn clamp_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

/// Screen row of board row `row` inside a frame whose top border is at `y`.
fn row_offset(y: u16, row: usize) -> u16 {
    y.saturating_add(1).saturating_add(clamp_u16(row))
}

fn variant_color(v: Variant) -> Rgb {
    match v {
        Variant::I => Rgb::new(80, 220, 220),
        Variant::O => Rgb::new(240, 220, 80),
        Variant::T => Rgb::new(200, 120, 220),
        Variant::J => Rgb::new(80, 120, 220),
        Variant::L => Rgb::new(255, 165, 0),
        Variant::S => Rgb::new(100, 220, 120),
        Variant::Z => Rgb::new(220, 80, 80),
    }
}
