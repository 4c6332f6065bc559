//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! Pure (no I/O), so it can be unit-tested.

use crate::core::{GameSnapshot, PieceSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Phase, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

const PLAYFIELD_BG: Rgb = Rgb::new(30, 30, 40);
const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);

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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Lays out the playfield, side panel and overlays.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 makes cells roughly square in most terminal fonts.
        Self::new(2, 1)
    }
}

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
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Outer size of the bordered playfield.
    pub fn frame_size(&self) -> (u16, u16) {
        (
            BOARD_WIDTH as u16 * self.cell_w + 2,
            BOARD_HEIGHT as u16 * self.cell_h + 2,
        )
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        self.render_into_with_best(snap, None, viewport, fb);
    }

    /// Like [`render_into`](Self::render_into), with a best score line in
    /// the side panel.
    pub fn render_into_with_best(
        &self,
        snap: &GameSnapshot,
        best_score: Option<u32>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let (frame_w, frame_h) = self.frame_size();
        let origin = Origin {
            x: viewport.width.saturating_sub(frame_w) / 2,
            y: match self.anchor_y {
                AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
                AnchorY::Top => 0,
            },
        };

        fb.fill_rect(
            origin.x + 1,
            origin.y + 1,
            frame_w - 2,
            frame_h - 2,
            ' ',
            CellStyle::new(PLAYFIELD_BG, PLAYFIELD_BG),
        );
        draw_border(
            fb,
            origin,
            frame_w,
            frame_h,
            CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG),
        );

        for (y, row) in snap.board.iter().enumerate() {
            for (x, &id) in row.iter().enumerate() {
                match PieceKind::from_id(id) {
                    Some(kind) => self.draw_block(fb, origin, x as i8, y as i8, kind),
                    None => self.draw_empty(fb, origin, x as u16, y as u16),
                }
            }
        }

        // A game-over piece overlaps the stack; leave it out so the stack
        // reads cleanly under the overlay.
        if let (Some(piece), false) = (snap.current, snap.phase == Phase::GameOver) {
            for (dx, dy) in piece.shape.occupied() {
                self.draw_block(fb, origin, piece.x + dx, piece.y + dy, piece.kind);
            }
        }

        self.draw_side_panel(fb, snap, best_score, viewport, origin, frame_w);

        match snap.phase {
            Phase::Idle => self.draw_overlay(fb, origin, &["TETRION", "ENTER TO START"]),
            Phase::Paused => self.draw_overlay(fb, origin, &["PAUSED"]),
            Phase::GameOver => self.draw_overlay(fb, origin, &["GAME OVER", "ENTER: NEW GAME"]),
            Phase::Running => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_block(&self, fb: &mut FrameBuffer, origin: Origin, x: i8, y: i8, kind: PieceKind) {
        // Rows above the board are hidden.
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return;
        }
        let style = CellStyle::new(Rgb::from_array(kind.color()), PLAYFIELD_BG).bold();
        self.fill_cell(fb, origin, x as u16, y as u16, '█', style);
    }

    fn draw_empty(&self, fb: &mut FrameBuffer, origin: Origin, x: u16, y: u16) {
        let style = CellStyle::new(Rgb::new(70, 70, 85), PLAYFIELD_BG);
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
        let px = origin.x + 1 + x * self.cell_w;
        let py = origin.y + 1 + y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        best_score: Option<u32>,
        viewport: Viewport,
        origin: Origin,
        frame_w: u16,
    ) {
        let panel_x = origin.x.saturating_add(frame_w).saturating_add(2);
        if viewport.width.saturating_sub(panel_x) < 12 {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);

        let mut y = origin.y;
        for (name, v) in [
            ("SCORE", Some(snap.score)),
            ("LEVEL", Some(snap.level)),
            ("LINES", Some(snap.lines)),
            ("BEST", best_score),
        ] {
            let Some(v) = v else { continue };
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y + 1, v, value);
            y = y.saturating_add(3);
        }

        fb.put_str(panel_x, y, "NEXT", label);
        if let Some(next) = snap.next {
            self.draw_preview(fb, panel_x, y + 1, &next);
        }
    }

    /// Next piece in its own small box, one block per cell width.
    fn draw_preview(&self, fb: &mut FrameBuffer, x: u16, y: u16, piece: &PieceSnapshot) {
        let style = CellStyle::new(Rgb::from_array(piece.kind.color()), SCREEN_BG).bold();
        for (dx, dy) in piece.shape.occupied() {
            let px = x + dx as u16 * self.cell_w;
            let py = y + dy as u16;
            fb.fill_rect(px, py, self.cell_w, 1, '█', style);
        }
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, origin: Origin, lines: &[&str]) {
        let (frame_w, frame_h) = self.frame_size();
        let style = CellStyle::new(Rgb::new(255, 255, 255), SCREEN_BG).bold();
        let top = origin.y + frame_h / 2 - (lines.len() as u16) / 2;
        for (i, text) in lines.iter().enumerate() {
            let text_w = text.chars().count() as u16;
            let x = origin.x + frame_w.saturating_sub(text_w) / 2;
            fb.put_str(x, top + i as u16, text, style);
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, origin: Origin, w: u16, h: u16, style: CellStyle) {
    let Origin { x, y } = origin;
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
