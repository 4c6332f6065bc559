//! Render sink that draws snapshots on the terminal.

use std::io::Write;

use anyhow::Result;

use crate::core::GameSnapshot;
use crate::engine::RenderSink;
use crate::fb::FrameBuffer;
use crate::game_view::{GameView, Viewport};
use crate::renderer::TerminalRenderer;

pub struct TerminalSink<W: Write = std::io::Stdout> {
    renderer: TerminalRenderer<W>,
    view: GameView,
    fb: FrameBuffer,
    viewport: Option<Viewport>,
    best_score: Option<u32>,
}

impl<W: Write> TerminalSink<W> {
    pub fn new(renderer: TerminalRenderer<W>, view: GameView) -> Self {
        Self {
            renderer,
            view,
            fb: FrameBuffer::new(0, 0),
            viewport: None,
            best_score: None,
        }
    }

    /// Use a fixed viewport instead of querying the terminal size.
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = Some(viewport);
        self
    }

    pub fn set_best_score(&mut self, best: Option<u32>) {
        self.best_score = best;
    }

    /// Full redraw on the next present.
    pub fn invalidate(&mut self) {
        self.renderer.invalidate();
    }

    pub fn renderer_mut(&mut self) -> &mut TerminalRenderer<W> {
        &mut self.renderer
    }

    pub fn framebuffer(&self) -> &FrameBuffer {
        &self.fb
    }

    fn viewport(&self) -> Viewport {
        self.viewport.unwrap_or_else(|| {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            Viewport::new(w, h)
        })
    }
}

impl<W: Write> RenderSink for TerminalSink<W> {
    fn present(&mut self, snapshot: &GameSnapshot) -> Result<()> {
        let viewport = self.viewport();
        self.view
            .render_into_with_best(snapshot, self.best_score, viewport, &mut self.fb);
        self.renderer.draw(&self.fb)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameState;

    #[test]
    fn present_renders_into_framebuffer() {
        let mut sink = TerminalSink::new(TerminalRenderer::with_writer(Vec::new()), GameView::default())
            .with_viewport(Viewport::new(60, 22));
        sink.set_best_score(Some(777));

        let mut state = GameState::new(1);
        state.start();
        sink.present(&state.snapshot()).unwrap();

        assert_eq!(sink.framebuffer().width(), 60);
        assert!(!sink.renderer_mut().get_ref().is_empty());
        let text: String = (0..22).map(|y| sink.framebuffer().row_text(y)).collect();
        assert!(text.contains("777"));
    }
}
