use tetrion::core::{GameSnapshot, GameState};
use tetrion::term::{AnchorY, FrameBuffer, GameView, Viewport};
use tetrion::types::{Phase, PieceKind};

fn screen_text(fb: &FrameBuffer) -> String {
    (0..fb.height())
        .map(|y| fb.row_text(y) + "\n")
        .collect()
}

fn running_snapshot() -> GameSnapshot {
    let mut gs = GameState::new(1);
    gs.start();
    gs.snapshot()
}

#[test]
fn term_view_renders_border_corners() {
    let snap = GameSnapshot::default();
    let view = GameView::default();

    // 10x20 cells at 2x1 plus border => 22x22
    let fb = view.render(&snap, Viewport::new(22, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_locked_cell_as_two_chars_wide() {
    let mut snap = running_snapshot();
    snap.board[19][0] = PieceKind::T.id();
    snap.current = None;

    let fb = GameView::default().render(&snap, Viewport::new(22, 22));

    assert_eq!(fb.get(1, 20).unwrap().ch, '█');
    assert_eq!(fb.get(2, 20).unwrap().ch, '█');
    assert_eq!(fb.get(3, 20).unwrap().ch, '·');
}

#[test]
fn term_view_draws_current_piece() {
    let snap = running_snapshot();
    let piece = snap.current.unwrap();
    let fb = GameView::default().render(&snap, Viewport::new(22, 22));

    for (dx, dy) in piece.shape.occupied() {
        let x = (piece.x + dx) as u16;
        let y = (piece.y + dy) as u16;
        assert_eq!(fb.get(1 + x * 2, 1 + y).unwrap().ch, '█');
    }
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut snap = running_snapshot();
    snap.score = 1234;
    snap.level = 2;
    snap.lines = 10;

    let text = screen_text(&GameView::default().render(&snap, Viewport::new(60, 22)));
    assert!(text.contains("SCORE"));
    assert!(text.contains("1234"));
    assert!(text.contains("NEXT"));
    assert!(!text.contains("BEST"));

    let narrow = screen_text(&GameView::default().render(&snap, Viewport::new(22, 22)));
    assert!(!narrow.contains("SCORE"));
}

#[test]
fn term_view_overlays_follow_phase() {
    let view = GameView::default();
    let vp = Viewport::new(40, 22);

    let idle = screen_text(&view.render(&GameSnapshot::default(), vp));
    assert!(idle.contains("ENTER TO START"));

    let mut snap = running_snapshot();
    assert!(!screen_text(&view.render(&snap, vp)).contains("PAUSED"));

    snap.phase = Phase::Paused;
    assert!(screen_text(&view.render(&snap, vp)).contains("PAUSED"));

    snap.phase = Phase::GameOver;
    assert!(screen_text(&view.render(&snap, vp)).contains("GAME OVER"));
}

#[test]
fn term_view_centers_board_by_default_on_tall_viewports() {
    let fb = GameView::default().render(&GameSnapshot::default(), Viewport::new(22, 30));
    // start_y = (30 - 22) / 2 = 4
    assert_eq!(fb.get(0, 4).unwrap().ch, '┌');
}

#[test]
fn term_view_can_anchor_board_to_top() {
    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let fb = view.render(&GameSnapshot::default(), Viewport::new(22, 30));
    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
}

#[test]
fn term_view_survives_tiny_viewport() {
    let fb = GameView::default().render(&running_snapshot(), Viewport::new(5, 3));
    assert_eq!((fb.width(), fb.height()), (5, 3));
}
