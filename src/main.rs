//! Terminal Tetris runner (default binary).
//!
//! Reads `TETRIS_*` configuration from the environment, then drives one
//! [`Session`] from crossterm input and a wall-clock frame loop. Log lines go
//! to stderr before the terminal enters raw mode and after it leaves.

use std::fs::File;
use std::io::BufWriter;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event};

use tetrion::engine::{EngineConfig, JsonLinesSink, Session};
use tetrion::input::{action_for_event, should_quit};
use tetrion::term::{GameView, TerminalRenderer, TerminalSink};

type SnapshotLog = JsonLinesSink<BufWriter<File>>;

fn main() -> Result<()> {
    let config = EngineConfig::from_env();
    let log = |msg: &str| {
        if !config.quiet {
            eprintln!("{msg}");
        }
    };

    let mut session = Session::from_config(&config);
    log(&format!(
        "[Tetrion] seed={} frame_ms={}",
        session.state().seed(),
        config.frame_ms
    ));
    for warning in session.take_warnings() {
        log(&warning);
    }

    let snapshot_log = match &config.snapshot_log {
        Some(path) => match open_snapshot_log(path) {
            Ok(sink) => {
                log(&format!("[Tetrion] writing snapshots to {}", path.display()));
                Some(sink)
            }
            Err(e) => {
                log(&format!("[Tetrion] snapshot log disabled: {e:#}"));
                None
            }
        },
        None => None,
    };

    let mut term = TerminalSink::new(TerminalRenderer::new(), GameView::default());
    term.renderer_mut().enter()?;

    let mut sinks = (term, snapshot_log);
    let result = run(&mut session, &mut sinks, config.frame_ms);

    // Always try to restore terminal state.
    let _ = sinks.0.renderer_mut().exit();

    for warning in session.take_warnings() {
        log(&warning);
    }
    for game in session.results() {
        log(&format!(
            "[Tetrion] game {} over: score={} lines={} level={}{}",
            game.episode_id,
            game.score,
            game.lines,
            game.level,
            if game.new_best { " (new best)" } else { "" }
        ));
    }
    let best = session.high_scores();
    log(&format!(
        "[HighScore] best score={} lines={} level={}",
        best.best_score, best.best_lines, best.best_level
    ));

    result
}

fn open_snapshot_log(path: &std::path::Path) -> Result<SnapshotLog> {
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    Ok(JsonLinesSink::new(BufWriter::new(file)))
}

fn run(
    session: &mut Session,
    sinks: &mut (TerminalSink, Option<SnapshotLog>),
    frame_ms: u32,
) -> Result<()> {
    let started = Instant::now();
    let frame = Duration::from_millis(frame_ms as u64);
    let mut last_frame = Instant::now();

    session.on_frame(0, sinks)?;

    loop {
        let timeout = frame.saturating_sub(last_frame.elapsed());

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = action_for_event(key) {
                        session.on_command(action, sinks)?;
                    }
                }
                Event::Resize(_, _) => sinks.0.invalidate(),
                _ => {}
            }
        }

        if last_frame.elapsed() >= frame {
            last_frame = Instant::now();
            sinks
                .0
                .set_best_score(Some(session.high_scores().best_score));
            let now_ms = started.elapsed().as_millis() as u64;
            session.on_frame(now_ms, sinks)?;
        }
    }
}
