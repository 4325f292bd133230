//! Terminal runner (default binary).
//!
//! Polls the keyboard until the next frame, advances the game clock, appends
//! events to the optional log and redraws through the diffing renderer.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};

use blockfall::config::RunConfig;
use blockfall::core::{GameSnapshot, GameState};
use blockfall::event_log::{EventLog, EventRecord};
use blockfall::input::{command_for_key, should_quit};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let config = RunConfig::from_env();

    let log = match config.log_path.as_deref() {
        Some(path) => match EventLog::open(path) {
            Ok(log) => Some(log),
            Err(e) => {
                eprintln!("[blockfall] event log disabled: {e:#}");
                None
            }
        },
        None => None,
    };

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config, log);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, config: &RunConfig, mut log: Option<EventLog>) -> Result<()> {
    let mut game = GameState::new(config.seed);
    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let clock = Instant::now();
    let frame = Duration::from_millis(config.frame_ms);
    let mut next_frame = clock;

    loop {
        game.snapshot_into(&mut snap);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next frame.
        let timeout = next_frame.saturating_duration_since(Instant::now());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        break;
                    }
                    if let Some(command) = command_for_key(key) {
                        game.apply(command);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        let now = Instant::now();
        if now >= next_frame {
            next_frame = now + frame;
            game.tick(clock.elapsed().as_millis() as u64);
        }

        let ts = clock.elapsed().as_millis() as u64;
        let totals = game.score_snapshot();
        let mut failed = false;
        for ev in game.drain_events() {
            if let Some(log) = log.as_mut() {
                failed |= log.record(&EventRecord::new(ts, ev, totals)).is_err();
            }
        }
        // A broken log stops logging, not the game.
        if failed {
            log = None;
        }
    }

    if let Some(log) = log.as_mut() {
        let _ = log.flush();
    }
    Ok(())
}
