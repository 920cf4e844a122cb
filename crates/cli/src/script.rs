//! Scripted pointer sessions replayed against the engine.
//!
//! A script is a JSON array of events, e.g.
//! `[{"op":"down","x":400,"y":470},{"op":"move","x":300,"y":300},{"op":"up"},{"op":"tick","count":5}]`.

use anyhow::{Context, Result};
use crossline::{ManualClock, Point, Puzzle};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Event {
    Down { x: i64, y: i64 },
    Move { x: i64, y: i64 },
    Up,
    Toggle,
    Reset,
    Tick {
        #[serde(default = "one")]
        count: u32,
    },
    /// Advance the clock without ticking.
    Wait { ms: u64 },
}

fn one() -> u32 {
    1
}

pub fn load(path: &Path) -> Result<Vec<Event>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading script {}", path.display()))?;
    parse(&text).with_context(|| format!("parsing script {}", path.display()))
}

pub fn parse(text: &str) -> Result<Vec<Event>> {
    Ok(serde_json::from_str(text)?)
}

/// Apply `events` in order. Each tick also advances the clock by `frame`.
pub fn replay(p: &mut Puzzle<ManualClock>, events: &[Event], frame: Duration) {
    for ev in events {
        match *ev {
            Event::Down { x, y } => {
                let hit = p.pointer_down(Point::new(x, y));
                tracing::debug!(x, y, hit = ?hit, "pointer_down");
            }
            Event::Move { x, y } => p.pointer_move(Point::new(x, y)),
            Event::Up => p.pointer_up(),
            Event::Toggle => p.toggle_transform(),
            Event::Reset => p.reset_layout(),
            Event::Tick { count } => {
                for _ in 0..count {
                    p.clock().advance(frame);
                    p.tick();
                }
            }
            Event::Wait { ms } => p.clock().advance(Duration::from_millis(ms)),
        }
    }
}
