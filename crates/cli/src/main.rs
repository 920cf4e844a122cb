mod script;
mod sidecar;
mod snapshot;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use crossline::{ManualClock, Puzzle, PuzzleCfg, Rect};
use serde_json::{json, Value};
use std::path::PathBuf;
use std::time::Duration;
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Headless driver for the crossed-lines puzzle engine")]
struct Cmd {
    /// Master seed; the same seed and level always give the same puzzle
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Screen size as WIDTHxHEIGHT; the play area is inset by --margin
    #[arg(long, default_value = "800x600")]
    screen: String,

    #[arg(long, default_value_t = 16)]
    margin: i64,

    /// Log engine debug events
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Build a level and print or write its snapshot
    Level {
        #[arg(long, default_value_t = 1)]
        level: u32,
        /// Override the configured vertex count for this level
        #[arg(long)]
        vertices: Option<usize>,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Animate a level into its solved layout and report crossings per tick
    Reveal {
        #[arg(long, default_value_t = 1)]
        level: u32,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Replay a JSON script of pointer and tick events, then snapshot
    Play {
        #[arg(long, default_value_t = 1)]
        level: u32,
        #[arg(long)]
        script: PathBuf,
        /// Ticks per second used to advance the clock
        #[arg(long, default_value_t = 30)]
        fps: u32,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print counts for levels 1..=LEVELS as JSON lines
    Stats {
        #[arg(long, default_value_t = 10)]
        levels: u32,
    },
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let max_level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(max_level)
        .init();
    let cfg = puzzle_cfg(&cmd)?;
    match cmd.action {
        Action::Level {
            level,
            vertices,
            out,
        } => level_cmd(cfg, level, vertices, out),
        Action::Reveal { level, out } => reveal(cfg, level, out),
        Action::Play {
            level,
            script,
            fps,
            out,
        } => play(cfg, level, script, fps, out),
        Action::Stats { levels } => stats(cfg, levels),
    }
}

fn puzzle_cfg(cmd: &Cmd) -> Result<PuzzleCfg> {
    let Some((w, h)) = cmd.screen.split_once('x') else {
        bail!("--screen must look like WIDTHxHEIGHT, got {:?}", cmd.screen);
    };
    let screen = Rect::new(0, 0, w.trim().parse()?, h.trim().parse()?);
    let cfg = PuzzleCfg {
        area: screen.inset(cmd.margin),
        seed: cmd.seed,
        ..PuzzleCfg::default()
    };
    cfg.validate()?;
    Ok(cfg)
}

/// Engine positioned on level `level` (levels before it are generated and discarded
/// so the level number, and with it the puzzle, matches a real session).
fn puzzle_at(cfg: PuzzleCfg, level: u32, vertices: Option<usize>) -> Result<Puzzle<ManualClock>> {
    if level == 0 {
        bail!("levels start at 1");
    }
    let mut p = Puzzle::with_clock(cfg, ManualClock::new())?;
    for _ in 1..level {
        p.next_level();
    }
    match vertices {
        Some(n) => p.start_level(n),
        None => p.next_level(),
    }
    Ok(p)
}

fn emit(value: &Value, out: Option<PathBuf>, command: &'static str, params: Value) -> Result<()> {
    match out {
        Some(path) => {
            sidecar::write_json(&path, value)?;
            let side = sidecar::write_sidecar(&path, sidecar::Payload::new(command, params))?;
            tracing::info!(out = %path.display(), sidecar = %side.display(), "wrote");
        }
        None => println!("{}", serde_json::to_string_pretty(value)?),
    }
    Ok(())
}

fn level_cmd(
    cfg: PuzzleCfg,
    level: u32,
    vertices: Option<usize>,
    out: Option<PathBuf>,
) -> Result<()> {
    tracing::info!(seed = cfg.seed, level, vertices = ?vertices, "level");
    let p = puzzle_at(cfg, level, vertices)?;
    let params = json!({"seed": cfg.seed, "level": level, "vertices": vertices});
    emit(&snapshot::snapshot(&p), out, "level", params)
}

fn reveal(cfg: PuzzleCfg, level: u32, out: Option<PathBuf>) -> Result<()> {
    tracing::info!(seed = cfg.seed, level, "reveal");
    let mut p = puzzle_at(cfg, level, None)?;
    p.toggle_transform();
    let mut frames = Vec::new();
    // Every animation ends after ceil(1 / step) ticks.
    let limit = (1.0 / cfg.anim_step).ceil() as u32 + 1;
    for tick in 1..=limit {
        p.tick();
        tracing::info!(tick, crossed = p.crossed_remaining(), "frame");
        frames.push(json!({"tick": tick, "crossed": p.crossed_remaining()}));
        if !p.is_animating() {
            break;
        }
    }
    let doc = json!({"frames": frames, "snapshot": snapshot::snapshot(&p)});
    emit(&doc, out, "reveal", json!({"seed": cfg.seed, "level": level}))
}

fn play(cfg: PuzzleCfg, level: u32, script: PathBuf, fps: u32, out: Option<PathBuf>) -> Result<()> {
    tracing::info!(seed = cfg.seed, level, script = %script.display(), fps, "play");
    if fps == 0 {
        bail!("--fps must be positive");
    }
    let events = script::load(&script)?;
    let mut p = puzzle_at(cfg, level, None)?;
    script::replay(&mut p, &events, Duration::from_secs(1) / fps);
    tracing::info!(
        events = events.len(),
        crossed = p.crossed_remaining(),
        solved = p.is_solved(),
        "replayed"
    );
    let params = json!({
        "seed": cfg.seed,
        "level": level,
        "script": script.to_string_lossy(),
        "fps": fps
    });
    emit(&snapshot::snapshot(&p), out, "play", params)
}

fn stats(cfg: PuzzleCfg, levels: u32) -> Result<()> {
    tracing::info!(seed = cfg.seed, levels, "stats");
    let mut p = Puzzle::with_clock(cfg, ManualClock::new())?;
    for _ in 0..levels {
        p.next_level();
        println!("{}", serde_json::to_string(&snapshot::status_json(&p))?);
    }
    Ok(())
}
