//! The puzzle aggregate: level lifecycle, pointer interaction, animation ticks.
//!
//! Purpose
//! - Own the current level (vertices, edges, counters, selection, timer) and expose
//!   the operations a frame-stepped driver calls.
//!
//! Ordering
//! - Every operation that moves a displayed position reruns the crossing detector
//!   before returning, so `edges()`, `crossed_remaining()` and `vertex_status()`
//!   always agree with `vertices()`.
//! - `tick` runs: animation step, detector, solved check. Rendering reads after it.
//!
//! Interaction
//! - One vertex at most is dragged (`selected`). A held vertex keeps its motion but
//!   skips animation steps until released; its pointer position also becomes its
//!   new scrambled position.
//! - The "transform in progress" condition is derived from the vertices' motion
//!   rather than stored.
//!
//! Code cross-refs: `graph::{build_crossing_free, mark_crossings}`, `vertex::Vertex`,
//! `rand::{LevelToken, sample_solved_positions}`.

mod cfg;
mod clock;
mod level;
mod select;
mod status;

pub use cfg::{ConfigError, PuzzleCfg};
pub use clock::{Clock, ManualClock, MonotonicClock};
pub use select::pick_vertex;
pub use status::{LevelStatus, VertexStatus};

use crate::geom::Point;
use crate::graph::Edge;
use crate::rand::{sample_solved_positions, scramble_position, LevelToken};
use crate::vertex::{Motion, Vertex};
use level::Level;
use std::time::Duration;

pub struct Puzzle<C: Clock = MonotonicClock> {
    cfg: PuzzleCfg,
    clock: C,
    level: Level,
}

impl Puzzle<MonotonicClock> {
    pub fn new(cfg: PuzzleCfg) -> Result<Self, ConfigError> {
        Self::with_clock(cfg, MonotonicClock::new())
    }
}

impl<C: Clock> Puzzle<C> {
    /// Engine with no level yet; call `start_level` or `next_level` to begin.
    pub fn with_clock(cfg: PuzzleCfg, clock: C) -> Result<Self, ConfigError> {
        cfg.validate()?;
        Ok(Self {
            cfg,
            clock,
            level: Level::empty(),
        })
    }

    // ---- level lifecycle ----

    /// Start the next level number with `vertex_count` random vertices.
    ///
    /// Positions come from the replay token `(cfg.seed, level)`, so a given seed and
    /// level always produce the same puzzle. `vertex_count <= 1` yields no edges.
    pub fn start_level(&mut self, vertex_count: usize) {
        let number = self.level.number + 1;
        let mut rng = LevelToken {
            seed: self.cfg.seed,
            level: number,
        }
        .to_std_rng();
        let solved = sample_solved_positions(self.cfg.area, vertex_count, &mut rng);
        self.install(number, &solved);
    }

    /// Start the next level number from explicit solved positions.
    pub fn start_level_from(&mut self, solved: &[Point]) {
        let number = self.level.number + 1;
        self.install(number, solved);
    }

    /// Start the following level with the configured vertex count.
    pub fn next_level(&mut self) {
        let n = self.cfg.vertex_count_for(self.level.number + 1);
        self.start_level(n);
    }

    fn install(&mut self, number: u32, solved: &[Point]) {
        self.level = Level::generate(number, solved, &self.cfg, self.clock.now());
        tracing::debug!(
            level = number,
            vertices = solved.len(),
            edges = self.level.edges.len(),
            crossed = self.level.crossed_at_start,
            "level started"
        );
    }

    /// Put every vertex back on the scramble circle, undoing drags and animations.
    pub fn reset_layout(&mut self) {
        let n = self.level.vertices.len();
        for v in self.level.vertices.iter_mut() {
            v.scrambled =
                scramble_position(self.cfg.area, v.index, n, self.cfg.scramble_radius_frac);
            v.rest_scrambled();
        }
        self.level.selected = None;
        self.level.showing_scrambled = true;
        self.level.recount();
    }

    /// Mark the level solved if nothing is crossed, nothing is dragged and no vertex
    /// is animating. The finish time is stamped only once.
    pub fn recheck_solved(&mut self) -> bool {
        let lv = &mut self.level;
        if lv.finished_at.is_none()
            && lv.crossed_remaining == 0
            && lv.selected.is_none()
            && !lv.is_animating()
        {
            let elapsed = self.clock.now().saturating_sub(lv.started_at);
            lv.finished_at = Some(elapsed);
            tracing::info!(
                level = lv.number,
                elapsed_s = elapsed.as_secs(),
                "level solved"
            );
        }
        lv.is_solved()
    }

    // ---- per-frame ----

    /// One frame: animate, recount crossings, then check for a solve.
    pub fn tick(&mut self) {
        let step = self.cfg.anim_step;
        let selected = self.level.selected;
        for v in self.level.vertices.iter_mut() {
            if Some(v.index) != selected {
                v.step(step);
            }
        }
        self.level.recount();
        self.recheck_solved();
    }

    /// Swap between the scrambled and the solved layout.
    ///
    /// Idle vertices head for the solved layout if the scrambled one is showing and
    /// vice versa; vertices already animating keep going. Ends any drag.
    pub fn toggle_transform(&mut self) {
        let motion = if self.level.showing_scrambled {
            Motion::ToSolved
        } else {
            Motion::ToScrambled
        };
        for v in self.level.vertices.iter_mut().filter(|v| v.is_idle()) {
            v.set_motion(motion);
        }
        self.level.showing_scrambled = !self.level.showing_scrambled;
        self.level.selected = None;
    }

    // ---- pointer ----

    /// Vertex hit by a pointer at `p`, if any. Does not change the selection.
    pub fn select_at(&self, p: Point) -> Option<usize> {
        pick_vertex(&self.level.vertices, p, self.cfg.pick_radius)
    }

    /// Start dragging vertex `index`. Ignored (returns false) for an out-of-range
    /// index or a solved level. An animating vertex pauses while held and resumes
    /// on release.
    pub fn begin_drag(&mut self, index: usize) -> bool {
        if index >= self.level.vertices.len() || self.level.is_solved() {
            return false;
        }
        self.level.selected = Some(index);
        true
    }

    /// Move the dragged vertex to `p`. No-op without an active drag.
    pub fn update_drag(&mut self, p: Point) {
        let Some(i) = self.level.selected else {
            return;
        };
        self.level.vertices[i].drag_to(p);
        self.level.recount();
    }

    /// Release the drag wherever the pointer is.
    pub fn end_drag(&mut self) {
        self.level.selected = None;
    }

    /// Pointer press: on a solved level advance to the next one; otherwise, while
    /// the scrambled layout shows, grab the vertex under the pointer.
    pub fn pointer_down(&mut self, p: Point) -> Option<usize> {
        if self.level.is_solved() {
            self.next_level();
            return None;
        }
        if !self.level.showing_scrambled {
            return None;
        }
        let hit = self.select_at(p)?;
        self.begin_drag(hit).then_some(hit)
    }

    /// Pointer motion: drags only inside the play area of an unsolved level.
    pub fn pointer_move(&mut self, p: Point) {
        if self.cfg.area.contains(p) && !self.level.is_solved() {
            self.update_drag(p);
        }
    }

    pub fn pointer_up(&mut self) {
        self.end_drag();
    }

    // ---- read-only views ----

    pub fn cfg(&self) -> &PuzzleCfg {
        &self.cfg
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn level_number(&self) -> u32 {
        self.level.number
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.level.vertices
    }

    pub fn edges(&self) -> &[Edge] {
        &self.level.edges
    }

    pub fn selected(&self) -> Option<usize> {
        self.level.selected
    }

    pub fn showing_scrambled(&self) -> bool {
        self.level.showing_scrambled
    }

    pub fn is_animating(&self) -> bool {
        self.level.is_animating()
    }

    pub fn is_solved(&self) -> bool {
        self.level.is_solved()
    }

    pub fn total_edges(&self) -> usize {
        self.level.edges.len()
    }

    pub fn crossed_at_start(&self) -> usize {
        self.level.crossed_at_start
    }

    pub fn crossed_remaining(&self) -> usize {
        self.level.crossed_remaining
    }

    pub fn started_at(&self) -> Duration {
        self.level.started_at
    }

    /// Time taken to solve, once solved.
    pub fn finished_at(&self) -> Option<Duration> {
        self.level.finished_at
    }

    pub fn elapsed(&self) -> Duration {
        self.level
            .finished_at
            .unwrap_or_else(|| self.clock.now().saturating_sub(self.level.started_at))
    }

    pub fn vertex_status(&self, index: usize) -> Option<VertexStatus> {
        (index < self.level.vertices.len())
            .then(|| VertexStatus::classify(&self.level.edges, index))
    }

    pub fn status(&self) -> LevelStatus {
        LevelStatus {
            level: self.level.number,
            vertices: self.level.vertices.len(),
            total_edges: self.level.edges.len(),
            crossed_at_start: self.level.crossed_at_start,
            crossed_remaining: self.level.crossed_remaining,
            solved: self.level.is_solved(),
            elapsed: self.elapsed(),
        }
    }
}

#[cfg(test)]
mod tests;
