//! One puzzle vertex and its position state machine.
//!
//! A vertex carries three positions:
//! - `solved`: fixed for the level; the builder's edges are crossing-free here.
//! - `scrambled`: the resting layout the player edits (drags overwrite it).
//! - `displayed`: what is rendered and hit-tested.
//!
//! `motion` is `Idle` at rest. A toggle sets `ToSolved`/`ToScrambled`, after which
//! every `step` moves `displayed` toward the target by
//! `round((target - displayed) * progress)` per axis, with `progress` growing by
//! the configured step each tick. Progress is capped at 1, so the last tick lands
//! exactly on the target for any step size and the vertex is back to `Idle`.

use crate::geom::Point;

/// Animation direction of a vertex.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Motion {
    #[default]
    Idle,
    ToSolved,
    ToScrambled,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Vertex {
    /// Position in the level's vertex list (`vertices[i].index == i`).
    pub index: usize,
    pub solved: Point,
    pub scrambled: Point,
    pub displayed: Point,
    motion: Motion,
    // Progress is `ticks * step`; counting ticks keeps 10 × 0.1 at exactly 1.0.
    ticks: u32,
}

impl Vertex {
    /// A vertex resting on its scrambled position.
    pub fn new(index: usize, solved: Point, scrambled: Point) -> Self {
        Self {
            index,
            solved,
            scrambled,
            displayed: scrambled,
            motion: Motion::Idle,
            ticks: 0,
        }
    }

    #[inline]
    pub fn motion(&self) -> Motion {
        self.motion
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        self.motion == Motion::Idle
    }

    /// Animation progress in `[0, 1)` for the given step size.
    #[inline]
    pub fn progress(&self, step: f64) -> f64 {
        self.ticks as f64 * step
    }

    /// Start an animation (or stop one with `Motion::Idle`); progress restarts at 0.
    pub fn set_motion(&mut self, motion: Motion) {
        self.motion = motion;
        self.ticks = 0;
    }

    /// Advance one animation tick. No-op when idle.
    pub fn step(&mut self, step: f64) {
        let target = match self.motion {
            Motion::Idle => return,
            Motion::ToSolved => self.solved,
            Motion::ToScrambled => self.scrambled,
        };
        self.ticks += 1;
        let progress = self.progress(step).min(1.0);
        self.displayed.x += ease(target.x - self.displayed.x, progress);
        self.displayed.y += ease(target.y - self.displayed.y, progress);
        if progress >= 1.0 {
            self.set_motion(Motion::Idle);
        }
    }

    /// Pointer drag: the pointer position becomes both displayed and resting position.
    pub fn drag_to(&mut self, p: Point) {
        self.displayed = p;
        self.scrambled = p;
    }

    /// Drop any animation and sit on the scrambled position.
    pub fn rest_scrambled(&mut self) {
        self.set_motion(Motion::Idle);
        self.displayed = self.scrambled;
    }
}

#[inline]
fn ease(delta: i64, progress: f64) -> i64 {
    (delta as f64 * progress).round() as i64
}
