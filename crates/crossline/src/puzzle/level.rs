use crate::geom::Point;
use crate::graph::{build_crossing_free, mark_crossings, Edge};
use crate::rand::scramble_position;
use crate::vertex::Vertex;
use std::time::Duration;

use super::cfg::PuzzleCfg;

/// State of one level. Replaced wholesale when a new level starts.
///
/// Invariants:
/// - `vertices[i].index == i`.
/// - Edge endpoints index into `vertices`; the edge pairs never change.
/// - `crossed_remaining` and every `Edge::crossed` match the displayed positions
///   as of the last `recount`.
/// - `selected`, if set, is a valid index; it is the only vertex being dragged.
#[derive(Clone, Debug)]
pub(crate) struct Level {
    pub number: u32,
    pub vertices: Vec<Vertex>,
    pub edges: Vec<Edge>,
    pub crossed_at_start: usize,
    pub crossed_remaining: usize,
    pub selected: Option<usize>,
    pub showing_scrambled: bool,
    pub started_at: Duration,
    pub finished_at: Option<Duration>,
}

impl Level {
    /// Empty placeholder before the first level.
    pub fn empty() -> Self {
        Self {
            number: 0,
            vertices: Vec::new(),
            edges: Vec::new(),
            crossed_at_start: 0,
            crossed_remaining: 0,
            selected: None,
            showing_scrambled: true,
            started_at: Duration::ZERO,
            finished_at: None,
        }
    }

    /// Build edges on `solved`, move the vertices onto the scramble circle and count.
    pub fn generate(number: u32, solved: &[Point], cfg: &PuzzleCfg, now: Duration) -> Self {
        let edges = build_crossing_free(solved);
        let n = solved.len();
        let vertices = solved
            .iter()
            .enumerate()
            .map(|(i, &p)| {
                let s = scramble_position(cfg.area, i, n, cfg.scramble_radius_frac);
                Vertex::new(i, p, s)
            })
            .collect();
        let mut level = Self {
            number,
            vertices,
            edges,
            started_at: now,
            ..Self::empty()
        };
        level.recount();
        level.crossed_at_start = level.crossed_remaining;
        level
    }

    /// Crossing detector over the current displayed positions.
    pub fn recount(&mut self) -> usize {
        let positions: Vec<Point> = self.vertices.iter().map(|v| v.displayed).collect();
        self.crossed_remaining = mark_crossings(&mut self.edges, &positions);
        self.crossed_remaining
    }

    #[inline]
    pub fn is_solved(&self) -> bool {
        self.finished_at.is_some()
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.vertices.iter().any(|v| !v.is_idle())
    }
}
