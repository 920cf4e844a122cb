//! Read-only views handed to a presentation layer.

use crate::graph::Edge;
use std::time::Duration;

/// Marker classification of a vertex by its incident edges.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VertexStatus {
    /// No incident edge is crossed (also isolated vertices).
    NoneCrossed,
    /// Every incident edge is crossed.
    AllCrossed,
    SomeCrossed,
}

impl VertexStatus {
    pub fn classify(edges: &[Edge], v: usize) -> Self {
        let (mut all, mut crossed) = (0usize, 0usize);
        for e in edges.iter().filter(|e| e.touches(v)) {
            all += 1;
            if e.crossed {
                crossed += 1;
            }
        }
        if crossed == 0 {
            Self::NoneCrossed
        } else if crossed == all {
            Self::AllCrossed
        } else {
            Self::SomeCrossed
        }
    }
}

/// Counters and timer of the current level, for status text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LevelStatus {
    pub level: u32,
    pub vertices: usize,
    pub total_edges: usize,
    pub crossed_at_start: usize,
    pub crossed_remaining: usize,
    pub solved: bool,
    /// Time to solve once solved, live time otherwise.
    pub elapsed: Duration,
}
