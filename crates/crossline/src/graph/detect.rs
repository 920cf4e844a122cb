use crate::geom::{segments_intersect, Point};

use super::types::Edge;

/// Recompute every edge's `crossed` flag against `positions` and return the number
/// of crossed edges.
///
/// Flags are reset first, then each unordered edge pair is tested once; a crossing
/// marks both participants. The count is of edges taking part in at least one
/// crossing, not of crossing pairs.
pub fn mark_crossings(edges: &mut [Edge], positions: &[Point]) -> usize {
    for e in edges.iter_mut() {
        e.crossed = false;
    }
    for i in 0..edges.len() {
        for j in (i + 1)..edges.len() {
            let (ei, ej) = (edges[i], edges[j]);
            if segments_intersect(
                positions[ei.a],
                positions[ei.b],
                positions[ej.a],
                positions[ej.b],
            ) {
                edges[i].crossed = true;
                edges[j].crossed = true;
            }
        }
    }
    count_crossed(edges)
}

#[inline]
pub fn count_crossed(edges: &[Edge]) -> usize {
    edges.iter().filter(|e| e.crossed).count()
}
