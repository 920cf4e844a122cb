use crate::geom::{segments_intersect, Point};

use super::types::Edge;

/// Greedy crossing-free edge set over `points`.
///
/// Candidates are visited as `(i, j)` for `i` ascending and `j` in `0..i`; a candidate
/// is accepted iff it crosses none of the edges accepted so far. The visitation order
/// is part of the contract: the same points always yield the same edges.
/// The result is maximal for this order, not maximum.
pub fn build_crossing_free(points: &[Point]) -> Vec<Edge> {
    let mut edges: Vec<Edge> = Vec::new();
    for i in 0..points.len() {
        for j in 0..i {
            let (pi, pj) = (points[i], points[j]);
            let blocked = edges
                .iter()
                .any(|e| segments_intersect(pi, pj, points[e.a], points[e.b]));
            if !blocked {
                edges.push(Edge::new(i, j));
            }
        }
    }
    edges
}
