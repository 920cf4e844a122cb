use super::types::{Orientation, Point};
use std::cmp::Ordering;

/// Orientation of the triple `(p, q, r)` from the sign of
/// `(q.y - p.y) * (r.x - q.x) - (q.x - p.x) * (r.y - q.y)`.
///
/// Positive is `Clockwise` in the y-down frame; exact zero is `Colinear`.
/// Exact for every `i64` coordinate: the two products are compared rather than
/// subtracted, so nothing overflows.
#[inline]
pub fn orientation(p: Point, q: Point, r: Point) -> Orientation {
    let lhs = (q.y as i128 - p.y as i128, r.x as i128 - q.x as i128);
    let rhs = (q.x as i128 - p.x as i128, r.y as i128 - q.y as i128);
    match cmp_products(lhs, rhs) {
        Ordering::Equal => Orientation::Colinear,
        Ordering::Greater => Orientation::Clockwise,
        Ordering::Less => Orientation::CounterClockwise,
    }
}

/// Compare `a.0 * a.1` with `b.0 * b.1`.
///
/// Factors are differences of two `i64`, so `|factor| < 2^64` and each magnitude
/// product fits in `u128`.
fn cmp_products(a: (i128, i128), b: (i128, i128)) -> Ordering {
    let sign = |f: (i128, i128)| f.0.signum() * f.1.signum();
    let mag = |f: (i128, i128)| f.0.unsigned_abs() * f.1.unsigned_abs();
    let (sa, sb) = (sign(a), sign(b));
    match sa.cmp(&sb) {
        Ordering::Equal if sa > 0 => mag(a).cmp(&mag(b)),
        Ordering::Equal if sa < 0 => mag(b).cmp(&mag(a)),
        other => other,
    }
}

/// `q` lies strictly inside the bounding box of segment `p`–`r` on both axes.
///
/// Callers only use this after establishing collinearity. A point on the box
/// boundary (including an axis-parallel segment's own line) returns false.
#[inline]
pub fn on_segment(p: Point, q: Point, r: Point) -> bool {
    q.x < p.x.max(r.x) && q.x > p.x.min(r.x) && q.y < p.y.max(r.y) && q.y > p.y.min(r.y)
}

/// Do the segments `p1`–`q1` and `p2`–`q2` cross?
///
/// Shared endpoints short-circuit to false before any orientation test.
/// Symmetric under swapping the two segments.
pub fn segments_intersect(p1: Point, q1: Point, p2: Point, q2: Point) -> bool {
    if p1 == p2 || p1 == q2 || q1 == p2 || q1 == q2 {
        return false;
    }

    let o1 = orientation(p1, q1, p2);
    let o2 = orientation(p1, q1, q2);
    let o3 = orientation(p2, q2, p1);
    let o4 = orientation(p2, q2, q1);

    if o1 != o2 && o3 != o4 {
        return true;
    }

    // Collinear touches.
    (o1 == Orientation::Colinear && on_segment(p1, p2, q1))
        || (o2 == Orientation::Colinear && on_segment(p1, q2, q1))
        || (o3 == Orientation::Colinear && on_segment(p2, p1, q2))
        || (o4 == Orientation::Colinear && on_segment(p2, q1, q2))
}
