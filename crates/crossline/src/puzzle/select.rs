use crate::geom::Point;
use crate::vertex::Vertex;

/// Index of the vertex nearest to `p` by displayed position, if within `radius`.
///
/// Ties go to the lowest index (strict `<` against the running minimum).
/// A distance equal to `radius` still hits.
pub fn pick_vertex(vertices: &[Vertex], p: Point, radius: f64) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for v in vertices {
        let dx = (v.displayed.x - p.x) as f64;
        let dy = (v.displayed.y - p.y) as f64;
        let dist = dx.hypot(dy);
        match best {
            Some((_, d)) if d <= dist => {}
            _ => best = Some((v.index, dist)),
        }
    }
    best.filter(|&(_, d)| d <= radius).map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(index: usize, x: i64, y: i64) -> Vertex {
        Vertex::new(index, Point::new(0, 0), Point::new(x, y))
    }

    #[test]
    fn empty_list_hits_nothing() {
        assert_eq!(pick_vertex(&[], Point::new(0, 0), 18.0), None);
    }

    #[test]
    fn nearest_within_radius() {
        let vs = vec![at(0, 0, 0), at(1, 100, 0), at(2, 50, 50)];
        assert_eq!(pick_vertex(&vs, Point::new(97, 4), 18.0), Some(1));
        assert_eq!(pick_vertex(&vs, Point::new(53, 46), 18.0), Some(2));
    }

    #[test]
    fn radius_is_inclusive_and_beyond_is_none() {
        let vs = vec![at(0, 0, 0)];
        assert_eq!(pick_vertex(&vs, Point::new(18, 0), 18.0), Some(0));
        assert_eq!(pick_vertex(&vs, Point::new(19, 0), 18.0), None);
        // 13-13 diagonal is ~18.38 away.
        assert_eq!(pick_vertex(&vs, Point::new(13, 13), 18.0), None);
    }

    #[test]
    fn ties_go_to_first_index() {
        let vs = vec![at(0, 10, 0), at(1, -10, 0), at(2, 0, 10)];
        assert_eq!(pick_vertex(&vs, Point::new(0, 0), 18.0), Some(0));
        let vs = vec![at(0, 50, 50), at(1, 10, 0), at(2, -10, 0)];
        assert_eq!(pick_vertex(&vs, Point::new(0, 0), 18.0), Some(1));
    }
}
