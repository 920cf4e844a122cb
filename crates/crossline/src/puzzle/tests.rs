use super::*;
use crate::geom::Rect;
use crate::graph::mark_crossings;

fn puzzle() -> Puzzle<ManualClock> {
    Puzzle::with_clock(PuzzleCfg::default(), ManualClock::new()).unwrap()
}

fn pts(raw: &[(i64, i64)]) -> Vec<Point> {
    raw.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

// Solved layout is a square; with 4 vertices on the circle the edges (2,0) and
// (3,1) become the two crossing diameters.
fn square() -> Vec<Point> {
    pts(&[(100, 100), (200, 200), (200, 100), (100, 200)])
}

fn displayed(p: &Puzzle<ManualClock>) -> Vec<Point> {
    p.vertices().iter().map(|v| v.displayed).collect()
}

#[test]
fn rejects_invalid_config() {
    let bad_area = PuzzleCfg {
        area: Rect::new(0, 0, 0, 100),
        ..PuzzleCfg::default()
    };
    assert!(matches!(
        Puzzle::new(bad_area),
        Err(ConfigError::InvalidArea { .. })
    ));
    let bad_step = PuzzleCfg {
        anim_step: 0.0,
        ..PuzzleCfg::default()
    };
    assert!(matches!(
        Puzzle::new(bad_step),
        Err(ConfigError::InvalidParam { .. })
    ));
    let bad_radius = PuzzleCfg {
        pick_radius: f64::NAN,
        ..PuzzleCfg::default()
    };
    assert!(Puzzle::new(bad_radius).is_err());
    assert!(Puzzle::new(PuzzleCfg::default()).is_ok());
}

#[test]
fn start_level_builds_a_consistent_level() {
    let mut p = puzzle();
    p.start_level(12);
    assert_eq!(p.level_number(), 1);
    assert_eq!(p.vertices().len(), 12);
    for (i, v) in p.vertices().iter().enumerate() {
        assert_eq!(v.index, i);
        assert_eq!(v.displayed, v.scrambled);
        assert!(v.is_idle());
    }
    for e in p.edges() {
        assert!(e.a < 12 && e.b < 12 && e.a != e.b);
    }
    // Crossing-free at the solved positions.
    let solved: Vec<Point> = p.vertices().iter().map(|v| v.solved).collect();
    let mut edges = p.edges().to_vec();
    assert_eq!(mark_crossings(&mut edges, &solved), 0);
    assert_eq!(p.crossed_remaining(), p.crossed_at_start());
    assert_eq!(p.selected(), None);
    assert!(p.showing_scrambled());
    assert!(!p.is_solved());
}

#[test]
fn same_seed_same_puzzles() {
    let cfg = PuzzleCfg {
        seed: 2018,
        ..PuzzleCfg::default()
    };
    let mut a = Puzzle::with_clock(cfg, ManualClock::new()).unwrap();
    let mut b = Puzzle::with_clock(cfg, ManualClock::new()).unwrap();
    for _ in 0..3 {
        a.next_level();
        b.next_level();
        assert_eq!(a.vertices(), b.vertices());
        assert_eq!(a.edges(), b.edges());
    }
    assert_eq!(a.level_number(), 3);
    assert_eq!(a.vertices().len(), 8);
}

#[test]
fn degenerate_levels_are_valid_and_solve() {
    let mut p = puzzle();
    p.start_level(1);
    assert!(p.edges().is_empty());
    assert_eq!(p.crossed_remaining(), 0);
    p.tick();
    assert!(p.is_solved());

    p.start_level(0);
    assert!(p.vertices().is_empty());
    assert_eq!(p.select_at(Point::new(400, 300)), None);
    assert!(!p.begin_drag(0));
    p.update_drag(Point::new(1, 1));
    assert_eq!(p.level_number(), 2);
}

#[test]
fn square_scrambles_into_two_crossed_edges() {
    let mut p = puzzle();
    p.start_level_from(&square());
    assert_eq!(p.total_edges(), 5);
    assert_eq!(p.crossed_at_start(), 2);
    let crossed: Vec<(usize, usize)> = p
        .edges()
        .iter()
        .filter(|e| e.crossed)
        .map(|e| (e.a, e.b))
        .collect();
    assert_eq!(crossed, vec![(2, 0), (3, 1)]);
    assert_eq!(p.vertex_status(0), Some(VertexStatus::SomeCrossed));
    assert_eq!(p.vertex_status(4), None);
}

#[test]
fn drag_recounts_and_solve_stamps_once() {
    let mut p = puzzle();
    p.clock().set(Duration::from_secs(100));
    p.start_level_from(&square());
    let solved = square();
    for (i, &target) in solved.iter().enumerate() {
        assert!(p.begin_drag(i));
        p.update_drag(target);
        let mut edges = p.edges().to_vec();
        assert_eq!(
            mark_crossings(&mut edges, &displayed(&p)),
            p.crossed_remaining()
        );
        assert_eq!(p.vertices()[i].scrambled, target);
        p.end_drag();
    }
    assert_eq!(p.crossed_remaining(), 0);

    // Still holding a vertex: not solved yet.
    assert!(p.begin_drag(0));
    p.clock().advance(Duration::from_secs(7));
    assert!(!p.recheck_solved());
    p.end_drag();

    p.tick();
    assert!(p.is_solved());
    assert_eq!(p.finished_at(), Some(Duration::from_secs(7)));

    p.clock().advance(Duration::from_secs(30));
    assert!(p.recheck_solved());
    p.tick();
    assert_eq!(p.finished_at(), Some(Duration::from_secs(7)));
    assert_eq!(p.elapsed(), Duration::from_secs(7));
    assert!(!p.begin_drag(1));
}

#[test]
fn update_drag_without_drag_is_noop() {
    let mut p = puzzle();
    p.start_level_from(&square());
    let before = displayed(&p);
    p.update_drag(Point::new(300, 300));
    assert_eq!(displayed(&p), before);
    assert!(!p.begin_drag(4));
    assert_eq!(p.selected(), None);
}

#[test]
fn toggle_animates_to_solved_in_ten_ticks() {
    let mut p = puzzle();
    p.start_level_from(&square());
    assert!(p.begin_drag(0));
    p.toggle_transform();
    assert_eq!(p.selected(), None);
    assert!(!p.showing_scrambled());
    assert!(p.vertices().iter().all(|v| v.motion() == Motion::ToSolved));

    for _ in 0..9 {
        p.tick();
        assert!(p.is_animating());
        assert!(!p.is_solved());
    }
    p.tick();
    assert!(!p.is_animating());
    let solved: Vec<Point> = p.vertices().iter().map(|v| v.solved).collect();
    assert_eq!(displayed(&p), solved);
    assert_eq!(p.crossed_remaining(), 0);
    assert!(p.is_solved());

    p.toggle_transform();
    assert!(p.showing_scrambled());
    for _ in 0..10 {
        p.tick();
    }
    let scrambled: Vec<Point> = p.vertices().iter().map(|v| v.scrambled).collect();
    assert_eq!(displayed(&p), scrambled);
    assert_eq!(p.crossed_remaining(), 2);
    assert!(p.is_solved());
}

#[test]
fn toggle_leaves_animating_vertices_alone() {
    let mut p = puzzle();
    p.start_level_from(&square());
    p.toggle_transform();
    p.tick();
    p.toggle_transform();
    assert!(p.showing_scrambled());
    assert!(p.vertices().iter().all(|v| v.motion() == Motion::ToSolved));
}

#[test]
fn held_vertex_resumes_its_animation_on_release() {
    let mut p = puzzle();
    p.start_level_from(&square());
    p.toggle_transform();
    p.tick();
    p.toggle_transform();
    let held = p.vertices()[0].displayed;
    assert_eq!(p.pointer_down(held), Some(0));

    p.tick();
    assert_eq!(p.vertices()[0].displayed, held);
    assert_eq!(p.vertices()[0].motion(), Motion::ToSolved);

    p.pointer_up();
    for _ in 0..9 {
        p.tick();
    }
    assert_eq!(p.vertices()[0].displayed, p.vertices()[0].solved);
    assert!(!p.is_animating());
}

#[test]
fn pointer_events_follow_layout_and_area() {
    let mut p = puzzle();
    p.start_level_from(&square());
    let v0 = p.vertices()[0].displayed;

    // Miss.
    assert_eq!(p.pointer_down(Point::new(v0.x + 40, v0.y)), None);
    assert_eq!(p.selected(), None);

    // Hit within the pick radius.
    assert_eq!(p.pointer_down(Point::new(v0.x + 3, v0.y - 4)), Some(0));
    p.pointer_move(Point::new(5, 5));
    assert_eq!(p.vertices()[0].displayed, v0);
    p.pointer_move(Point::new(300, 310));
    assert_eq!(p.vertices()[0].displayed, Point::new(300, 310));
    p.pointer_up();
    assert_eq!(p.selected(), None);
    p.pointer_move(Point::new(320, 320));
    assert_eq!(p.vertices()[0].displayed, Point::new(300, 310));

    // No grabbing while the solved layout is showing.
    p.toggle_transform();
    let v1 = p.vertices()[1].displayed;
    assert_eq!(p.pointer_down(v1), None);
}

#[test]
fn pointer_down_on_solved_level_advances() {
    let mut p = puzzle();
    p.start_level_from(&square());
    p.toggle_transform();
    for _ in 0..10 {
        p.tick();
    }
    assert!(p.is_solved());
    assert_eq!(p.pointer_down(Point::new(0, 0)), None);
    assert_eq!(p.level_number(), 2);
    assert_eq!(p.vertices().len(), p.cfg().vertex_count_for(2));
    assert!(!p.is_solved());
    assert_eq!(p.status().level, 2);
}

#[test]
fn reset_layout_undoes_drags() {
    let mut p = puzzle();
    p.start_level_from(&square());
    let start = displayed(&p);
    assert!(p.begin_drag(2));
    p.update_drag(Point::new(250, 250));
    p.reset_layout();
    assert_eq!(displayed(&p), start);
    assert_eq!(p.selected(), None);
    assert_eq!(p.crossed_remaining(), p.crossed_at_start());
}

#[test]
fn status_reports_live_then_frozen_time() {
    let mut p = puzzle();
    p.start_level_from(&square());
    p.clock().advance(Duration::from_millis(4_500));
    let s = p.status();
    assert_eq!(s.level, 1);
    assert_eq!(s.vertices, 4);
    assert_eq!(s.total_edges, 5);
    assert_eq!(s.crossed_at_start, 2);
    assert_eq!(s.crossed_remaining, 2);
    assert!(!s.solved);
    assert_eq!(s.elapsed, Duration::from_millis(4_500));
}
