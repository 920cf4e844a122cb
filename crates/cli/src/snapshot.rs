//! JSON views of the engine state.

use crossline::{Clock, Point, Puzzle, PuzzleCfg, VertexStatus};
use serde_json::{json, Value};

fn xy(p: Point) -> Value {
    json!([p.x, p.y])
}

fn status_name(s: VertexStatus) -> &'static str {
    match s {
        VertexStatus::NoneCrossed => "none_crossed",
        VertexStatus::AllCrossed => "all_crossed",
        VertexStatus::SomeCrossed => "some_crossed",
    }
}

pub fn cfg_json(cfg: &PuzzleCfg) -> Value {
    json!({
        "area": {
            "left": cfg.area.left,
            "top": cfg.area.top,
            "width": cfg.area.width,
            "height": cfg.area.height
        },
        "pick_radius": cfg.pick_radius,
        "anim_step": cfg.anim_step,
        "scramble_radius_frac": cfg.scramble_radius_frac,
        "base_vertices": cfg.base_vertices,
        "seed": cfg.seed
    })
}

/// Counters line used by logs and `stats`.
pub fn status_json<C: Clock>(p: &Puzzle<C>) -> Value {
    let s = p.status();
    json!({
        "level": s.level,
        "vertices": s.vertices,
        "total_edges": s.total_edges,
        "crossed_at_start": s.crossed_at_start,
        "crossed_remaining": s.crossed_remaining,
        "solved": s.solved,
        "elapsed_s": s.elapsed.as_secs()
    })
}

/// Full level snapshot: config, counters, vertices and edges.
pub fn snapshot<C: Clock>(p: &Puzzle<C>) -> Value {
    let vertices: Vec<Value> = p
        .vertices()
        .iter()
        .map(|v| {
            let status = p
                .vertex_status(v.index)
                .map(status_name)
                .unwrap_or("none_crossed");
            json!({
                "index": v.index,
                "solved": xy(v.solved),
                "scrambled": xy(v.scrambled),
                "displayed": xy(v.displayed),
                "status": status
            })
        })
        .collect();
    let edges: Vec<Value> = p
        .edges()
        .iter()
        .map(|e| json!({"a": e.a, "b": e.b, "crossed": e.crossed}))
        .collect();
    json!({
        "cfg": cfg_json(p.cfg()),
        "status": status_json(p),
        "showing_scrambled": p.showing_scrambled(),
        "selected": p.selected(),
        "vertices": vertices,
        "edges": edges
    })
}
