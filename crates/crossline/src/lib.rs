//! Geometric engine for the "crossed lines" untangle puzzle.
//!
//! A level is a set of vertices joined by a fixed edge set that is crossing-free
//! at the vertices' solved positions. The vertices start on a circle where the
//! same edges cross; the player drags them until no edge crosses another.
//!
//! Layout
//! - `geom`: exact integer predicates (orientation, segment intersection).
//! - `graph`: greedy crossing-free builder and the crossing detector.
//! - `vertex`: per-vertex positions and the tick-driven animation state machine.
//! - `rand`: reproducible solved-position sampling and the scramble circle.
//! - `puzzle`: the level aggregate, configuration, clock seam and pointer handling.
//!
//! The engine is single-threaded and frame-stepped: a driver calls `Puzzle::tick`
//! once per frame and the pointer methods once per input event. Nothing blocks.

pub mod geom;
pub mod graph;
pub mod puzzle;
pub mod rand;
pub mod vertex;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom::{orientation, segments_intersect, Orientation, Point, Rect};
pub use graph::{build_crossing_free, mark_crossings, Edge};
pub use puzzle::{
    Clock, ConfigError, LevelStatus, ManualClock, MonotonicClock, Puzzle, PuzzleCfg,
    VertexStatus,
};
pub use vertex::{Motion, Vertex};

/// Common exports for drivers and tests.
pub mod prelude {
    pub use crate::geom::{on_segment, orientation, segments_intersect, Orientation, Point, Rect};
    pub use crate::graph::{build_crossing_free, count_crossed, mark_crossings, Edge};
    pub use crate::puzzle::{
        Clock, ConfigError, LevelStatus, ManualClock, MonotonicClock, Puzzle, PuzzleCfg,
        VertexStatus,
    };
    pub use crate::rand::{sample_solved_positions, scramble_position, LevelToken};
    pub use crate::vertex::{Motion, Vertex};
    pub use nalgebra::Vector2;
}
