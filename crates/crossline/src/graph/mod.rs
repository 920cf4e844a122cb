//! Edge topology of a level: greedy crossing-free construction and crossing marks.
//!
//! - `build_crossing_free` runs once per level on the solved positions.
//! - `mark_crossings` runs after every change to displayed positions and is the
//!   only writer of `Edge::crossed`.
//!
//! Both are plain loops over `geom::segments_intersect`; the builder is
//! O(N² · E) and the detector O(E²), which is fine for tens of vertices.

mod build;
mod detect;
mod types;

pub use build::build_crossing_free;
pub use detect::{count_crossed, mark_crossings};
pub use types::Edge;
