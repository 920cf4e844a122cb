//! Exact 2D predicates on integer screen coordinates.
//!
//! Purpose
//! - Decide whether two puzzle edges cross, with no tolerances: coordinates are
//!   integers and the orientation determinant is evaluated in `i128`.
//!
//! Edge-case policy
//! - Segments sharing an exact endpoint never cross, even when collinear and
//!   overlapping. Adjacent edges of the same vertex must not count as tangled.
//! - `on_segment` uses strict bounding-box inequalities on both axes.
//!
//! Code cross-refs: `graph::{build_crossing_free, mark_crossings}`.

mod predicates;
mod types;

pub use predicates::{on_segment, orientation, segments_intersect};
pub use types::{Orientation, Point, Rect};
