//! Level layouts: random solved positions and the scramble circle.
//!
//! Purpose
//! - Draw solved positions uniformly inside the play area from a reproducible RNG.
//! - Place vertices evenly on a circle for the scrambled starting layout.
//!
//! Determinism
//! - Each level draws from its own RNG keyed by a replay token `(seed, level)`.
//!   Together with the builder's fixed visitation order, a seed reproduces the
//!   whole sequence of puzzles.

use crate::geom::{Point, Rect};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::PI;

/// Replay token for one level of a seeded game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LevelToken {
    pub seed: u64,
    pub level: u32,
}

impl LevelToken {
    /// Mixing the level in gives each level its own stream, so level `k` replays
    /// from the seed alone without drawing levels `1..k`.
    #[inline]
    pub fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix((self.level as u64).wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// `n` points drawn uniformly from the closed box `[left, right] × [top, bottom]`.
///
/// Duplicates are possible and harmless: the predicates define every degenerate case.
pub fn sample_solved_positions<R: Rng>(area: Rect, n: usize, rng: &mut R) -> Vec<Point> {
    (0..n)
        .map(|_| {
            let x = rng.gen_range(area.left..=area.right());
            let y = rng.gen_range(area.top..=area.bottom());
            Point::new(x, y)
        })
        .collect()
}

/// Scrambled position of vertex `index` out of `n`.
///
/// The circle is centered on the area with radius `radius_frac * min(width, height)`.
/// Angles start a quarter turn in, so vertex 0 sits straight below the center in
/// screen coordinates, and advance by `2π / n`. Coordinates are rounded to integers.
pub fn scramble_position(area: Rect, index: usize, n: usize, radius_frac: f64) -> Point {
    let c = area.center();
    if n == 0 {
        return c;
    }
    let radius = area.min_side() as f64 * radius_frac;
    let angle = PI * (2.0 * index as f64 / n as f64 + 0.5);
    Point::new(
        (c.x as f64 + angle.cos() * radius).round() as i64,
        (c.y as f64 + angle.sin() * radius).round() as i64,
    )
}
