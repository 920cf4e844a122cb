//! Engine configuration and its validation error.

use crate::geom::Rect;
use std::fmt;

/// Everything the engine needs from its host, fixed at construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PuzzleCfg {
    /// Play area; solved positions are drawn inside it and drags are clipped to it.
    pub area: Rect,
    /// Maximum pointer distance for a hit. Defaults to the marker diameter (18),
    /// applied as a radius.
    pub pick_radius: f64,
    /// Animation progress added per tick, in (0, 1].
    pub anim_step: f64,
    /// Scramble circle radius as a fraction of the area's shorter side.
    pub scramble_radius_frac: f64,
    /// Vertex count of level 1; each later level adds one.
    pub base_vertices: usize,
    /// Master seed; level `k` draws from the replay token `(seed, k)`.
    pub seed: u64,
}

impl Default for PuzzleCfg {
    fn default() -> Self {
        Self {
            area: Rect::new(0, 0, 800, 600).inset(16),
            pick_radius: 18.0,
            anim_step: 0.1,
            scramble_radius_frac: 0.3,
            base_vertices: 6,
            seed: 0,
        }
    }
}

impl PuzzleCfg {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.area.is_empty() {
            return Err(ConfigError::InvalidArea { area: self.area });
        }
        if !self.pick_radius.is_finite() || self.pick_radius < 0.0 {
            return Err(ConfigError::invalid("pick_radius must be finite and >= 0"));
        }
        if !(self.anim_step > 0.0 && self.anim_step <= 1.0) {
            return Err(ConfigError::invalid("anim_step must lie in (0, 1]"));
        }
        if !(self.scramble_radius_frac > 0.0 && self.scramble_radius_frac <= 0.5) {
            return Err(ConfigError::invalid(
                "scramble_radius_frac must lie in (0, 0.5]",
            ));
        }
        Ok(())
    }

    /// Vertex count for level `level` (1-based).
    #[inline]
    pub fn vertex_count_for(&self, level: u32) -> usize {
        self.base_vertices + level.saturating_sub(1) as usize
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    InvalidArea { area: Rect },
    InvalidParam { reason: String },
}

impl ConfigError {
    fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParam {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArea { area } => write!(
                f,
                "play area must have positive size (got {}x{})",
                area.width, area.height
            ),
            Self::InvalidParam { reason } => write!(f, "invalid puzzle config: {reason}"),
        }
    }
}

impl std::error::Error for ConfigError {}
