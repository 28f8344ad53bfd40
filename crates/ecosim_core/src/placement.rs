//! Random placement of new entities under a minimum-separation constraint.
//!
//! The placer is stateless: callers pass the currently occupied positions and
//! register the returned point themselves by adding the entity it was drawn
//! for.

use crate::config::PlacementConfig;
use crate::error::{EcosystemError, Result};
use ecosim_data::Position;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Inclusive rectangle on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: i32,
    pub max_x: i32,
    pub min_y: i32,
    pub max_y: i32,
}

impl Bounds {
    #[must_use]
    pub const fn new(min_x: i32, max_x: i32, min_y: i32, max_y: i32) -> Self {
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_x > self.max_x || self.min_y > self.max_y {
            return Err(EcosystemError::InvalidBounds(format!(
                "x {}..={}, y {}..={}",
                self.min_x, self.max_x, self.min_y, self.max_y
            )));
        }
        Ok(())
    }

    #[must_use]
    pub fn contains(&self, p: Position) -> bool {
        (self.min_x..=self.max_x).contains(&p.x) && (self.min_y..=self.max_y).contains(&p.y)
    }

    #[must_use]
    pub fn clamp(&self, p: Position) -> Position {
        Position::new(
            p.x.clamp(self.min_x, self.max_x),
            p.y.clamp(self.min_y, self.max_y),
        )
    }
}

#[must_use]
pub fn distance(a: Position, b: Position) -> f64 {
    let dx = f64::from(a.x) - f64::from(b.x);
    let dy = f64::from(a.y) - f64::from(b.y);
    dx.hypot(dy)
}

/// Strictly closer than `min_distance`.
#[must_use]
pub fn is_too_close(a: Position, b: Position, min_distance: f64) -> bool {
    distance(a, b) < min_distance
}

fn nearest_distance(candidate: Position, existing: &[Position]) -> f64 {
    existing
        .iter()
        .map(|&p| distance(candidate, p))
        .fold(f64::INFINITY, f64::min)
}

#[derive(Debug, Clone)]
pub struct Placer {
    pub min_distance: f64,
    pub max_attempts: u32,
    pub relax_on_exhaustion: bool,
}

impl Default for Placer {
    fn default() -> Self {
        Self::from(&PlacementConfig::default())
    }
}

impl From<&PlacementConfig> for Placer {
    fn from(config: &PlacementConfig) -> Self {
        Self {
            min_distance: config.min_distance,
            max_attempts: config.max_attempts.max(1),
            relax_on_exhaustion: config.relax_on_exhaustion,
        }
    }
}

impl Placer {
    /// Draws uniform points in `bounds` until one is at least `min_distance`
    /// away from every point in `existing`.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        bounds: &Bounds,
        existing: &[Position],
        rng: &mut R,
    ) -> Result<Position> {
        bounds.validate()?;

        let mut best: Option<(Position, f64)> = None;
        for _ in 0..self.max_attempts {
            let candidate = Position::new(
                rng.gen_range(bounds.min_x..=bounds.max_x),
                rng.gen_range(bounds.min_y..=bounds.max_y),
            );
            let nearest = nearest_distance(candidate, existing);
            if nearest >= self.min_distance {
                return Ok(candidate);
            }
            if best.map_or(true, |(_, d)| nearest > d) {
                best = Some((candidate, nearest));
            }
        }

        match best {
            Some((position, nearest)) if self.relax_on_exhaustion => {
                tracing::warn!(
                    attempts = self.max_attempts,
                    min_distance = self.min_distance,
                    nearest = nearest,
                    "Placement relaxed to the most isolated candidate"
                );
                Ok(position)
            }
            _ => Err(EcosystemError::PlacementExhausted {
                min_distance: self.min_distance,
                attempts: self.max_attempts,
            }),
        }
    }
}
