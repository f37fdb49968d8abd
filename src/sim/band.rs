//! Spawn band geometry
//!
//! An annulus around the orbited body, in polar space:
//! - min_radius: inner edge
//! - max_radius: outer edge
//!
//! Candidate positions are drawn with a uniform angle and a uniform radius,
//! so density is higher near the inner edge than the outer edge.

use glam::Vec3;
use rand::Rng;

use super::error::SpawnError;
use crate::ground_point;

/// Annular region where spawns may land
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnBand {
    pub min_radius: f32,
    pub max_radius: f32,
}

impl SpawnBand {
    pub fn new(min_radius: f32, max_radius: f32) -> Result<Self, SpawnError> {
        let valid = min_radius.is_finite()
            && max_radius.is_finite()
            && min_radius >= 0.0
            && min_radius <= max_radius;
        if !valid {
            return Err(SpawnError::InvalidBand {
                min: min_radius,
                max: max_radius,
            });
        }
        Ok(Self {
            min_radius,
            max_radius,
        })
    }

    /// Centerline radius of the band
    #[inline]
    pub fn mid_radius(&self) -> f32 {
        (self.min_radius + self.max_radius) / 2.0
    }

    /// Circumference at the centerline
    #[inline]
    pub fn circumference(&self) -> f32 {
        std::f32::consts::TAU * self.mid_radius()
    }

    /// Densest count of placements the centerline supports at `safe_radius` spacing
    pub fn max_placements(&self, safe_radius: f32) -> u32 {
        if safe_radius <= 0.0 {
            return 0;
        }
        (self.circumference() / safe_radius).floor() as u32
    }

    /// Radial containment check (relative to `center`, ignoring height)
    pub fn contains(&self, center: Vec3, point: Vec3) -> bool {
        let d = point - center;
        let r = (d.x * d.x + d.z * d.z).sqrt();
        // Small slack for float rounding on the edges
        r >= self.min_radius - 1e-3 && r <= self.max_radius + 1e-3
    }

    /// Draw one candidate position around `center`
    pub fn sample<R: Rng + ?Sized>(&self, center: Vec3, rng: &mut R) -> Vec3 {
        let theta = rng.random_range(0.0..std::f32::consts::TAU);
        let r = rng.random_range(self.min_radius..=self.max_radius);
        ground_point(center, r, theta)
    }
}
