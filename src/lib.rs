//! Orbit Spawn - pooled object spawning around an orbited body
//!
//! Core modules:
//! - `sim`: Deterministic simulation (pools, spawn director, orbit, game state)
//! - `config`: Data-driven spawn and orbit tuning

pub mod config;
pub mod sim;

pub use config::{CategoryConfig, Config, ConfigError, OrbitConfig, SpawnConfig};

use glam::{Vec2, Vec3};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Spawn band defaults
    pub const DEFAULT_MIN_RADIUS: f32 = 5.0;
    pub const DEFAULT_MAX_RADIUS: f32 = 25.0;
    /// Minimum distance between two live placements
    pub const DEFAULT_SAFE_RADIUS: f32 = 1.5;
    pub const DEFAULT_INITIAL_SPAWN_COUNT: u32 = 30;
    /// Rejection-sampling budget per spawn
    pub const DEFAULT_MAX_ATTEMPTS: u32 = 30;
    pub const DEFAULT_POOL_SIZE: u32 = 20;

    /// Player orbit defaults
    pub const ORBIT_RADIUS: f32 = 5.0;
    pub const ORBIT_SPEED: f32 = 2.0; // radians per second
    pub const LANE_WIDTH: f32 = 2.0;
    pub const LANE_CHANGE_SPEED: f32 = 10.0;
    /// Fastest accepted orbit, either direction (radians per second)
    pub const MAX_ORBIT_SPEED: f32 = 100.0;

    /// Seconds between timed spawns
    pub const SPAWN_INTERVAL: f32 = 1.0;
    /// Player pickup/collision reach
    pub const CONTACT_RADIUS: f32 = 1.0;

    /// Comet spin range (degrees per second)
    pub const COMET_MIN_SPIN: f32 = 10.0;
    pub const COMET_MAX_SPIN: f32 = 30.0;
}

/// Normalized angle to [-π, π)
#[inline]
pub fn normalize_angle(angle: f32) -> f32 {
    use std::f32::consts::{PI, TAU};
    let wrapped = (angle + PI).rem_euclid(TAU);
    // rem_euclid can round up to TAU for tiny negative inputs
    if wrapped >= TAU { -PI } else { wrapped - PI }
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

/// World-space point on the ground plane around `center`.
///
/// The plane is XZ: polar x maps to world x, polar y to world z, and the
/// height is taken from the center.
#[inline]
pub fn ground_point(center: Vec3, r: f32, theta: f32) -> Vec3 {
    let p = polar_to_cartesian(r, theta);
    center + Vec3::new(p.x, 0.0, p.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn test_normalize_angle() {
        assert!((normalize_angle(1.5 * PI) + PI / 2.0).abs() < 1e-5);
        assert!((normalize_angle(-PI / 2.0) + PI / 2.0).abs() < 1e-6);
        assert!((normalize_angle(2.0 * PI)).abs() < 1e-5);
        assert!((normalize_angle(-2.5 * PI) + PI / 2.0).abs() < 1e-5);
        // Boundary lands on either end of the range
        assert!((normalize_angle(3.0 * PI).abs() - PI).abs() < 1e-5);
    }

    #[test]
    fn test_normalize_angle_huge_input_stays_in_range() {
        for angle in [1e30_f32, -1e30, 1e10, -7.5e20, f32::MAX] {
            let a = normalize_angle(angle);
            assert!(a.is_finite());
            assert!((-PI..=PI).contains(&a), "{angle} -> {a}");
        }
    }

    #[test]
    fn test_ground_point_lies_on_xz_plane() {
        let center = Vec3::new(1.0, 4.0, -2.0);
        let p = ground_point(center, 10.0, PI / 2.0);
        assert!((p.y - 4.0).abs() < 1e-6);
        assert!((p.x - 1.0).abs() < 1e-4);
        assert!((p.z - 8.0).abs() < 1e-4);
        assert!((p.distance(center) - 10.0).abs() < 1e-4);
    }
}
