//! Player orbit with three lanes
//!
//! The player circles the orbited body at a fixed angular speed. Steering
//! picks a lane; the lane offset eases toward it and is applied radially.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::config::OrbitConfig;
use crate::{ground_point, normalize_angle};

/// Lane selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Lane {
    /// Inside the orbit
    Left,
    #[default]
    Center,
    /// Outside the orbit
    Right,
}

impl Lane {
    pub fn sign(&self) -> f32 {
        match self {
            Lane::Left => -1.0,
            Lane::Center => 0.0,
            Lane::Right => 1.0,
        }
    }
}

/// Steer deadzone; inputs inside it keep the current lane
const STEER_THRESHOLD: f32 = 0.5;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Orbiter {
    /// Current angle around the center (radians, normalized to [-π, π))
    pub theta: f32,
    pub target_lane: Lane,
    /// Current radial offset from the orbit line
    pub lane_offset: f32,
    pub orbit_radius: f32,
    pub orbit_speed: f32,
    pub lane_width: f32,
    pub lane_change_speed: f32,
}

impl Orbiter {
    pub fn new(config: &OrbitConfig) -> Self {
        Self {
            theta: 0.0,
            target_lane: Lane::Center,
            lane_offset: 0.0,
            orbit_radius: config.orbit_radius,
            orbit_speed: config.orbit_speed,
            lane_width: config.lane_width,
            lane_change_speed: config.lane_change_speed,
        }
    }

    /// Pick a lane from a horizontal steer axis in [-1, 1]
    pub fn steer(&mut self, axis: f32) {
        if axis < -STEER_THRESHOLD {
            self.target_lane = Lane::Left;
        } else if axis > STEER_THRESHOLD {
            self.target_lane = Lane::Right;
        }
    }

    /// Advance one step and return the new world position
    pub fn advance(&mut self, center: Vec3, dt: f32) -> Vec3 {
        self.theta = normalize_angle(self.theta + self.orbit_speed * dt);

        let target = self.target_lane.sign() * self.lane_width;
        let t = (self.lane_change_speed * dt).clamp(0.0, 1.0);
        self.lane_offset += (target - self.lane_offset) * t;

        self.position(center)
    }

    /// Current world position around `center`
    pub fn position(&self, center: Vec3) -> Vec3 {
        ground_point(center, self.effective_radius(), self.theta)
    }

    pub fn effective_radius(&self) -> f32 {
        (self.orbit_radius + self.lane_offset).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;

    #[test]
    fn test_steer_deadzone_keeps_lane() {
        let mut orbiter = Orbiter::new(&OrbitConfig::default());
        orbiter.steer(0.9);
        assert_eq!(orbiter.target_lane, Lane::Right);
        orbiter.steer(0.2);
        assert_eq!(orbiter.target_lane, Lane::Right);
        orbiter.steer(-0.7);
        assert_eq!(orbiter.target_lane, Lane::Left);
    }

    #[test]
    fn test_lane_offset_eases_toward_target() {
        let mut orbiter = Orbiter::new(&OrbitConfig::default());
        orbiter.steer(1.0);
        let first = {
            orbiter.advance(Vec3::ZERO, SIM_DT);
            orbiter.lane_offset
        };
        assert!(first > 0.0 && first < orbiter.lane_width);

        for _ in 0..600 {
            orbiter.advance(Vec3::ZERO, SIM_DT);
        }
        assert!((orbiter.lane_offset - orbiter.lane_width).abs() < 1e-3);
        let pos = orbiter.position(Vec3::ZERO);
        assert!((pos.length() - (orbiter.orbit_radius + orbiter.lane_width)).abs() < 1e-2);
    }

    #[test]
    fn test_orbit_advances_angle() {
        let mut orbiter = Orbiter::new(&OrbitConfig::default());
        let center = Vec3::new(0.0, 1.0, 0.0);
        let pos = orbiter.advance(center, 0.5);
        assert!((orbiter.theta - 1.0).abs() < 1e-5);
        assert!((pos.y - 1.0).abs() < 1e-6);
        assert!((pos.distance(center) - orbiter.orbit_radius).abs() < 1e-4);
    }

    #[test]
    fn test_fast_orbit_keeps_angle_bounded() {
        let mut orbiter = Orbiter::new(&OrbitConfig::default());
        orbiter.orbit_speed = 1e30;
        for _ in 0..3 {
            orbiter.advance(Vec3::ZERO, SIM_DT);
            assert!(orbiter.theta.is_finite());
            assert!(orbiter.theta.abs() <= std::f32::consts::PI);
        }
    }
}
