//! Spawnable bodies and their pool hooks

use glam::Vec3;
use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

use super::pool::Poolable;
use crate::consts::{COMET_MAX_SPIN, COMET_MIN_SPIN};

/// Body types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BodyKind {
    /// Obstacle - ends the run on contact
    Comet,
    Carrot,
    Cabbage,
    Coin,
}

impl BodyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BodyKind::Comet => "Comet",
            BodyKind::Carrot => "Carrot",
            BodyKind::Cabbage => "Cabbage",
            BodyKind::Coin => "Coin",
        }
    }

    pub fn is_obstacle(&self) -> bool {
        matches!(self, BodyKind::Comet)
    }
}

/// One pooled instance of a category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Body {
    pub kind: BodyKind,
    /// Points awarded on collection
    pub value: u32,
    pub pos: Vec3,
    pub vel: Vec3,
    /// Yaw spin in degrees/sec (comets only)
    pub rotation_speed: f32,
    /// Current yaw in degrees
    pub yaw: f32,
    pub collider_enabled: bool,
    pub visible: bool,
    /// Placed in the world (set by the director, not the pool)
    pub active: bool,
}

impl Body {
    /// Inactive instance built from a category template
    pub fn new(kind: BodyKind, value: u32) -> Self {
        Self {
            kind,
            value,
            pos: Vec3::ZERO,
            vel: Vec3::ZERO,
            rotation_speed: 0.0,
            yaw: 0.0,
            collider_enabled: false,
            visible: false,
            active: false,
        }
    }

    /// Position the body and switch it on
    pub fn place(&mut self, pos: Vec3) {
        self.pos = pos;
        self.active = true;
    }

    /// Advance spin by dt
    pub fn spin(&mut self, dt: f32) {
        if self.active && self.rotation_speed != 0.0 {
            self.yaw = (self.yaw + self.rotation_speed * dt).rem_euclid(360.0);
        }
    }
}

impl Poolable for Body {
    fn on_spawn(&mut self, rng: &mut dyn RngCore) {
        match self.kind {
            BodyKind::Comet => {
                self.rotation_speed = rng.random_range(COMET_MIN_SPIN..COMET_MAX_SPIN);
                self.vel = Vec3::ZERO;
            }
            BodyKind::Carrot | BodyKind::Cabbage | BodyKind::Coin => {}
        }
        self.collider_enabled = true;
        self.visible = true;
    }

    fn on_return(&mut self) {
        self.active = false;
        self.visible = false;
        self.collider_enabled = false;
        self.vel = Vec3::ZERO;
        self.rotation_speed = 0.0;
        self.yaw = 0.0;
    }
}
