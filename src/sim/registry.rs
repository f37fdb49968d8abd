//! Live placement registry
//!
//! Insertion-ordered list of everything currently placed. Lookups are linear
//! scans; the registry never holds more than the sum of pool capacities.

use glam::Vec3;

use super::pool::{CategoryId, Handle};

/// One active (position, category, handle) record
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub pos: Vec3,
    pub category: CategoryId,
    pub handle: Handle,
}

#[derive(Debug, Clone, Default)]
pub struct PlacementRegistry {
    entries: Vec<Placement>,
}

impl PlacementRegistry {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Placement> {
        self.entries.iter()
    }

    pub fn insert(&mut self, placement: Placement) {
        self.entries.push(placement);
    }

    /// Remove the first entry holding `handle`, keeping the order of the rest
    pub fn remove(&mut self, handle: Handle) -> Option<Placement> {
        let idx = self.entries.iter().position(|p| p.handle == handle)?;
        Some(self.entries.remove(idx))
    }

    pub fn contains(&self, handle: Handle) -> bool {
        self.entries.iter().any(|p| p.handle == handle)
    }

    /// Number of live entries for one category
    pub fn count_for(&self, category: CategoryId) -> usize {
        self.entries.iter().filter(|p| p.category == category).count()
    }

    /// True if `pos` is at least `safe_radius` from every entry
    pub fn is_clear(&self, pos: Vec3, safe_radius: f32) -> bool {
        let min_sq = safe_radius * safe_radius;
        self.entries
            .iter()
            .all(|p| p.pos.distance_squared(pos) >= min_sq)
    }

    /// Handles of entries within `radius` of `pos`, in insertion order
    pub fn within(&self, pos: Vec3, radius: f32) -> Vec<Handle> {
        let r_sq = radius * radius;
        self.entries
            .iter()
            .filter(|p| p.pos.distance_squared(pos) <= r_sq)
            .map(|p| p.handle)
            .collect()
    }

    /// Smallest pairwise distance between live entries
    pub fn min_separation(&self) -> Option<f32> {
        let mut best: Option<f32> = None;
        for (i, a) in self.entries.iter().enumerate() {
            for b in &self.entries[i + 1..] {
                let d = a.pos.distance(b.pos);
                best = Some(best.map_or(d, |m| m.min(d)));
            }
        }
        best
    }
}
