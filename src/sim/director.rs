//! Spawn director
//!
//! Owns one pool per category and the placement registry. Each spawn picks a
//! category by weight, takes a handle from that category's pool, then
//! rejection-samples the band for a spot at least `safe_radius` away from
//! every live placement.

use glam::Vec3;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::band::SpawnBand;
use super::body::{Body, BodyKind};
use super::error::SpawnError;
use super::pool::{CategoryId, Handle, ObjectPool, PoolStats};
use super::registry::{Placement, PlacementRegistry};
use super::select::WeightTable;
use crate::config::SpawnConfig;

/// A spawnable category and its pool
#[derive(Debug)]
pub struct Category {
    pub name: String,
    pub kind: BodyKind,
    pub weight: u32,
    pub pool: ObjectPool<Body>,
}

/// Result of a single spawn attempt
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpawnOutcome {
    Placed(Placement),
    /// The drawn category had no free handle
    PoolExhausted { category: CategoryId },
    /// No clear spot within the attempt budget; the handle went back to its pool
    PlacementFailed { category: CategoryId },
}

impl SpawnOutcome {
    pub fn placement(&self) -> Option<&Placement> {
        match self {
            SpawnOutcome::Placed(p) => Some(p),
            _ => None,
        }
    }

    pub fn is_placed(&self) -> bool {
        matches!(self, SpawnOutcome::Placed(_))
    }
}

/// Tally of an initial population pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PopulateReport {
    pub requested: u32,
    pub attempts: u32,
    pub placed: u32,
    pub exhausted: u32,
    pub placement_failed: u32,
}

#[derive(Debug)]
pub struct SpawnDirector {
    categories: Vec<Category>,
    weights: WeightTable,
    band: SpawnBand,
    safe_radius: f32,
    max_attempts: u32,
    /// Orbited body position; samples are taken around it
    center: Vec3,
    registry: PlacementRegistry,
    rng: Pcg32,
}

impl SpawnDirector {
    /// Build every pool up front from the category templates
    pub fn new(config: &SpawnConfig, seed: u64) -> Result<Self, SpawnError> {
        config.validate()?;
        let band = config.band()?;

        let categories: Vec<Category> = config
            .categories
            .iter()
            .enumerate()
            .map(|(i, c)| Category {
                name: c.name.clone(),
                kind: c.kind,
                weight: c.weight,
                pool: ObjectPool::initialize(CategoryId(i as u16), c.pool_size, |_| {
                    Body::new(c.kind, c.value)
                }),
            })
            .collect();

        let weights = WeightTable::new(categories.iter().map(|c| c.weight).collect())?;
        let total_capacity: usize = categories.iter().map(|c| c.pool.capacity()).sum();

        log::info!(
            "Spawn director: {} categories, {} pooled bodies, band {}..{}, safe radius {}",
            categories.len(),
            total_capacity,
            band.min_radius,
            band.max_radius,
            config.safe_radius
        );

        Ok(Self {
            categories,
            weights,
            band,
            safe_radius: config.safe_radius,
            max_attempts: config.max_attempts,
            center: Vec3::ZERO,
            registry: PlacementRegistry::with_capacity(total_capacity),
            rng: Pcg32::seed_from_u64(seed),
        })
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    /// Move the orbited body; only affects later samples
    pub fn set_center(&mut self, center: Vec3) {
        self.center = center;
    }

    pub fn band(&self) -> SpawnBand {
        self.band
    }

    pub fn safe_radius(&self) -> f32 {
        self.safe_radius
    }

    pub fn registry(&self) -> &PlacementRegistry {
        &self.registry
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category(&self, id: CategoryId) -> Option<&Category> {
        self.categories.get(id.0 as usize)
    }

    pub fn pool_stats(&self, id: CategoryId) -> Option<PoolStats> {
        self.category(id).map(|c| c.pool.stats())
    }

    pub fn body(&self, handle: Handle) -> Option<&Body> {
        self.category(handle.category())?.pool.get(handle)
    }

    /// Densest initial field the band supports at `safe_radius` spacing
    pub fn max_initial_count(&self) -> u32 {
        self.band.max_placements(self.safe_radius)
    }

    /// Run up to `min(requested, max_initial_count)` independent spawn attempts.
    ///
    /// Failed attempts are skipped, not retried.
    pub fn populate_initial(&mut self, requested: u32) -> Result<PopulateReport, SpawnError> {
        let mut report = PopulateReport {
            requested,
            ..Default::default()
        };

        let count = requested.min(self.max_initial_count());
        for _ in 0..count {
            report.attempts += 1;
            match self.spawn_one()? {
                SpawnOutcome::Placed(_) => report.placed += 1,
                SpawnOutcome::PoolExhausted { .. } => report.exhausted += 1,
                SpawnOutcome::PlacementFailed { .. } => report.placement_failed += 1,
            }
        }

        log::info!(
            "Initial population: {}/{} placed ({} requested, {} exhausted, {} no room)",
            report.placed,
            report.attempts,
            requested,
            report.exhausted,
            report.placement_failed
        );
        Ok(report)
    }

    /// Select, acquire, place. Soft failures come back as `SpawnOutcome`.
    pub fn spawn_one(&mut self) -> Result<SpawnOutcome, SpawnError> {
        let id = self
            .weights
            .pick(&mut self.rng)
            .ok_or(SpawnError::ZeroTotalWeight)?;
        let idx = id.0 as usize;

        // An exhausted pool aborts this attempt. No fallback to another category.
        let Some(handle) = self.categories[idx].pool.acquire(&mut self.rng) else {
            log::debug!("Spawn skipped: {} pool exhausted", self.categories[idx].name);
            return Ok(SpawnOutcome::PoolExhausted { category: id });
        };

        let Some(pos) = self.find_position() else {
            self.categories[idx].pool.release(handle)?;
            log::debug!(
                "Spawn skipped: no room for {} after {} attempts",
                self.categories[idx].name,
                self.max_attempts
            );
            return Ok(SpawnOutcome::PlacementFailed { category: id });
        };

        if let Some(body) = self.categories[idx].pool.get_mut(handle) {
            body.place(pos);
        }
        let placement = Placement {
            pos,
            category: id,
            handle,
        };
        self.registry.insert(placement);
        log::debug!("Spawned {} at {:?}", self.categories[idx].name, pos);

        Ok(SpawnOutcome::Placed(placement))
    }

    /// Rejection-sample the band for a clear position
    pub fn find_position(&mut self) -> Option<Vec3> {
        for _ in 0..self.max_attempts {
            let candidate = self.band.sample(self.center, &mut self.rng);
            if self.registry.is_clear(candidate, self.safe_radius) {
                return Some(candidate);
            }
        }
        None
    }

    /// Evict a placement and hand its body back to the pool
    pub fn return_handle(&mut self, handle: Handle) -> Result<Placement, SpawnError> {
        if !self.registry.contains(handle) {
            log::warn!("Return of unknown handle {:?}", handle);
            return Err(SpawnError::UnknownHandle(handle));
        }

        let category = self
            .categories
            .get_mut(handle.category().0 as usize)
            .ok_or(SpawnError::UnknownHandle(handle))?;
        if let Err(e) = category.pool.release(handle) {
            log::warn!("Pool rejected return of {:?}: {}", handle, e);
            return Err(e);
        }

        let placement = self
            .registry
            .remove(handle)
            .ok_or(SpawnError::UnknownHandle(handle))?;
        log::debug!("Returned {} to pool", category.name);
        Ok(placement)
    }

    /// Handles of placements within `radius` of `pos`
    pub fn contacts(&self, pos: Vec3, radius: f32) -> Vec<Handle> {
        self.registry.within(pos, radius)
    }

    /// Advance per-body animation for everything placed
    pub fn spin_bodies(&mut self, dt: f32) {
        for placement in self.registry.iter() {
            if let Some(body) = self
                .categories
                .get_mut(placement.category.0 as usize)
                .and_then(|c| c.pool.get_mut(placement.handle))
            {
                body.spin(dt);
            }
        }
    }
}
