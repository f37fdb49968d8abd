//! Deterministic simulation module
//!
//! All spawn and gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (registry insertion order, category index)
//! - No rendering or platform dependencies

pub mod band;
pub mod body;
pub mod director;
pub mod error;
pub mod orbit;
pub mod pool;
pub mod registry;
pub mod select;
pub mod state;
pub mod tick;

pub use band::SpawnBand;
pub use body::{Body, BodyKind};
pub use director::{Category, PopulateReport, SpawnDirector, SpawnOutcome};
pub use error::SpawnError;
pub use orbit::{Lane, Orbiter};
pub use pool::{CategoryId, Handle, ObjectPool, PoolStats, Poolable};
pub use registry::{Placement, PlacementRegistry};
pub use select::WeightTable;
pub use state::{GameEvent, GamePhase, GameState, Harvest};
pub use tick::{TickInput, tick};
