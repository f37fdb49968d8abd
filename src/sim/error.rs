//! Spawn system errors
//!
//! Only caller bugs and invalid setup are errors. Running out of pooled
//! objects or space on the band is reported through `SpawnOutcome`.

use super::pool::Handle;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum SpawnError {
    /// Handle passed to `return_handle` has no registry entry
    #[error("unknown handle {0:?}: not in the placement registry")]
    UnknownHandle(Handle),

    /// Handle released to a pool it was not issued by
    #[error("handle {handle:?} does not belong to pool of category {pool}")]
    ForeignHandle { handle: Handle, pool: u16 },

    /// Handle released while already sitting in the free queue
    #[error("handle {0:?} is already free")]
    DoubleRelease(Handle),

    #[error("no spawn categories configured")]
    NoCategories,

    #[error("total spawn weight is zero")]
    ZeroTotalWeight,

    #[error("total spawn weight overflows u32")]
    WeightOverflow,

    #[error("too many categories: {0}")]
    TooManyCategories(usize),

    #[error("invalid spawn band: min radius {min}, max radius {max}")]
    InvalidBand { min: f32, max: f32 },

    #[error("safe radius must be positive, got {0}")]
    InvalidSafeRadius(f32),

    #[error("attempt budget must be at least 1")]
    ZeroAttemptBudget,
}
