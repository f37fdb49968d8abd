//! Fixed-capacity object pool
//!
//! Every instance is built once up front and then recycled. A pool never
//! allocates after `initialize`; handles move between the free queue and the
//! caller and are never destroyed.

use std::collections::VecDeque;

use rand::RngCore;

use super::error::SpawnError;

/// Index of a spawn category (position in the configured category list)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CategoryId(pub u16);

/// Opaque reference to one pooled instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle {
    category: CategoryId,
    slot: u32,
}

impl Handle {
    /// Category whose pool issued this handle
    pub fn category(&self) -> CategoryId {
        self.category
    }

    pub fn slot(&self) -> u32 {
        self.slot
    }
}

/// Lifecycle hooks the pool runs on its instances
pub trait Poolable {
    /// Reset per-activation state when taken from the pool
    fn on_spawn(&mut self, rng: &mut dyn RngCore);
    /// Clean up when handed back to the pool
    fn on_return(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Free,
    InUse,
}

/// Snapshot of a pool's occupancy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolStats {
    pub capacity: usize,
    pub free: usize,
    pub in_use: usize,
}

/// Bounded, reusable supply of instances for one category
#[derive(Debug)]
pub struct ObjectPool<T> {
    category: CategoryId,
    instances: Vec<T>,
    slots: Vec<Slot>,
    free: VecDeque<u32>,
}

impl<T: Poolable> ObjectPool<T> {
    /// Build `capacity` deactivated instances and queue them all as free
    pub fn initialize(category: CategoryId, capacity: u32, mut factory: impl FnMut(u32) -> T) -> Self {
        let mut instances = Vec::with_capacity(capacity as usize);
        for slot in 0..capacity {
            let mut instance = factory(slot);
            instance.on_return();
            instances.push(instance);
        }

        Self {
            category,
            instances,
            slots: vec![Slot::Free; capacity as usize],
            free: (0..capacity).collect(),
        }
    }

    /// Take the oldest free instance, running its spawn hook.
    ///
    /// `None` means the category is exhausted, which is not an error.
    pub fn acquire(&mut self, rng: &mut dyn RngCore) -> Option<Handle> {
        let slot = self.free.pop_front()?;
        self.slots[slot as usize] = Slot::InUse;
        self.instances[slot as usize].on_spawn(rng);
        Some(Handle {
            category: self.category,
            slot,
        })
    }

    /// Run the return hook and queue the instance at the back of the free queue
    pub fn release(&mut self, handle: Handle) -> Result<(), SpawnError> {
        let idx = self.index_of(handle)?;
        if self.slots[idx] == Slot::Free {
            return Err(SpawnError::DoubleRelease(handle));
        }

        self.instances[idx].on_return();
        self.slots[idx] = Slot::Free;
        self.free.push_back(handle.slot);
        Ok(())
    }

    fn index_of(&self, handle: Handle) -> Result<usize, SpawnError> {
        let idx = handle.slot as usize;
        if handle.category != self.category || idx >= self.instances.len() {
            return Err(SpawnError::ForeignHandle {
                handle,
                pool: self.category.0,
            });
        }
        Ok(idx)
    }
}

impl<T> ObjectPool<T> {
    pub fn capacity(&self) -> usize {
        self.instances.len()
    }

    pub fn free_len(&self) -> usize {
        self.free.len()
    }

    pub fn in_use(&self) -> usize {
        self.instances.len() - self.free.len()
    }

    pub fn stats(&self) -> PoolStats {
        PoolStats {
            capacity: self.capacity(),
            free: self.free_len(),
            in_use: self.in_use(),
        }
    }

    /// Whether `handle` was issued by this pool and is currently free
    pub fn is_free(&self, handle: Handle) -> bool {
        handle.category == self.category
            && self.slots.get(handle.slot as usize) == Some(&Slot::Free)
    }

    /// Free handles in queue order (front is next to be acquired)
    pub fn free_handles(&self) -> impl Iterator<Item = Handle> + '_ {
        self.free.iter().map(move |&slot| Handle {
            category: self.category,
            slot,
        })
    }

    pub fn get(&self, handle: Handle) -> Option<&T> {
        if handle.category != self.category {
            return None;
        }
        self.instances.get(handle.slot as usize)
    }

    pub fn get_mut(&mut self, handle: Handle) -> Option<&mut T> {
        if handle.category != self.category {
            return None;
        }
        self.instances.get_mut(handle.slot as usize)
    }
}
