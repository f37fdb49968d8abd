//! Weighted category selection
//!
//! Each weight owns a contiguous interval on [0, total). A uniform roll picks
//! the category whose interval contains it, so a zero weight is never chosen.

use rand::Rng;

use super::error::SpawnError;
use super::pool::CategoryId;

#[derive(Debug, Clone)]
pub struct WeightTable {
    weights: Vec<u32>,
    total: u32,
}

impl WeightTable {
    pub fn new(weights: Vec<u32>) -> Result<Self, SpawnError> {
        let total = weights
            .iter()
            .try_fold(0u32, |acc, w| acc.checked_add(*w))
            .ok_or(SpawnError::WeightOverflow)?;
        Ok(Self { weights, total })
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    /// Category owning `roll`, or `None` if `roll` is outside [0, total)
    pub fn pick_with_roll(&self, roll: u32) -> Option<CategoryId> {
        let mut current = 0u32;
        for (i, &w) in self.weights.iter().enumerate() {
            current += w;
            if roll < current {
                return Some(CategoryId(i as u16));
            }
        }
        None
    }

    /// Draw a category; `None` only when every weight is zero
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<CategoryId> {
        if self.total == 0 {
            return None;
        }
        self.pick_with_roll(rng.random_range(0..self.total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_roll_intervals() {
        let table = WeightTable::new(vec![60, 20, 10, 10]).unwrap();
        assert_eq!(table.total(), 100);
        assert_eq!(table.pick_with_roll(0), Some(CategoryId(0)));
        assert_eq!(table.pick_with_roll(59), Some(CategoryId(0)));
        assert_eq!(table.pick_with_roll(60), Some(CategoryId(1)));
        assert_eq!(table.pick_with_roll(79), Some(CategoryId(1)));
        assert_eq!(table.pick_with_roll(80), Some(CategoryId(2)));
        assert_eq!(table.pick_with_roll(90), Some(CategoryId(3)));
        assert_eq!(table.pick_with_roll(99), Some(CategoryId(3)));
        assert_eq!(table.pick_with_roll(100), None);
    }

    #[test]
    fn test_zero_weight_unreachable() {
        let table = WeightTable::new(vec![0, 5, 0, 5]).unwrap();
        for roll in 0..table.total() {
            let id = table.pick_with_roll(roll).unwrap();
            assert!(id == CategoryId(1) || id == CategoryId(3));
        }
    }

    #[test]
    fn test_overflowing_total_rejected() {
        assert_eq!(
            WeightTable::new(vec![u32::MAX, 5]).err(),
            Some(SpawnError::WeightOverflow)
        );
        // Largest representable total still reaches the last category
        let table = WeightTable::new(vec![u32::MAX - 5, 5]).unwrap();
        assert_eq!(table.pick_with_roll(u32::MAX - 1), Some(CategoryId(1)));
    }

    #[test]
    fn test_all_zero_picks_nothing() {
        let mut rng = Pcg32::seed_from_u64(1);
        let table = WeightTable::new(vec![0, 0]).unwrap();
        assert_eq!(table.pick(&mut rng), None);
    }

    #[test]
    fn test_selection_frequency_matches_weights() {
        let mut rng = Pcg32::seed_from_u64(0xC0FFEE);
        let weights = [60u32, 20, 10, 10];
        let table = WeightTable::new(weights.to_vec()).unwrap();
        let trials = 100_000;
        let mut counts = [0u32; 4];
        for _ in 0..trials {
            let id = table.pick(&mut rng).unwrap();
            counts[id.0 as usize] += 1;
        }
        for (i, &w) in weights.iter().enumerate() {
            let observed = counts[i] as f64 / trials as f64;
            let expected = w as f64 / 100.0;
            assert!(
                (observed - expected).abs() < 0.01,
                "category {i}: observed {observed}, expected {expected}"
            );
        }
    }
}
