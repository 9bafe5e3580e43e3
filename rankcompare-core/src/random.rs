use std::{cell::RefCell, rc::Rc};

use rand::{RngCore, SeedableRng};

/// Source of randomness for generating test samples.
pub trait RandomProvider {
    /// Returns a random u64.
    fn random_u64(&self) -> u64;

    /// Returns a value in `low..high`. `high` must be greater than `low`.
    fn random_range(&self, low: usize, high: usize) -> usize {
        low + (self.random_u64() % (high - low) as u64) as usize
    }

    /// Fisher-Yates shuffle driven by `random_u64`.
    fn shuffle<T>(&self, elements: &mut [T]) {
        for i in (1..elements.len()).rev() {
            let j = self.random_range(0, i + 1);
            elements.swap(i, j);
        }
    }

    /// A uniformly random permutation of `1..=n`.
    fn permutation(&self, n: usize) -> Vec<u64> {
        let mut elements: Vec<u64> = (1..=n as u64).collect();
        self.shuffle(&mut elements);
        elements
    }

    /// `n` values drawn with replacement from `0..levels`, so ties are likely when `levels < n`.
    fn sample_with_ties(&self, n: usize, levels: usize) -> Vec<u64> {
        (0..n)
            .map(|_| self.random_range(0, levels.max(1)) as u64)
            .collect()
    }
}

#[derive(Debug)]
pub struct TrueRandomProvider;

impl TrueRandomProvider {
    pub fn new() -> Self {
        Self {}
    }
}

impl Default for TrueRandomProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomProvider for TrueRandomProvider {
    fn random_u64(&self) -> u64 {
        rand::random()
    }
}

#[derive(Clone)]
pub struct DeterministicRandomProvider {
    rand: Rc<RefCell<rand_chacha::ChaCha8Rng>>,
}

impl DeterministicRandomProvider {
    pub fn new(seed: u64) -> Self {
        DeterministicRandomProvider {
            rand: Rc::new(RefCell::new(rand_chacha::ChaCha8Rng::seed_from_u64(seed))),
        }
    }
}

impl RandomProvider for DeterministicRandomProvider {
    fn random_u64(&self) -> u64 {
        self.rand.borrow_mut().next_u64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_stream() {
        let a = DeterministicRandomProvider::new(7);
        let b = DeterministicRandomProvider::new(7);
        for _ in 0..10 {
            assert_eq!(a.random_u64(), b.random_u64());
        }
    }

    #[test]
    fn permutation_is_complete() {
        let provider = DeterministicRandomProvider::new(3);
        let mut permutation = provider.permutation(50);
        permutation.sort();
        assert_eq!(permutation, (1..=50).collect::<Vec<u64>>());
    }

    #[test]
    fn ties_stay_in_range() {
        let provider = DeterministicRandomProvider::new(11);
        let sample = provider.sample_with_ties(100, 4);
        assert_eq!(sample.len(), 100);
        assert!(sample.iter().all(|value| *value < 4));
    }

    #[test]
    fn range_bounds() {
        let provider = TrueRandomProvider::new();
        for _ in 0..100 {
            let value = provider.random_range(2, 5);
            assert!((2..5).contains(&value));
        }
    }
}
