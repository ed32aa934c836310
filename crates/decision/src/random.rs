use rand::{Rng, SeedableRng, rngs::StdRng};

/// Uniform choice over a non-empty sequence.
pub trait RandomSource {
    /// Returns an index in `0..len`. Never called with `len == 0`.
    fn pick_index(&mut self, len: usize) -> usize;

    fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T>
    where
        Self: Sized,
    {
        if items.is_empty() {
            return None;
        }

        items.get(self.pick_index(items.len()))
    }
}

/// Thread-local generator, the default outside of tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn pick_index(&mut self, len: usize) -> usize {
        rand::rng().random_range(0..len)
    }
}

/// Reproducible picks from a fixed seed.
#[derive(Debug, Clone)]
pub struct SeededRandom(StdRng);

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl RandomSource for SeededRandom {
    fn pick_index(&mut self, len: usize) -> usize {
        self.0.random_range(0..len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Last;

    impl RandomSource for Last {
        fn pick_index(&mut self, len: usize) -> usize {
            len - 1
        }
    }

    #[test]
    fn test_pick_empty_is_none() {
        let items: [u8; 0] = [];
        assert_eq!(Last.pick(&items), None);
        assert_eq!(ThreadRandom.pick(&items), None);
    }

    #[test]
    fn test_pick_uses_index() {
        assert_eq!(Last.pick(&[1, 2, 3]), Some(&3));
    }

    #[test]
    fn test_picks_stay_in_range() {
        let items = [10, 20, 30, 40];
        let mut thread = ThreadRandom;
        let mut seeded = SeededRandom::new(7);

        for _ in 0..100 {
            assert!(items.contains(thread.pick(&items).unwrap()));
            assert!(items.contains(seeded.pick(&items).unwrap()));
        }
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = SeededRandom::new(42);
        let mut b = SeededRandom::new(42);

        let left = (0..20).map(|_| a.pick_index(1000)).collect::<Vec<_>>();
        let right = (0..20).map(|_| b.pick_index(1000)).collect::<Vec<_>>();

        assert_eq!(left, right);
    }
}
