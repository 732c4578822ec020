use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{AppError, Result};

/// Source of the uniform draws the generator makes.
///
/// Implementations only provide raw indices and counts; [`pick_one`] turns an
/// index into a list element so every selector shares the empty-list guard.
pub trait RandomSelector {
    /// Uniform index in `0..len`. Callers guarantee `len > 0`.
    fn pick_index(&mut self, len: usize) -> usize;

    /// Uniform integer in `min..=max`. Callers guarantee `min <= max`.
    fn pick_in_range(&mut self, min: usize, max: usize) -> usize;
}

pub fn pick_one<'a, T, S>(selector: &mut S, items: &'a [T]) -> Result<&'a T>
where
    S: RandomSelector + ?Sized,
{
    if items.is_empty() {
        return Err(AppError::InvalidInput {
            message: "Cannot pick from an empty list".to_string(),
        });
    }
    let idx = selector.pick_index(items.len());
    items.get(idx).ok_or_else(|| AppError::InvalidInput {
        message: format!("Selector returned index {} for {} items", idx, items.len()),
    })
}

pub fn pick_count<S>(selector: &mut S, min: usize, max: usize) -> Result<usize>
where
    S: RandomSelector + ?Sized,
{
    if min > max {
        return Err(AppError::InvalidInput {
            message: format!("Invalid count range: {}..={}", min, max),
        });
    }
    let count = selector.pick_in_range(min, max);
    if count < min || count > max {
        return Err(AppError::InvalidInput {
            message: format!("Selector returned {} outside {}..={}", count, min, max),
        });
    }
    Ok(count)
}

pub struct StdRngSelector {
    rng: StdRng,
}

impl StdRngSelector {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => Self::seeded(s),
            None => Self::from_entropy(),
        }
    }
}

impl RandomSelector for StdRngSelector {
    fn pick_index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }

    fn pick_in_range(&mut self, min: usize, max: usize) -> usize {
        self.rng.gen_range(min..=max)
    }
}

/// Replays fixed answers, for tests that need to know exactly what gets drawn.
///
/// Indices wrap modulo the list length; counts are clamped into the range.
#[cfg(any(test, feature = "test-helpers"))]
#[derive(Debug, Clone, Default)]
pub struct ScriptedSelector {
    indices: std::collections::VecDeque<usize>,
    counts: std::collections::VecDeque<usize>,
}

#[cfg(any(test, feature = "test-helpers"))]
impl ScriptedSelector {
    pub fn new(counts: Vec<usize>, indices: Vec<usize>) -> Self {
        Self {
            indices: indices.into(),
            counts: counts.into(),
        }
    }
}

#[cfg(any(test, feature = "test-helpers"))]
impl RandomSelector for ScriptedSelector {
    fn pick_index(&mut self, len: usize) -> usize {
        self.indices.pop_front().unwrap_or(0) % len
    }

    fn pick_in_range(&mut self, min: usize, max: usize) -> usize {
        self.counts.pop_front().unwrap_or(min).clamp(min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pick_one_empty_list() {
        let mut selector = StdRngSelector::seeded(1);
        let empty: Vec<String> = vec![];
        let err = pick_one(&mut selector, &empty).unwrap_err();
        assert!(matches!(err, AppError::InvalidInput { .. }));
    }

    #[test]
    fn test_pick_one_returns_member() {
        let mut selector = StdRngSelector::seeded(7);
        let items = ["a", "b", "c"];
        for _ in 0..100 {
            let picked = pick_one(&mut selector, &items).unwrap();
            assert!(items.contains(picked));
        }
    }

    #[test]
    fn test_pick_count_stays_in_range() {
        let mut selector = StdRngSelector::seeded(42);
        let mut seen = [false; 7];
        for _ in 0..500 {
            let n = pick_count(&mut selector, 3, 6).unwrap();
            assert!((3..=6).contains(&n));
            seen[n] = true;
        }
        assert!(seen[3] && seen[4] && seen[5] && seen[6]);
    }

    #[test]
    fn test_pick_count_inverted_range() {
        let mut selector = StdRngSelector::from_entropy();
        assert!(pick_count(&mut selector, 6, 3).is_err());
        assert_eq!(pick_count(&mut selector, 4, 4).unwrap(), 4);
    }

    #[test]
    fn test_seeded_selectors_agree() {
        let mut a = StdRngSelector::new(Some(99));
        let mut b = StdRngSelector::new(Some(99));
        let draws_a: Vec<usize> = (0..20).map(|_| a.pick_index(10)).collect();
        let draws_b: Vec<usize> = (0..20).map(|_| b.pick_index(10)).collect();
        assert_eq!(draws_a, draws_b);
    }

    #[test]
    fn test_scripted_selector_replays() {
        let mut selector = ScriptedSelector::new(vec![9], vec![1, 5]);
        let items = ["x", "y", "z"];
        assert_eq!(*pick_one(&mut selector, &items).unwrap(), "y");
        assert_eq!(*pick_one(&mut selector, &items).unwrap(), "z");
        assert_eq!(*pick_one(&mut selector, &items).unwrap(), "x");
        assert_eq!(pick_count(&mut selector, 3, 6).unwrap(), 6);
        assert_eq!(pick_count(&mut selector, 3, 6).unwrap(), 3);
    }
}
