use std::collections::HashSet;

use rand::Rng;

use crate::{Candidate, Stat, StatRange};

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PoolError {
    #[display("candidate pool is empty")]
    Empty,
}

/// Every emblem available for team building, plus the per-stat ranges used for
/// normalization.
///
/// The pool is built once before evolution starts and is read-only afterwards.
#[derive(Debug, Clone)]
pub struct CandidatePool {
    candidates: Vec<Candidate>,
    ranges: [StatRange; Stat::LEN],
    distinct_species: usize,
}

impl CandidatePool {
    /// Creates a pool, computing the range of every stat across all candidates.
    pub fn new(candidates: Vec<Candidate>) -> Result<Self, PoolError> {
        if candidates.is_empty() {
            return Err(PoolError::Empty);
        }
        let ranges = Stat::ALL.map(|stat| {
            StatRange::from_values(candidates.iter().map(|c| c.stat(stat)))
                .unwrap_or(StatRange::point(0.0))
        });
        let distinct_species = candidates
            .iter()
            .map(Candidate::name)
            .collect::<HashSet<_>>()
            .len();
        Ok(Self {
            candidates,
            ranges,
            distinct_species,
        })
    }

    #[must_use]
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Number of different species names in the pool.
    #[must_use]
    pub fn distinct_species(&self) -> usize {
        self.distinct_species
    }

    /// Minimum and maximum of `stat` across the pool.
    #[must_use]
    pub fn stat_range(&self, stat: Stat) -> StatRange {
        self.ranges[stat as usize]
    }

    /// Draws one candidate uniformly at random.
    pub fn sample<R>(&self, rng: &mut R) -> &Candidate
    where
        R: Rng + ?Sized,
    {
        &self.candidates[rng.random_range(0..self.candidates.len())]
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64;

    use super::*;
    use crate::{Colors, StatValues, Tier};

    fn candidate(name: &str, hp: f32, speed: f32) -> Candidate {
        let mut stats = StatValues::default();
        stats[Stat::Hp] = hp;
        stats[Stat::MovementSpeed] = speed;
        Candidate::new(name, Tier::Gold, Colors::new(), stats)
    }

    #[test]
    fn test_empty_pool_is_rejected() {
        assert_eq!(CandidatePool::new(vec![]).unwrap_err(), PoolError::Empty);
    }

    #[test]
    fn test_stat_ranges() {
        let pool = CandidatePool::new(vec![
            candidate("a", 100.0, -35.0),
            candidate("b", 300.0, 0.0),
            candidate("c", 200.0, 70.0),
        ])
        .unwrap();
        assert_eq!(pool.stat_range(Stat::Hp), StatRange { min: 100.0, max: 300.0 });
        assert_eq!(
            pool.stat_range(Stat::MovementSpeed),
            StatRange { min: -35.0, max: 70.0 }
        );
        assert!(pool.stat_range(Stat::Attack).is_degenerate());
        for stat in Stat::ALL {
            let range = pool.stat_range(stat);
            assert!(range.max >= range.min);
        }
    }

    #[test]
    fn test_distinct_species_counts_names() {
        let pool = CandidatePool::new(vec![
            candidate("a", 1.0, 0.0),
            candidate("a", 2.0, 0.0),
            candidate("b", 3.0, 0.0),
        ])
        .unwrap();
        assert_eq!(pool.len(), 3);
        assert_eq!(pool.distinct_species(), 2);
    }

    #[test]
    fn test_sample_returns_pool_member() {
        let pool = CandidatePool::new(vec![
            candidate("a", 1.0, 0.0),
            candidate("b", 2.0, 0.0),
            candidate("c", 3.0, 0.0),
        ])
        .unwrap();
        let mut rng = Pcg64::seed_from_u64(7);
        let mut seen = HashSet::new();
        for _ in 0..200 {
            let sampled = pool.sample(&mut rng);
            assert!(pool.candidates().contains(sampled));
            seen.insert(sampled.name().to_owned());
        }
        assert_eq!(seen.len(), 3);
    }
}
