use std::{array, collections::HashSet};

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{CandidatePool, ColorCounts, Gene, StatValues};

/// Number of emblems in a team.
pub const TEAM_SIZE: usize = 10;

/// Default cap on rejected draws before [`Team::seed`] gives up.
pub const DEFAULT_SEED_ATTEMPTS: usize = 100_000;

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SeedError {
    #[display("candidate pool has {available} distinct species, but a team needs {required}")]
    NotEnoughSpecies { available: usize, required: usize },
    #[display("no valid team found after {attempts} random draws")]
    AttemptsExhausted { attempts: usize },
}

/// A candidate solution: ten emblems in slot order.
///
/// A team is *valid* when its ten species names are pairwise distinct. Operators
/// are free to build invalid teams; they are dropped by the evolution loop.
///
/// Equality is slot-by-slot: two teams holding the same emblems in a different
/// order compare unequal.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Team {
    genes: [Gene; TEAM_SIZE],
}

impl Team {
    #[must_use]
    pub fn from_genes(genes: [Gene; TEAM_SIZE]) -> Self {
        Self { genes }
    }

    /// Builds a team from ten independent uniform draws (with replacement).
    ///
    /// The result may contain duplicate species.
    pub fn random<R>(pool: &CandidatePool, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        let genes = array::from_fn(|_| Gene::from(pool.sample(rng)));
        Self { genes }
    }

    /// Draws random teams until one is valid.
    ///
    /// Fails immediately if the pool cannot supply ten distinct species, and after
    /// `max_attempts` rejected draws otherwise.
    pub fn seed<R>(
        pool: &CandidatePool,
        rng: &mut R,
        max_attempts: usize,
    ) -> Result<Self, SeedError>
    where
        R: Rng + ?Sized,
    {
        if pool.distinct_species() < TEAM_SIZE {
            return Err(SeedError::NotEnoughSpecies {
                available: pool.distinct_species(),
                required: TEAM_SIZE,
            });
        }
        for attempt in 1..=max_attempts {
            let team = Self::random(pool, rng);
            if team.is_valid() {
                log::debug!("seed team found after {attempt} draw(s)");
                return Ok(team);
            }
        }
        Err(SeedError::AttemptsExhausted {
            attempts: max_attempts,
        })
    }

    #[must_use]
    pub fn genes(&self) -> &[Gene; TEAM_SIZE] {
        &self.genes
    }

    #[must_use]
    pub fn into_genes(self) -> [Gene; TEAM_SIZE] {
        self.genes
    }

    /// Returns a copy of this team with slot `index` holding `gene`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= TEAM_SIZE`.
    #[must_use]
    pub fn with_gene(&self, index: usize, gene: Gene) -> Self {
        let mut genes = self.genes.clone();
        genes[index] = gene;
        Self { genes }
    }

    /// Returns `true` if no species appears twice.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.genes
            .iter()
            .map(|gene| gene.name())
            .collect::<HashSet<_>>()
            .len()
            == TEAM_SIZE
    }

    /// Counts every color across all members' color lists.
    #[must_use]
    pub fn color_counts(&self) -> ColorCounts {
        ColorCounts::from_colors(
            self.genes
                .iter()
                .flat_map(|gene| gene.colors().iter().copied()),
        )
    }

    /// Sum of each stat over all members.
    #[must_use]
    pub fn stat_totals(&self) -> StatValues {
        self.genes.iter().map(|gene| *gene.stats()).sum()
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64;

    use super::*;
    use crate::{Candidate, Color, Colors, Stat, Tier};

    fn candidate(name: &str, colors: &[Color], hp: f32) -> Candidate {
        let mut stats = StatValues::default();
        stats[Stat::Hp] = hp;
        Candidate::new(
            name,
            Tier::Gold,
            colors.iter().copied().collect::<Colors>(),
            stats,
        )
    }

    fn pool_of(n: usize) -> CandidatePool {
        #[expect(clippy::cast_precision_loss)]
        let candidates = (0..n)
            .map(|i| candidate(&format!("species-{i}"), &[Color::White], i as f32))
            .collect();
        CandidatePool::new(candidates).unwrap()
    }

    fn team_of(names: [&str; TEAM_SIZE]) -> Team {
        Team::from_genes(names.map(|name| Gene::from(&candidate(name, &[Color::Red], 1.0))))
    }

    #[test]
    fn test_valid_team() {
        let team = team_of(["a", "b", "c", "d", "e", "f", "g", "h", "i", "j"]);
        assert!(team.is_valid());
    }

    #[test]
    fn test_duplicate_species_is_invalid() {
        let team = team_of(["a", "b", "c", "d", "e", "f", "g", "h", "i", "a"]);
        assert!(!team.is_valid());
    }

    #[test]
    fn test_seed_produces_valid_team() {
        let pool = pool_of(15);
        let mut rng = Pcg64::seed_from_u64(1);
        for _ in 0..20 {
            let team = Team::seed(&pool, &mut rng, DEFAULT_SEED_ATTEMPTS).unwrap();
            assert!(team.is_valid());
            for gene in team.genes() {
                assert!(pool.candidates().iter().any(|c| c.name() == gene.name()));
            }
        }
    }

    #[test]
    fn test_seed_fails_fast_on_small_pool() {
        let pool = pool_of(9);
        let mut rng = Pcg64::seed_from_u64(1);
        assert_eq!(
            Team::seed(&pool, &mut rng, DEFAULT_SEED_ATTEMPTS).unwrap_err(),
            SeedError::NotEnoughSpecies {
                available: 9,
                required: TEAM_SIZE
            }
        );
    }

    #[test]
    fn test_seed_gives_up_after_max_attempts() {
        let pool = pool_of(10);
        let mut rng = Pcg64::seed_from_u64(1);
        assert_eq!(
            Team::seed(&pool, &mut rng, 0).unwrap_err(),
            SeedError::AttemptsExhausted { attempts: 0 }
        );
    }

    #[test]
    fn test_with_gene_changes_one_slot() {
        let team = team_of(["a", "b", "c", "d", "e", "f", "g", "h", "i", "j"]);
        let replacement = Gene::from(&candidate("z", &[Color::Blue], 9.0));
        let mutated = team.with_gene(3, replacement.clone());
        assert_eq!(mutated.genes()[3], replacement);
        for i in (0..TEAM_SIZE).filter(|&i| i != 3) {
            assert_eq!(mutated.genes()[i], team.genes()[i]);
        }
    }

    #[test]
    fn test_equality_is_slot_sensitive() {
        let team = team_of(["a", "b", "c", "d", "e", "f", "g", "h", "i", "j"]);
        let mut genes = team.clone().into_genes();
        genes.swap(0, 1);
        let swapped = Team::from_genes(genes);
        assert_eq!(team, team.clone());
        assert_ne!(team, swapped);
    }

    #[test]
    fn test_color_counts_and_stat_totals() {
        let mut genes = team_of(["a", "b", "c", "d", "e", "f", "g", "h", "i", "j"]).into_genes();
        genes[0] = Gene::from(&candidate("a", &[Color::White, Color::Red], 5.0));
        let team = Team::from_genes(genes);

        let counts = team.color_counts();
        assert_eq!(counts[Color::Red], 10);
        assert_eq!(counts[Color::White], 1);
        assert_eq!(team.stat_totals()[Stat::Hp], 14.0);
    }
}
