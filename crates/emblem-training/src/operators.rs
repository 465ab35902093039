//! Genetic operators on teams.
//!
//! Both operators build a new [`Team`] and leave their inputs untouched. Neither
//! enforces the distinct-species invariant: the children may be invalid and are
//! filtered out by the evolution loop.
//!
//! - [`crossover`] mixes the members of two parents
//! - [`mutate`] replaces one member with a fresh draw from the pool

use std::array;

use emblem_core::{CandidatePool, Gene, TEAM_SIZE, Team};
use rand::{Rng, seq::SliceRandom as _};

/// Recombines two parents into one child.
///
/// The 20 parent genes are shuffled uniformly and the first [`TEAM_SIZE`] become
/// the child, in shuffled order. Every child gene is a copy of a parent gene.
pub fn crossover<R>(a: &Team, b: &Team, rng: &mut R) -> Team
where
    R: Rng + ?Sized,
{
    let mut genes: Vec<&Gene> = a.genes().iter().chain(b.genes()).collect();
    genes.shuffle(rng);
    Team::from_genes(array::from_fn(|i| genes[i].clone()))
}

/// Replaces one uniformly chosen slot with a gene built from a uniformly chosen
/// candidate.
///
/// The other nine genes are carried over unchanged. The drawn candidate may equal
/// the current occupant, in which case the child equals the parent.
pub fn mutate<R>(team: &Team, pool: &CandidatePool, rng: &mut R) -> Team
where
    R: Rng + ?Sized,
{
    let slot = rng.random_range(0..TEAM_SIZE);
    let gene = Gene::from(pool.sample(rng));
    team.with_gene(slot, gene)
}
