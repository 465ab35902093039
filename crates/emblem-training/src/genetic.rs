//! Generational evolution of emblem teams.
//!
//! # Algorithm Overview
//!
//! The population starts from a single valid seed team. Each generation:
//!
//! 1. **Mean** - compute the mean fitness of the population
//! 2. **Selection** - keep the teams scoring at least the mean, in rank order
//! 3. **Crossover** - breed one child from every adjacent pair of selected teams
//! 4. **Mutation** - derive one mutated child from every selected team
//! 5. **Filtering** - drop children repeating a species
//! 6. **Deduplication** - drop teams equal (slot by slot) to an earlier one
//! 7. **Ranking** - stable sort by fitness, best first
//! 8. **Truncation** - keep the best `population_cap` teams
//!
//! Parents stay in the population, so the best team of a generation is never
//! worse than the best team of the previous one.
//!
//! The run stops after a fixed number of generations; there is no convergence
//! check.
//!
//! # Example
//!
//! ```rust,ignore
//! use emblem_training::genetic::{EvolutionParams, Evolver};
//!
//! let evolver = Evolver::new(&pool, &*evaluator, EvolutionParams::default());
//! let outcome = evolver.run(&mut rng, |report| {
//!     eprintln!("{}: {:.3}", report.generation, report.best_fitness);
//! })?;
//! println!("best fitness: {}", outcome.best.fitness());
//! ```

use emblem_core::{CandidatePool, DEFAULT_SEED_ATTEMPTS, SeedError, Team};
use emblem_evaluator::TeamEvaluator;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::operators;

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum EvolutionError {
    #[display("failed to seed the initial population: {_0}")]
    Seed(SeedError),
    #[display("population became empty in generation {generation}")]
    EmptyPopulation { generation: usize },
}

/// A team together with its fitness.
///
/// Fitness is computed once, when the team enters the population.
#[derive(Debug, Clone)]
pub struct Individual {
    team: Team,
    fitness: f32,
}

impl Individual {
    pub fn evaluate<E>(team: Team, evaluator: &E) -> Self
    where
        E: TeamEvaluator + ?Sized,
    {
        let fitness = evaluator.evaluate_team(&team);
        Self { team, fitness }
    }

    #[must_use]
    pub fn team(&self) -> &Team {
        &self.team
    }

    #[must_use]
    pub fn fitness(&self) -> f32 {
        self.fitness
    }

}

/// Summary of the fitness distribution of a population.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FitnessStats {
    pub min: f32,
    pub max: f32,
    pub mean: f32,
}

impl FitnessStats {
    /// Returns `None` if `values` is empty.
    #[expect(clippy::cast_precision_loss)]
    pub fn new<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f32>,
    {
        let mut count = 0_usize;
        let mut sum = 0.0_f32;
        let mut min = f32::INFINITY;
        let mut max = f32::NEG_INFINITY;
        for v in values {
            count += 1;
            sum += v;
            min = min.min(v);
            max = max.max(v);
        }
        if count == 0 {
            return None;
        }
        // Rounding may push the mean of equal values slightly above them.
        let mean = (sum / count as f32).clamp(min, max);
        Some(Self { min, max, mean })
    }
}

/// Teams under evolution, ranked by descending fitness after [`Population::rank`].
#[derive(Debug, Clone, Default)]
pub struct Population {
    individuals: Vec<Individual>,
}

impl Population {
    /// Creates a population holding only `seed`.
    pub fn from_seed<E>(seed: Team, evaluator: &E) -> Self
    where
        E: TeamEvaluator + ?Sized,
    {
        Self {
            individuals: vec![Individual::evaluate(seed, evaluator)],
        }
    }

    #[must_use]
    pub fn individuals(&self) -> &[Individual] {
        &self.individuals
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// Highest-ranked individual (the best one once ranked).
    #[must_use]
    pub fn first(&self) -> Option<&Individual> {
        self.individuals.first()
    }

    #[must_use]
    pub fn compute_fitness_stats(&self) -> Option<FitnessStats> {
        FitnessStats::new(self.individuals.iter().map(Individual::fitness))
    }

    /// Teams with fitness at or above the population mean, in population order.
    #[must_use]
    pub fn above_average(&self) -> Vec<&Team> {
        let Some(stats) = self.compute_fitness_stats() else {
            return vec![];
        };
        self.individuals
            .iter()
            .filter(|ind| ind.fitness >= stats.mean)
            .map(Individual::team)
            .collect()
    }

    /// Adds the valid teams of `teams`, evaluating each one.
    pub fn extend_valid<I, E>(&mut self, teams: I, evaluator: &E)
    where
        I: IntoIterator<Item = Team>,
        E: TeamEvaluator + ?Sized,
    {
        self.individuals.extend(
            teams
                .into_iter()
                .filter(Team::is_valid)
                .map(|team| Individual::evaluate(team, evaluator)),
        );
    }

    /// Removes teams that compare equal, slot by slot, to an earlier team.
    ///
    /// Two teams holding the same emblems in a different order are both kept.
    pub fn dedup(&mut self) {
        let mut kept: Vec<Individual> = Vec::with_capacity(self.individuals.len());
        for ind in self.individuals.drain(..) {
            // equal teams always have equal fitness
            let duplicate = kept
                .iter()
                .any(|k| k.fitness.to_bits() == ind.fitness.to_bits() && k.team == ind.team);
            if !duplicate {
                kept.push(ind);
            }
        }
        self.individuals = kept;
    }

    /// Sorts by fitness, best first. Ties keep their current order.
    pub fn rank(&mut self) {
        self.individuals.sort_by(|a, b| b.fitness.total_cmp(&a.fitness));
    }

    pub fn truncate(&mut self, cap: usize) {
        self.individuals.truncate(cap);
    }
}

/// Parameters of one evolution run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct EvolutionParams {
    /// Number of generations to run.
    pub generations: usize,
    /// Maximum population size kept after each generation.
    pub population_cap: usize,
    /// Random draws allowed to find the seed team.
    pub seed_attempts: usize,
}

impl Default for EvolutionParams {
    fn default() -> Self {
        Self {
            generations: 50,
            population_cap: 100,
            seed_attempts: DEFAULT_SEED_ATTEMPTS,
        }
    }
}

/// Progress of one generation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GenerationReport {
    /// 1-based generation number.
    pub generation: usize,
    pub best_fitness: f32,
    pub mean_fitness: f32,
    pub min_fitness: f32,
    pub population_size: usize,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct EvolutionHistory {
    pub generations: Vec<GenerationReport>,
}

impl EvolutionHistory {
    /// Best fitness seen up to and including each generation.
    pub fn best_so_far(&self) -> impl Iterator<Item = f32> + '_ {
        self.generations
            .iter()
            .scan(f32::NEG_INFINITY, |best, report| {
                *best = best.max(report.best_fitness);
                Some(*best)
            })
    }
}

#[derive(Debug, Clone)]
pub struct EvolutionOutcome {
    /// Top-ranked individual of the final population.
    pub best: Individual,
    pub population: Population,
    pub history: EvolutionHistory,
}

/// Drives the evolution of a population of teams.
#[derive(Debug)]
pub struct Evolver<'a, E>
where
    E: ?Sized,
{
    pool: &'a CandidatePool,
    evaluator: &'a E,
    params: EvolutionParams,
}

impl<'a, E> Evolver<'a, E>
where
    E: TeamEvaluator + ?Sized,
{
    pub fn new(pool: &'a CandidatePool, evaluator: &'a E, params: EvolutionParams) -> Self {
        Self {
            pool,
            evaluator,
            params,
        }
    }

    /// Seeds a ranked population with one valid team.
    pub fn initialize<R>(&self, rng: &mut R) -> Result<Population, EvolutionError>
    where
        R: Rng + ?Sized,
    {
        let seed = Team::seed(self.pool, rng, self.params.seed_attempts)
            .map_err(EvolutionError::Seed)?;
        let mut population = Population::from_seed(seed, self.evaluator);
        population.rank();
        Ok(population)
    }

    /// Produces the next generation from a ranked population.
    pub fn step<R>(
        &self,
        mut population: Population,
        generation: usize,
        rng: &mut R,
    ) -> Result<Population, EvolutionError>
    where
        R: Rng + ?Sized,
    {
        let parents: Vec<Team> = population.above_average().into_iter().cloned().collect();
        let children = self.breed(&parents, rng);
        log::trace!(
            "generation {generation}: {} parent(s), {} child(ren)",
            parents.len(),
            children.len()
        );

        population.extend_valid(children, self.evaluator);
        population.dedup();
        population.rank();
        population.truncate(self.params.population_cap);

        if population.is_empty() {
            return Err(EvolutionError::EmptyPopulation { generation });
        }
        Ok(population)
    }

    /// Breeds one crossover child per adjacent pair of `parents`, followed by
    /// one mutant per parent.
    fn breed<R>(&self, parents: &[Team], rng: &mut R) -> Vec<Team>
    where
        R: Rng + ?Sized,
    {
        let mut children = Vec::with_capacity(parents.len() * 2);
        for pair in parents.windows(2) {
            children.push(operators::crossover(&pair[0], &pair[1], rng));
        }
        for parent in parents {
            children.push(operators::mutate(parent, self.pool, rng));
        }
        children
    }

    /// Runs all generations and returns the best team found.
    ///
    /// `on_generation` is called after every generation.
    pub fn run<R, F>(
        &self,
        rng: &mut R,
        mut on_generation: F,
    ) -> Result<EvolutionOutcome, EvolutionError>
    where
        R: Rng + ?Sized,
        F: FnMut(&GenerationReport),
    {
        let mut population = self.initialize(rng)?;
        let mut history = EvolutionHistory::default();

        for generation in 1..=self.params.generations {
            population = self.step(population, generation, rng)?;
            let stats = population
                .compute_fitness_stats()
                .ok_or(EvolutionError::EmptyPopulation { generation })?;
            let report = GenerationReport {
                generation,
                best_fitness: stats.max,
                mean_fitness: stats.mean,
                min_fitness: stats.min,
                population_size: population.len(),
            };
            log::info!(
                "Generation: {generation} - Best Fitness: {:.4} (mean {:.4}, {} teams)",
                report.best_fitness,
                report.mean_fitness,
                report.population_size
            );
            on_generation(&report);
            history.generations.push(report);
        }

        population.rank();
        let best = population
            .first()
            .cloned()
            .ok_or(EvolutionError::EmptyPopulation {
                generation: self.params.generations,
            })?;
        Ok(EvolutionOutcome {
            best,
            population,
            history,
        })
    }
}
