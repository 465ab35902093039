//! Genetic search for emblem teams.
//!
//! Instead of enumerating every combination of ten emblems, this crate evolves a
//! population of [`Team`](emblem_core::Team)s toward higher fitness, as scored by a
//! [`TeamEvaluator`](emblem_evaluator::TeamEvaluator).
//!
//! # How It Works
//!
//! 1. **Seed** - draw random teams until one has ten distinct species
//! 2. **Select** - keep the teams scoring at least the population mean
//! 3. **Breed** - cross adjacent selected teams and mutate every selected team
//! 4. **Filter** - drop invalid and duplicate teams
//! 5. **Rank** - sort by fitness and truncate to the population cap
//! 6. **Repeat** - for a fixed number of generations
//!
//! See the [`genetic`] module for the generation loop and the [`operators`]
//! module for crossover and mutation.
//!
//! # Current Limitations
//!
//! - **Heuristic**: the result is the best team found, not a proven optimum
//! - **Fixed parameters**: generation count and population cap do not adapt to
//!   the search progress
//! - **Sequential**: teams are evaluated one after another

pub mod genetic;
pub mod operators;
