//! Fitness functions for emblem teams.
//!
//! A fitness function maps a [`Team`](emblem_core::Team) to a scalar score; the
//! genetic search keeps the teams with the highest scores. What counts as a good
//! team is configured by [`OptimizationTargets`]: the stats and colors to favor.
//!
//! Two interchangeable strategies implement [`TeamEvaluator`]:
//!
//! - [`NormalizedEvaluator`](normalized::NormalizedEvaluator) - scores each member on
//!   its targeted stats normalized to the pool range, on how many targeted colors it
//!   carries, and on the color set bonuses the whole team unlocks
//! - [`TierEvaluator`](tier::TierEvaluator) - scores each member by tier weight, one
//!   point per targeted color, and the sign of each targeted stat
//!
//! The strategy is chosen once per run through [`FitnessStrategy`].
//!
//! # Example
//!
//! ```
//! use emblem_core::{Candidate, CandidatePool, Color, Colors, Stat, StatValues, Team, Tier};
//! use emblem_evaluator::{FitnessStrategy, OptimizationTargets, TeamEvaluator as _};
//!
//! let candidates: Vec<_> = (0..10)
//!     .map(|i| Candidate::new(format!("e{i}"), Tier::Gold, Colors::new(), StatValues::default()))
//!     .collect();
//! let pool = CandidatePool::new(candidates).unwrap();
//! let targets = OptimizationTargets::new([Stat::Hp], [Color::White]);
//!
//! let evaluator = FitnessStrategy::Tier.build(targets, &pool);
//! let team = Team::seed(&pool, &mut rand::rng(), 1_000_000).unwrap();
//! assert_eq!(evaluator.evaluate_team(&team), 30.0);
//! ```

pub use self::{
    targets::OptimizationTargets,
    team_evaluator::{BoxedTeamEvaluator, FitnessStrategy, TeamEvaluator},
};

pub mod normalized;
pub mod targets;
pub mod team_evaluator;
pub mod tier;
