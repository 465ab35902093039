use std::fmt;

use emblem_core::{CandidatePool, Team};
use serde::{Deserialize, Serialize};

use crate::{
    normalized::NormalizedEvaluator, targets::OptimizationTargets, tier::TierEvaluator,
};

/// Scores a team; higher is better.
///
/// Implementations must be pure: the same team always gets the same score.
pub trait TeamEvaluator: fmt::Debug + Send + Sync {
    fn evaluate_team(&self, team: &Team) -> f32;
}

pub type BoxedTeamEvaluator = Box<dyn TeamEvaluator>;

/// Fitness function selected for a run.
#[derive(
    Default,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Deserialize,
    Serialize,
    derive_more::Display,
    derive_more::FromStr,
)]
#[serde(rename_all = "snake_case")]
pub enum FitnessStrategy {
    /// [`NormalizedEvaluator`]: normalized stats plus color match and set bonuses.
    #[default]
    #[display("normalized")]
    Normalized,
    /// [`TierEvaluator`]: tier weight plus one point per matching color and stat sign.
    #[display("tier")]
    Tier,
}

impl FitnessStrategy {
    /// Builds the evaluator for this strategy.
    #[must_use]
    pub fn build(self, targets: OptimizationTargets, pool: &CandidatePool) -> BoxedTeamEvaluator {
        match self {
            FitnessStrategy::Normalized => Box::new(NormalizedEvaluator::new(targets, pool)),
            FitnessStrategy::Tier => Box::new(TierEvaluator::new(targets)),
        }
    }
}
