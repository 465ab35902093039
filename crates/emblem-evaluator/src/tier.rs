use emblem_core::{Gene, Team};

use crate::{targets::OptimizationTargets, team_evaluator::TeamEvaluator};

/// Strategy B: scores genes by tier and by the sign of targeted stats.
///
/// ```text
/// gene_score = tier_weight (Gold=3, Silver=2, Bronze=1)
///            + |targeted colors on gene|
///            + |targeted stats > 0| - |targeted stats < 0|
/// ```
///
/// Team fitness is the sum of the ten gene scores.
#[derive(Debug, Clone)]
pub struct TierEvaluator {
    targets: OptimizationTargets,
}

impl TierEvaluator {
    #[must_use]
    pub fn new(targets: OptimizationTargets) -> Self {
        Self { targets }
    }

    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn evaluate_gene(&self, gene: &Gene) -> f32 {
        let colors = self.targets.matching_colors(gene).count() as f32;
        let stat_signs: f32 = self
            .targets
            .stats()
            .map(|stat| {
                let value = gene.stat(stat);
                if value > 0.0 {
                    1.0
                } else if value < 0.0 {
                    -1.0
                } else {
                    0.0
                }
            })
            .sum();
        f32::from(gene.tier().weight()) + colors + stat_signs
    }
}

impl TeamEvaluator for TierEvaluator {
    fn evaluate_team(&self, team: &Team) -> f32 {
        team.genes().iter().map(|gene| self.evaluate_gene(gene)).sum()
    }
}
