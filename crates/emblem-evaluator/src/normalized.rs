//! Normalized fitness: stat quality, color match and color set bonuses.
//!
//! Every gene is scored in the context of its team, and the team fitness is the
//! sum of the ten gene scores (not their mean):
//!
//! ```text
//! gene_score = (stat + color_match + color_set) / 3
//!
//! where:
//!   stat        = Σ over targeted stats s of (gene[s] - min[s]) / (max[s] - min[s])
//!   color_match = |targeted colors on gene| / |targeted colors|
//!   color_set   = 3 × Σ over targeted colors c on gene of tier(team_count[c])
//!                 / |colors on gene|
//!   tier(n)     = Cool family (Green, Blue, White, Brown, Purple): n ≥ 2 → 1, ≥ 4 → 2, ≥ 6 → 3
//!                 Warm family (Red, Yellow, Pink, Navy, Black, Gray): n ≥ 3 → 1, ≥ 5 → 2, ≥ 7 → 3
//! ```
//!
//! `team_count[c]` counts color `c` over the color lists of all ten members.
//! The stat term is not divided by the number of targeted stats, so each extra
//! targeted stat widens the range of the stat term by one.
//!
//! Degenerate inputs contribute 0 instead of producing NaN: a stat whose range
//! is a single point, an empty targeted-color set, and a gene without colors.

use emblem_core::{CandidatePool, ColorCounts, Gene, Stat, StatRange, Team};

use crate::{targets::OptimizationTargets, team_evaluator::TeamEvaluator};

/// Strategy A: scores genes by normalized stats and color synergy.
#[derive(Debug, Clone)]
pub struct NormalizedEvaluator {
    targets: OptimizationTargets,
    stat_ranges: Vec<(Stat, StatRange)>,
}

impl NormalizedEvaluator {
    /// Creates an evaluator normalizing against the stat ranges of `pool`.
    #[must_use]
    pub fn new(targets: OptimizationTargets, pool: &CandidatePool) -> Self {
        let stat_ranges = targets
            .stats()
            .map(|stat| (stat, pool.stat_range(stat)))
            .collect();
        Self {
            targets,
            stat_ranges,
        }
    }

    /// Scores a single `gene` as a member of `team`.
    #[must_use]
    pub fn evaluate_gene(&self, team: &Team, gene: &Gene) -> f32 {
        self.gene_score(&team.color_counts(), gene)
    }

    fn gene_score(&self, team_colors: &ColorCounts, gene: &Gene) -> f32 {
        let stat = self.stat_component(gene);
        let color_match = self.color_match_component(gene);
        let color_set = self.color_set_component(team_colors, gene);
        (stat + color_match + color_set) / 3.0
    }

    fn stat_component(&self, gene: &Gene) -> f32 {
        self.stat_ranges
            .iter()
            .map(|(stat, range)| range.normalize(gene.stat(*stat)))
            .sum()
    }

    #[expect(clippy::cast_precision_loss)]
    fn color_match_component(&self, gene: &Gene) -> f32 {
        let targeted = self.targets.color_count();
        if targeted == 0 {
            return 0.0;
        }
        let matched = self.targets.matching_colors(gene).count();
        matched as f32 / targeted as f32
    }

    #[expect(clippy::cast_precision_loss)]
    fn color_set_component(&self, team_colors: &ColorCounts, gene: &Gene) -> f32 {
        let own_colors = gene.colors().len();
        if own_colors == 0 {
            return 0.0;
        }
        let bonus: u32 = self
            .targets
            .matching_colors(gene)
            .map(|color| team_colors.bonus_tier(color))
            .sum();
        bonus as f32 / own_colors as f32 * 3.0
    }
}

impl TeamEvaluator for NormalizedEvaluator {
    fn evaluate_team(&self, team: &Team) -> f32 {
        let team_colors = team.color_counts();
        team.genes()
            .iter()
            .map(|gene| self.gene_score(&team_colors, gene))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use emblem_core::{Candidate, Color, Colors, StatValues, TEAM_SIZE, Tier};

    use super::*;

    fn candidate(name: &str, colors: &[Color], hp: f32, speed: f32) -> Candidate {
        let mut stats = StatValues::default();
        stats[Stat::Hp] = hp;
        stats[Stat::MovementSpeed] = speed;
        Candidate::new(
            name,
            Tier::Gold,
            colors.iter().copied().collect::<Colors>(),
            stats,
        )
    }

    fn team_from(candidates: &[Candidate]) -> Team {
        Team::from_genes(std::array::from_fn(|i| Gene::from(&candidates[i])))
    }

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < 1e-4,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_stat_component_is_normalized_sum() {
        // hp in [0, 90], speed in [0, 9]
        let candidates: Vec<_> = (0..TEAM_SIZE)
            .map(|i| {
                #[expect(clippy::cast_precision_loss)]
                let v = i as f32;
                candidate(&format!("e{i}"), &[Color::Red], v * 10.0, v)
            })
            .collect();
        let pool = CandidatePool::new(candidates.clone()).unwrap();
        let targets = OptimizationTargets::new([Stat::Hp, Stat::MovementSpeed], []);
        let evaluator = NormalizedEvaluator::new(targets, &pool);
        let team = team_from(&candidates);

        // gene i: stat = 2 * i / 9, no color terms
        assert_close(evaluator.evaluate_gene(&team, &team.genes()[0]), 0.0);
        assert_close(evaluator.evaluate_gene(&team, &team.genes()[9]), 2.0 / 3.0);
        // Σ 2i/9 over i=0..9 = 10, divided by 3
        assert_close(evaluator.evaluate_team(&team), 10.0 / 3.0);
    }

    #[test]
    fn test_color_terms() {
        // 4 White, 3 Yellow (one of them also White), rest Red
        let mut candidates: Vec<_> = (0..TEAM_SIZE)
            .map(|i| candidate(&format!("e{i}"), &[Color::Red], 0.0, 0.0))
            .collect();
        candidates[0] = candidate("e0", &[Color::White], 0.0, 0.0);
        candidates[1] = candidate("e1", &[Color::White], 0.0, 0.0);
        candidates[2] = candidate("e2", &[Color::White], 0.0, 0.0);
        candidates[3] = candidate("e3", &[Color::White, Color::Yellow], 0.0, 0.0);
        candidates[4] = candidate("e4", &[Color::Yellow], 0.0, 0.0);
        candidates[5] = candidate("e5", &[Color::Yellow], 0.0, 0.0);
        let pool = CandidatePool::new(candidates.clone()).unwrap();
        let targets = OptimizationTargets::new([], [Color::White, Color::Yellow]);
        let evaluator = NormalizedEvaluator::new(targets, &pool);
        let team = team_from(&candidates);

        // White x4 (Cool) -> tier 2; Yellow x3 (Warm) -> tier 1.
        // e0: match 1/2, set 2/1*3 = 6 -> (0.5 + 6) / 3
        let white_only = (0.5 + 6.0) / 3.0;
        // e3: match 2/2, set (2 + 1)/2*3 = 4.5 -> (1 + 4.5) / 3
        let white_yellow = (1.0 + 4.5) / 3.0;
        // e4: match 1/2, set 1/1*3 = 3 -> (0.5 + 3) / 3
        let yellow_only = (0.5 + 3.0) / 3.0;

        assert_close(evaluator.evaluate_gene(&team, &team.genes()[0]), white_only);
        assert_close(evaluator.evaluate_gene(&team, &team.genes()[3]), white_yellow);
        assert_close(evaluator.evaluate_gene(&team, &team.genes()[4]), yellow_only);
        assert_close(evaluator.evaluate_gene(&team, &team.genes()[9]), 0.0);
        assert_close(
            evaluator.evaluate_team(&team),
            3.0 * white_only + white_yellow + 2.0 * yellow_only,
        );
    }

    #[test]
    fn test_degenerate_range_contributes_zero() {
        let candidates: Vec<_> = (0..TEAM_SIZE)
            .map(|i| candidate(&format!("e{i}"), &[Color::Blue], 150.0, 0.0))
            .collect();
        let pool = CandidatePool::new(candidates.clone()).unwrap();
        assert!(pool.stat_range(Stat::Hp).is_degenerate());
        let targets = OptimizationTargets::new([Stat::Hp], []);
        let evaluator = NormalizedEvaluator::new(targets, &pool);
        let team = team_from(&candidates);

        for gene in team.genes() {
            let score = evaluator.evaluate_gene(&team, gene);
            assert!(!score.is_nan());
            assert_close(score, 0.0);
        }
        let fitness = evaluator.evaluate_team(&team);
        assert!(fitness.is_finite());
        assert_close(fitness, 0.0);
    }

    #[test]
    fn test_empty_targets_score_zero() {
        let candidates: Vec<_> = (0..TEAM_SIZE)
            .map(|i| {
                #[expect(clippy::cast_precision_loss)]
                let hp = i as f32;
                candidate(&format!("e{i}"), &[Color::Green], hp, 0.0)
            })
            .collect();
        let pool = CandidatePool::new(candidates.clone()).unwrap();
        let evaluator = NormalizedEvaluator::new(OptimizationTargets::default(), &pool);
        assert_close(evaluator.evaluate_team(&team_from(&candidates)), 0.0);
    }

    #[test]
    fn test_evaluation_is_deterministic() {
        let candidates: Vec<_> = (0..TEAM_SIZE)
            .map(|i| {
                #[expect(clippy::cast_precision_loss)]
                let v = (i * 7 % 10) as f32;
                let color = if i % 2 == 0 { Color::White } else { Color::Yellow };
                candidate(&format!("e{i}"), &[color], v, -v)
            })
            .collect();
        let pool = CandidatePool::new(candidates.clone()).unwrap();
        let targets = OptimizationTargets::new(
            [Stat::Hp, Stat::MovementSpeed],
            [Color::White, Color::Yellow],
        );
        let evaluator = NormalizedEvaluator::new(targets, &pool);
        let team = team_from(&candidates);
        let first = evaluator.evaluate_team(&team);
        for _ in 0..10 {
            assert_eq!(evaluator.evaluate_team(&team).to_bits(), first.to_bits());
        }
    }
}
