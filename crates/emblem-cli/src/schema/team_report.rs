use std::{collections::BTreeMap, io};

use chrono::{DateTime, Utc};
use emblem_core::{Color, Stat, Team, Tier};
use emblem_evaluator::{FitnessStrategy, OptimizationTargets};
use emblem_training::genetic::{EvolutionParams, GenerationReport};
use serde::Serialize;

/// Result of an `optimize` run.
#[derive(Debug, Clone, Serialize)]
pub struct TeamReport {
    pub generated_at: DateTime<Utc>,
    pub strategy: FitnessStrategy,
    pub targets: OptimizationTargets,
    pub params: EvolutionParams,
    pub rng_seed: u64,
    pub pool_size: usize,
    pub best_fitness: f32,
    pub members: Vec<TeamMember>,
    pub stat_totals: BTreeMap<Stat, f32>,
    pub history: Vec<GenerationReport>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TeamMember {
    pub name: String,
    pub tier: Tier,
    pub colors: Vec<Color>,
}

impl TeamMember {
    pub fn from_team(team: &Team) -> Vec<Self> {
        team.genes()
            .iter()
            .map(|gene| Self {
                name: gene.name().to_owned(),
                tier: gene.tier(),
                colors: gene.colors().to_vec(),
            })
            .collect()
    }
}

fn join<T>(items: impl IntoIterator<Item = T>) -> String
where
    T: ToString,
{
    items
        .into_iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl TeamReport {
    pub fn stat_totals_of(team: &Team) -> BTreeMap<Stat, f32> {
        team.stat_totals().iter().collect()
    }

    /// Writes the human-readable summary.
    pub fn write_text<W>(&self, mut w: W) -> io::Result<()>
    where
        W: io::Write,
    {
        writeln!(w, "Best Fitness: {}", self.best_fitness)?;
        writeln!(w, "Strategy: {}", self.strategy)?;
        writeln!(w, "Colors to improve: {}", join(self.targets.colors()))?;
        writeln!(w, "Statistics to improve: {}", join(self.targets.stats()))?;
        writeln!(w, "Emblems:")?;
        for member in &self.members {
            writeln!(
                w,
                "  {} ({}) ({})",
                member.name,
                member.tier,
                join(&member.colors)
            )?;
        }
        writeln!(w, "Statistics:")?;
        for (stat, total) in &self.stat_totals {
            writeln!(w, "  {stat}: {total}")?;
        }
        Ok(())
    }
}
