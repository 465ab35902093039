use std::path::PathBuf;

use chrono::Utc;
use emblem_core::{Color, DEFAULT_SEED_ATTEMPTS, Stat};
use emblem_evaluator::{FitnessStrategy, OptimizationTargets};
use emblem_training::genetic::{EvolutionParams, Evolver};
use rand::SeedableRng as _;
use rand_pcg::Pcg64;

use crate::{
    schema::team_report::{TeamMember, TeamReport},
    util::{self, Output, TierFilter},
};

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, derive_more::FromStr)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct OptimizeArg {
    /// Emblem data file (JSON array exported from the emblem database)
    #[arg(long, default_value = "data.json")]
    data: PathBuf,
    /// Emblem tiers to keep from the data file (all, bronze, silver, gold)
    #[arg(long, default_value = "gold")]
    tier: TierFilter,
    /// Stat to favor; repeat for several stats
    #[arg(long = "stat", default_values = ["hp", "mv_speed"])]
    stats: Vec<Stat>,
    /// Color to favor; repeat for several colors
    #[arg(long = "color", default_values = ["White", "Yellow"])]
    colors: Vec<Color>,
    /// Fitness function (normalized, tier)
    #[arg(long, default_value = "normalized")]
    strategy: FitnessStrategy,
    /// Number of generations
    #[arg(long, default_value_t = 50)]
    generations: usize,
    /// Maximum number of teams kept after each generation
    #[arg(long, default_value_t = 100)]
    population_cap: usize,
    /// Random draws allowed to find the initial team
    #[arg(long, default_value_t = DEFAULT_SEED_ATTEMPTS)]
    seed_attempts: usize,
    /// Random seed, for reproducible runs
    #[arg(long)]
    seed: Option<u64>,
    /// Report format (text, json)
    #[arg(long, default_value = "text")]
    format: ReportFormat,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &OptimizeArg) -> anyhow::Result<()> {
    let OptimizeArg {
        data,
        tier,
        stats,
        colors,
        strategy,
        generations,
        population_cap,
        seed_attempts,
        seed,
        format,
        output,
    } = arg;
    anyhow::ensure!(*population_cap > 0, "--population-cap must be at least 1");

    let pool = util::read_pool_file(data, *tier)?;
    let targets = OptimizationTargets::new(stats.iter().copied(), colors.iter().copied());
    let evaluator = strategy.build(targets.clone(), &pool);
    let params = EvolutionParams {
        generations: *generations,
        population_cap: *population_cap,
        seed_attempts: *seed_attempts,
    };

    let rng_seed = seed.unwrap_or_else(rand::random);
    log::info!("Random seed: {rng_seed}");
    let mut rng = Pcg64::seed_from_u64(rng_seed);

    let evolver = Evolver::new(&pool, &*evaluator, params);
    let outcome = evolver.run(&mut rng, |_| {})?;

    let best_team = outcome.best.team();
    let report = TeamReport {
        generated_at: Utc::now(),
        strategy: *strategy,
        targets,
        params,
        rng_seed,
        pool_size: pool.len(),
        best_fitness: outcome.best.fitness(),
        members: TeamMember::from_team(best_team),
        stat_totals: TeamReport::stat_totals_of(best_team),
        history: outcome.history.generations,
    };

    let mut out = Output::from_output_path(output.clone())?;
    match format {
        ReportFormat::Text => out.write_with(|w| report.write_text(w))?,
        ReportFormat::Json => out.write_json(&report)?,
    }
    if let Output::File { path, .. } = &out {
        log::info!("Report saved to {}", path.display());
    }

    Ok(())
}
