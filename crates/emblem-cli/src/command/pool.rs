use std::{io, path::PathBuf};

use emblem_core::{CandidatePool, Stat, Tier};

use crate::util::{self, Output, TierFilter};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct PoolArg {
    /// Emblem data file (JSON array exported from the emblem database)
    #[arg(long, default_value = "data.json")]
    data: PathBuf,
    /// Emblem tiers to keep from the data file (all, bronze, silver, gold)
    #[arg(long, default_value = "gold")]
    tier: TierFilter,
    /// Also list every candidate
    #[arg(long)]
    list: bool,
}

pub(crate) fn run(arg: &PoolArg) -> anyhow::Result<()> {
    let PoolArg { data, tier, list } = arg;
    let pool = util::read_pool_file(data, *tier)?;
    Output::stdout().write_with(|w| write_pool_summary(w, &pool, *list))
}

fn write_pool_summary<W>(mut w: W, pool: &CandidatePool, list: bool) -> io::Result<()>
where
    W: io::Write,
{
    writeln!(
        w,
        "Candidates: {} ({} distinct species)",
        pool.len(),
        pool.distinct_species()
    )?;
    for tier in [Tier::Gold, Tier::Silver, Tier::Bronze] {
        let count = pool.candidates().iter().filter(|c| c.tier() == tier).count();
        if count > 0 {
            writeln!(w, "  {tier}: {count}")?;
        }
    }
    writeln!(w, "Stat ranges:")?;
    for stat in Stat::ALL {
        let range = pool.stat_range(stat);
        writeln!(w, "  {stat}: {} .. {}", range.min, range.max)?;
    }
    if list {
        writeln!(w, "Emblems:")?;
        for candidate in pool.candidates() {
            let colors = candidate
                .colors()
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            writeln!(w, "  {} ({}) ({colors})", candidate.name(), candidate.tier())?;
        }
    }
    Ok(())
}
