use std::collections::BTreeSet;

use emblem_core::{Color, Gene, Stat};
use serde::{Deserialize, Serialize};

/// Stats and colors a run tries to maximize.
///
/// Built once before evolution starts and shared read-only by the evaluators.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct OptimizationTargets {
    stats: BTreeSet<Stat>,
    colors: BTreeSet<Color>,
}

impl OptimizationTargets {
    pub fn new<S, C>(stats: S, colors: C) -> Self
    where
        S: IntoIterator<Item = Stat>,
        C: IntoIterator<Item = Color>,
    {
        Self {
            stats: stats.into_iter().collect(),
            colors: colors.into_iter().collect(),
        }
    }

    pub fn stats(&self) -> impl Iterator<Item = Stat> + '_ {
        self.stats.iter().copied()
    }

    pub fn colors(&self) -> impl Iterator<Item = Color> + '_ {
        self.colors.iter().copied()
    }

    #[must_use]
    pub fn color_count(&self) -> usize {
        self.colors.len()
    }

    /// Targeted colors carried by `gene`.
    pub fn matching_colors<'a>(&'a self, gene: &'a Gene) -> impl Iterator<Item = Color> + 'a {
        self.colors().filter(|color| gene.has_color(*color))
    }
}
