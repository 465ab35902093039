use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use crate::{Color, Stat, StatValues};

/// Quality tier of an emblem, ordered `Bronze < Silver < Gold`.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Deserialize,
    Serialize,
    derive_more::Display,
    derive_more::FromStr,
)]
pub enum Tier {
    #[default]
    Bronze,
    Silver,
    Gold,
}

impl Tier {
    /// Weight of the tier when scoring by tier (Gold=3, Silver=2, Bronze=1).
    #[must_use]
    pub const fn weight(self) -> u8 {
        match self {
            Tier::Bronze => 1,
            Tier::Silver => 2,
            Tier::Gold => 3,
        }
    }

    /// Parses the single-letter grade used by the emblem database
    /// (`A`=Gold, `B`=Silver, `C`=Bronze).
    #[must_use]
    pub fn from_grade(grade: &str) -> Option<Self> {
        match grade {
            "A" => Some(Tier::Gold),
            "B" => Some(Tier::Silver),
            "C" => Some(Tier::Bronze),
            _ => None,
        }
    }
}

/// Colors carried by a single emblem (one or two).
pub type Colors = ArrayVec<Color, 2>;

/// Species-level template of an emblem, as read from the data source.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Candidate {
    name: String,
    tier: Tier,
    colors: Colors,
    stats: StatValues,
}

impl Candidate {
    #[must_use]
    pub fn new(name: impl Into<String>, tier: Tier, colors: Colors, stats: StatValues) -> Self {
        Self {
            name: name.into(),
            tier,
            colors,
            stats,
        }
    }

    /// Species name; two emblems with the same name may not share a team.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn tier(&self) -> Tier {
        self.tier
    }

    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    #[must_use]
    pub fn has_color(&self, color: Color) -> bool {
        self.colors.contains(&color)
    }

    #[must_use]
    pub fn stats(&self) -> &StatValues {
        &self.stats
    }

    #[must_use]
    pub fn stat(&self, stat: Stat) -> f32 {
        self.stats[stat]
    }
}

/// Occupant of one team slot: a value copy of the [`Candidate`] it was built from.
///
/// Replacing a gene never affects other genes or the pool.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, derive_more::Deref)]
pub struct Gene(Candidate);

impl Gene {
    #[must_use]
    pub fn into_candidate(self) -> Candidate {
        self.0
    }
}

impl From<&Candidate> for Gene {
    fn from(candidate: &Candidate) -> Self {
        Self(candidate.clone())
    }
}
