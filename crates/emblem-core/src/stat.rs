use std::{
    fmt,
    ops::{Add, Index, IndexMut},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

/// Combat statistic carried by every emblem.
///
/// The set is closed: every emblem has a value for each of the eight stats
/// (absent values in the source data are read as `0`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[repr(u8)]
pub enum Stat {
    #[serde(rename = "hp")]
    Hp = 0,
    #[serde(rename = "atk")]
    Attack = 1,
    #[serde(rename = "def")]
    Defense = 2,
    #[serde(rename = "sp_atk")]
    SpecialAttack = 3,
    #[serde(rename = "sp_def")]
    SpecialDefense = 4,
    #[serde(rename = "crit_chance")]
    CritChance = 5,
    #[serde(rename = "mv_speed")]
    MovementSpeed = 6,
    #[serde(rename = "cd_reduction")]
    CooldownReduction = 7,
}

impl Stat {
    /// Number of stats (8).
    pub const LEN: usize = 8;

    /// All stats in declaration order.
    pub const ALL: [Stat; Self::LEN] = [
        Stat::Hp,
        Stat::Attack,
        Stat::Defense,
        Stat::SpecialAttack,
        Stat::SpecialDefense,
        Stat::CritChance,
        Stat::MovementSpeed,
        Stat::CooldownReduction,
    ];

    /// Returns the short identifier used on the command line and in reports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Stat::Hp => "hp",
            Stat::Attack => "atk",
            Stat::Defense => "def",
            Stat::SpecialAttack => "sp_atk",
            Stat::SpecialDefense => "sp_def",
            Stat::CritChance => "crit_chance",
            Stat::MovementSpeed => "mv_speed",
            Stat::CooldownReduction => "cd_reduction",
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown stat '{name}'")]
pub struct ParseStatError {
    name: String,
}

impl FromStr for Stat {
    type Err = ParseStatError;

    /// Accepts the short identifiers (`sp_atk`, `mv_speed`, ...) as well as
    /// the long snake-case names (`special_attack`, `movement_speed`, ...).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let stat = match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "hp" => Stat::Hp,
            "atk" | "attack" => Stat::Attack,
            "def" | "defense" => Stat::Defense,
            "sp_atk" | "special_attack" => Stat::SpecialAttack,
            "sp_def" | "special_defense" => Stat::SpecialDefense,
            "crit" | "crit_chance" => Stat::CritChance,
            "speed" | "mv_speed" | "movement_speed" => Stat::MovementSpeed,
            "cdr" | "cd_reduction" | "cooldown_reduction" => Stat::CooldownReduction,
            _ => {
                return Err(ParseStatError {
                    name: s.to_owned(),
                });
            }
        };
        Ok(stat)
    }
}

/// One value per [`Stat`], indexed by the stat itself.
#[derive(Debug, Default, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct StatValues([f32; Stat::LEN]);

impl StatValues {
    /// Builds a table by evaluating `f` for every stat.
    pub fn from_fn<F>(mut f: F) -> Self
    where
        F: FnMut(Stat) -> f32,
    {
        Self(Stat::ALL.map(&mut f))
    }

    /// Returns the value of `stat`.
    #[must_use]
    pub fn get(&self, stat: Stat) -> f32 {
        self.0[stat.index()]
    }

    /// Iterates over `(stat, value)` pairs in [`Stat::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Stat, f32)> + '_ {
        Stat::ALL.into_iter().map(|stat| (stat, self.get(stat)))
    }
}

impl Index<Stat> for StatValues {
    type Output = f32;

    fn index(&self, stat: Stat) -> &Self::Output {
        &self.0[stat.index()]
    }
}

impl IndexMut<Stat> for StatValues {
    fn index_mut(&mut self, stat: Stat) -> &mut Self::Output {
        &mut self.0[stat.index()]
    }
}

impl Add for StatValues {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::from_fn(|stat| self[stat] + rhs[stat])
    }
}

impl std::iter::Sum for StatValues {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

/// Minimum and maximum raw value of one stat across a candidate pool.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct StatRange {
    pub min: f32,
    pub max: f32,
}

impl StatRange {
    /// Computes the range of `values`.
    ///
    /// Returns `None` if `values` is empty.
    pub fn from_values<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f32>,
    {
        let mut values = values.into_iter();
        let first = values.next()?;
        Some(values.fold(Self::point(first), |range, v| Self {
            min: range.min.min(v),
            max: range.max.max(v),
        }))
    }

    /// Range covering the single value `v`.
    #[must_use]
    pub const fn point(v: f32) -> Self {
        Self { min: v, max: v }
    }

    /// Returns `true` if every value in the pool was identical.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.max <= self.min
    }

    /// Maps `value` linearly so that `min` becomes 0 and `max` becomes 1.
    ///
    /// A degenerate range carries no information and normalizes everything to 0.
    #[must_use]
    pub fn normalize(&self, value: f32) -> f32 {
        if self.is_degenerate() {
            return 0.0;
        }
        (value - self.min) / (self.max - self.min)
    }
}
