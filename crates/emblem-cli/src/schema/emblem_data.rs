//! Emblem records as exported by the emblem database.
//!
//! The file is a JSON array; every field of a record is optional:
//!
//! ```json
//! [
//!   {
//!     "display_name": "Pikachu",
//!     "grade": "A",
//!     "color1": "Yellow",
//!     "stats": [{ "hp": 60, "sp_attack": 1.2, "speed": -21 }]
//!   }
//! ]
//! ```
//!
//! Only the first element of `stats` is read.

use anyhow::Context as _;
use emblem_core::{Candidate, Color, Colors, Stat, StatValues, Tier};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct EmblemRecord {
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub grade: Option<String>,
    #[serde(default)]
    pub color1: Option<Color>,
    #[serde(default)]
    pub color2: Option<Color>,
    #[serde(default)]
    pub stats: Option<Vec<EmblemStatsRecord>>,
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct EmblemStatsRecord {
    #[serde(default)]
    pub hp: Option<f32>,
    #[serde(default)]
    pub attack: Option<f32>,
    #[serde(default)]
    pub defense: Option<f32>,
    #[serde(default)]
    pub sp_attack: Option<f32>,
    #[serde(default)]
    pub sp_defense: Option<f32>,
    #[serde(default)]
    pub crit: Option<f32>,
    #[serde(default)]
    pub speed: Option<f32>,
    #[serde(default)]
    pub cdr: Option<f32>,
}

impl EmblemStatsRecord {
    fn get(&self, stat: Stat) -> Option<f32> {
        match stat {
            Stat::Hp => self.hp,
            Stat::Attack => self.attack,
            Stat::Defense => self.defense,
            Stat::SpecialAttack => self.sp_attack,
            Stat::SpecialDefense => self.sp_defense,
            Stat::CritChance => self.crit,
            Stat::MovementSpeed => self.speed,
            Stat::CooldownReduction => self.cdr,
        }
    }

    fn to_stat_values(&self) -> StatValues {
        StatValues::from_fn(|stat| self.get(stat).unwrap_or(0.0))
    }
}

impl EmblemRecord {
    pub fn tier(&self) -> anyhow::Result<Tier> {
        match &self.grade {
            None => Ok(Tier::default()),
            Some(grade) => Tier::from_grade(grade)
                .with_context(|| format!("Unknown grade '{grade}'")),
        }
    }

    pub fn to_candidate(&self) -> anyhow::Result<Candidate> {
        let name = self.display_name.clone().unwrap_or_default();
        let tier = self
            .tier()
            .with_context(|| format!("Invalid emblem record '{name}'"))?;
        let colors = [self.color1, self.color2]
            .into_iter()
            .flatten()
            .collect::<Colors>();
        let stats = self
            .stats
            .as_deref()
            .and_then(<[_]>::first)
            .map(EmblemStatsRecord::to_stat_values)
            .unwrap_or_default();
        Ok(Candidate::new(name, tier, colors, stats))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Vec<EmblemRecord> {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_full_record() {
        let records = parse(
            r#"[{
                "display_name": "Pikachu",
                "grade": "A",
                "color1": "Yellow",
                "color2": "Navy",
                "stats": [
                    {"hp": 60, "attack": 1.5, "sp_attack": 1.2, "crit": 0.3, "speed": -21, "cdr": 0.5},
                    {"hp": 999}
                ]
            }]"#,
        );
        let candidate = records[0].to_candidate().unwrap();
        assert_eq!(candidate.name(), "Pikachu");
        assert_eq!(candidate.tier(), Tier::Gold);
        assert_eq!(candidate.colors(), [Color::Yellow, Color::Navy]);
        assert_eq!(candidate.stat(Stat::Hp), 60.0);
        assert_eq!(candidate.stat(Stat::SpecialAttack), 1.2);
        assert_eq!(candidate.stat(Stat::MovementSpeed), -21.0);
        assert_eq!(candidate.stat(Stat::Defense), 0.0);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let records = parse(r#"[{}, {"display_name": "Eevee", "stats": []}, {"stats": null}]"#);
        for record in &records {
            let candidate = record.to_candidate().unwrap();
            assert_eq!(candidate.tier(), Tier::Bronze);
            assert!(candidate.colors().is_empty());
            assert_eq!(*candidate.stats(), StatValues::default());
        }
        assert_eq!(records[0].to_candidate().unwrap().name(), "");
        assert_eq!(records[1].to_candidate().unwrap().name(), "Eevee");
    }

    #[test]
    fn test_grades() {
        let records = parse(r#"[{"grade": "B"}, {"grade": "C"}, {"grade": "S"}]"#);
        assert_eq!(records[0].tier().unwrap(), Tier::Silver);
        assert_eq!(records[1].tier().unwrap(), Tier::Bronze);
        assert!(records[2].to_candidate().is_err());
    }

    #[test]
    fn test_unknown_color_is_rejected() {
        let result = serde_json::from_str::<Vec<EmblemRecord>>(r#"[{"color1": "Orange"}]"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let records = parse(r#"[{"display_name": "Mew", "id": 151, "image": "mew.png"}]"#);
        assert_eq!(records[0].to_candidate().unwrap().name(), "Mew");
    }
}
