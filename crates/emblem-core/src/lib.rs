//! Data model for emblem team building.
//!
//! This crate holds everything the genetic search operates on:
//!
//! - [`Stat`], [`StatValues`], [`StatRange`] - the eight combat stats, stored in an
//!   enum-indexed table, and their per-pool ranges used for normalization
//! - [`Color`], [`ColorFamily`], [`ColorCounts`] - color tags and set-bonus tiers
//! - [`Tier`], [`Candidate`], [`Gene`] - species templates and their per-slot copies
//! - [`CandidatePool`] - every candidate available to a run
//! - [`Team`] - a chromosome of [`TEAM_SIZE`] genes, with the validity filter and
//!   seeding
//!
//! # Example
//!
//! ```
//! use emblem_core::{Candidate, CandidatePool, Colors, StatValues, Team, Tier};
//!
//! let candidates = (0..12)
//!     .map(|i| Candidate::new(format!("emblem-{i}"), Tier::Gold, Colors::new(), StatValues::default()))
//!     .collect();
//! let pool = CandidatePool::new(candidates).unwrap();
//!
//! let team = Team::seed(&pool, &mut rand::rng(), emblem_core::DEFAULT_SEED_ATTEMPTS).unwrap();
//! assert!(team.is_valid());
//! ```

pub use self::{candidate::*, color::*, pool::*, stat::*, team::*};

mod candidate;
mod color;
mod pool;
mod stat;
mod team;
