//! Problem definitions and configuration for the three-bar bracket sizing
//! study.
//!
//! The bracket is sized by two cross-sectional areas: `a1` for the pair of
//! inclined outer members and `a2` for the vertical middle member. Three
//! objective variants (material volume, tip deflection, and a weighted blend
//! of the two) are minimized over the same feasible region, bounded by three
//! member-stress constraints and a box on both areas.
//!
//! Everything in this crate is pure math over a fixed [`StudyConfig`]; the
//! solver and figure rendering live in their own crates.

mod area;
mod config;
mod truss;

pub use area::AreaPair;
pub use config::{ConfigError, StudyConfig};
pub use truss::{ACTIVE_TOLERANCE, ActiveSet, CONSTRAINT_COUNT, Objective, TrussProblem};
