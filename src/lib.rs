pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{FileRosterLoader, InMemoryRoster};
pub use crate::core::{
    cycle_builder::{build_cycle, CycleBuilder},
    engine::{DrawReport, DrawSettings, SantaEngine},
    validator::{validate_roster, ValidatedRoster},
};
pub use domain::model::{Assignment, Cycle, Participant, PartnerPair, Roster};
pub use utils::error::{Result, SantaError};
