pub mod cycle_builder;
pub mod engine;
pub mod validator;

pub use crate::domain::model::{Cycle, Participant, PartnerPair, Roster};
pub use crate::domain::ports::{ConfigProvider, CycleRenderer, RosterSource};
pub use crate::utils::error::Result;
