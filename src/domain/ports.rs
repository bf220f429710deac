use crate::domain::model::{Cycle, Roster};
use crate::utils::error::Result;
use serde::Deserialize;

/// Output flavours understood by the renderers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub trait ConfigProvider {
    fn participants_path(&self) -> Option<&str>;
    fn partners_path(&self) -> Option<&str>;
    fn seed(&self) -> Option<u64>;
    fn max_attempts(&self) -> usize;
    fn output_format(&self) -> OutputFormat;
    fn output_path(&self) -> Option<&str>;
}

/// Where participants and partnerships come from.
pub trait RosterSource {
    fn load(&self) -> Result<Roster>;
}

pub trait CycleRenderer {
    fn render(&self, cycle: &Cycle, seed: u64) -> Result<String>;
}
