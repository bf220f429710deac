use crate::core::cycle_builder::{CycleBuilder, DEFAULT_MAX_ATTEMPTS};
use crate::core::validator::validate_roster;
use crate::domain::model::Cycle;
use crate::domain::ports::{ConfigProvider, RosterSource};
use crate::utils::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawSettings {
    pub seed: Option<u64>,
    pub max_attempts: usize,
}

impl Default for DrawSettings {
    fn default() -> Self {
        Self {
            seed: None,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl DrawSettings {
    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self {
            seed: config.seed(),
            max_attempts: config.max_attempts(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawReport {
    pub cycle: Cycle,
    /// Pass this back as the seed to reproduce the draw.
    pub seed: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RosterSummary {
    pub participants: usize,
    pub partnerships: usize,
    pub unpaired: usize,
}

pub struct SantaEngine<S: RosterSource> {
    source: S,
    settings: DrawSettings,
}

impl<S: RosterSource> SantaEngine<S> {
    pub fn new(source: S, settings: DrawSettings) -> Self {
        Self { source, settings }
    }

    pub fn run(&self) -> Result<DrawReport> {
        tracing::info!("Loading roster...");
        let roster = self.source.load()?;
        tracing::info!(
            "Loaded {} participants and {} partnerships",
            roster.participants.len(),
            roster.partner_pairs.len()
        );

        tracing::info!("Validating roster...");
        let validated = validate_roster(&roster.participants, &roster.partner_pairs)?;

        let seed = self.settings.seed.unwrap_or_else(rand::random);
        tracing::info!(
            "Drawing cycle with seed {} (max {} attempts)",
            seed,
            self.settings.max_attempts
        );
        let cycle = CycleBuilder::seeded(seed)
            .with_max_attempts(self.settings.max_attempts)
            .build(&validated)?;

        tracing::info!("Drew a cycle of {} participants", cycle.len());
        Ok(DrawReport { cycle, seed })
    }

    /// Loads and validates without drawing.
    pub fn dry_run(&self) -> Result<RosterSummary> {
        let roster = self.source.load()?;
        let validated = validate_roster(&roster.participants, &roster.partner_pairs)?;
        let partnerships = validated.partner_pairs().len();

        Ok(RosterSummary {
            participants: validated.len(),
            partnerships,
            unpaired: validated.len() - partnerships * 2,
        })
    }
}
