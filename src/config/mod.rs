pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

#[cfg(feature = "cli")]
mod cli {
    use super::toml_config::TomlConfig;
    use crate::core::cycle_builder::DEFAULT_MAX_ATTEMPTS;
    use crate::core::ConfigProvider;
    use crate::domain::ports::OutputFormat;
    use crate::utils::error::Result;
    use crate::utils::validation::{
        validate_path, validate_positive_number, validate_required_field, Validate,
    };
    use clap::Parser;

    #[derive(Debug, Clone, Default, Parser)]
    #[command(name = "secret-santa")]
    #[command(about = "Draws a Secret Santa cycle where nobody gives to themselves or their partner")]
    pub struct CliConfig {
        /// File with one participant per line
        #[arg(long)]
        pub participants: Option<String>,

        /// File with one comma-separated partner pair per line
        #[arg(long)]
        pub partners: Option<String>,

        /// TOML configuration file; command line flags take precedence
        #[arg(short, long)]
        pub config: Option<String>,

        /// Seed for a reproducible draw
        #[arg(long)]
        pub seed: Option<u64>,

        #[arg(long, help = "Attempts before giving up [default: 1000]")]
        pub max_attempts: Option<usize>,

        #[arg(long, value_enum)]
        pub format: Option<OutputFormat>,

        /// Write the result to this file instead of stdout
        #[arg(short, long)]
        pub output: Option<String>,

        /// Validate the input without drawing
        #[arg(long)]
        pub dry_run: bool,

        #[arg(short, long, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(long, help = "Emit logs as JSON lines")]
        pub log_json: bool,
    }

    impl CliConfig {
        /// Fills every setting not given on the command line from the TOML file.
        pub fn merged_with(mut self, file: TomlConfig) -> Self {
            self.participants = self.participants.or(file.input.participants);
            self.partners = self.partners.or(file.input.partners);
            self.seed = self.seed.or(file.draw.seed);
            self.max_attempts = self.max_attempts.or(file.draw.max_attempts);
            self.format = self.format.or(file.output.format);
            self.output = self.output.or(file.output.path);
            self
        }
    }

    impl ConfigProvider for CliConfig {
        fn participants_path(&self) -> Option<&str> {
            self.participants.as_deref()
        }

        fn partners_path(&self) -> Option<&str> {
            self.partners.as_deref()
        }

        fn seed(&self) -> Option<u64> {
            self.seed
        }

        fn max_attempts(&self) -> usize {
            self.max_attempts.unwrap_or(DEFAULT_MAX_ATTEMPTS)
        }

        fn output_format(&self) -> OutputFormat {
            self.format.unwrap_or_default()
        }

        fn output_path(&self) -> Option<&str> {
            self.output.as_deref()
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            let participants = validate_required_field("participants", &self.participants)?;
            validate_path("participants", participants)?;

            if let Some(partners) = &self.partners {
                validate_path("partners", partners)?;
            }
            if let Some(max_attempts) = self.max_attempts {
                validate_positive_number("max_attempts", max_attempts, 1)?;
            }
            if let Some(output) = &self.output {
                validate_path("output", output)?;
            }
            Ok(())
        }
    }

}
