use crate::core::cycle_builder::DEFAULT_MAX_ATTEMPTS;
use crate::core::ConfigProvider;
use crate::domain::ports::OutputFormat;
use crate::utils::error::{Result, SantaError};
use crate::utils::validation::{validate_path, validate_positive_number, Validate};
use regex::Regex;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub draw: DrawConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct InputConfig {
    pub participants: Option<String>,
    pub partners: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DrawConfig {
    pub seed: Option<u64>,
    pub max_attempts: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    pub format: Option<OutputFormat>,
    pub path: Option<String>,
}

impl TomlConfig {
    /// Loads a config file. Relative input paths are taken relative to the file itself.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        let mut config = Self::from_toml_str(&content)?;

        if let Some(base) = path.as_ref().parent() {
            config.input.participants = config
                .input
                .participants
                .map(|p| resolve_relative(base, &p));
            config.input.partners = config.input.partners.map(|p| resolve_relative(base, &p));
        }

        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SantaError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SantaError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

fn resolve_relative(base: &Path, path: &str) -> String {
    let candidate = Path::new(path);
    if candidate.is_absolute() || base.as_os_str().is_empty() {
        path.to_string()
    } else {
        base.join(candidate).to_string_lossy().into_owned()
    }
}

impl ConfigProvider for TomlConfig {
    fn participants_path(&self) -> Option<&str> {
        self.input.participants.as_deref()
    }

    fn partners_path(&self) -> Option<&str> {
        self.input.partners.as_deref()
    }

    fn seed(&self) -> Option<u64> {
        self.draw.seed
    }

    fn max_attempts(&self) -> usize {
        self.draw.max_attempts.unwrap_or(DEFAULT_MAX_ATTEMPTS)
    }

    fn output_format(&self) -> OutputFormat {
        self.output.format.unwrap_or_default()
    }

    fn output_path(&self) -> Option<&str> {
        self.output.path.as_deref()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.input.participants {
            validate_path("input.participants", path)?;
        }
        if let Some(path) = &self.input.partners {
            validate_path("input.partners", path)?;
        }
        if let Some(max_attempts) = self.draw.max_attempts {
            validate_positive_number("draw.max_attempts", max_attempts, 1)?;
        }
        if let Some(path) = &self.output.path {
            validate_path("output.path", path)?;
        }
        Ok(())
    }
}
