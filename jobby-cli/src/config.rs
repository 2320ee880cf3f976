//! Configuration module
//!
//! Settings for a shell session, resolved from command-line flags and
//! their environment variable fallbacks.

use tracing_subscriber::EnvFilter;

/// Default log directive when neither `--log-filter` nor `JOBBY_LOG` is set
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Colourize terminal output
    pub color: bool,

    /// `tracing` filter directives (e.g. "jobby_store=debug")
    pub log_filter: String,

    /// Preload a few sample applications at startup
    pub seed_demo: bool,
}

impl Config {
    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.log_filter.trim().is_empty() {
            anyhow::bail!("log filter cannot be empty");
        }

        EnvFilter::try_new(&self.log_filter)
            .map_err(|e| anyhow::anyhow!("invalid log filter '{}': {}", self.log_filter, e))?;

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            color: true,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            seed_demo: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.color);
        assert!(!config.seed_demo);
        assert_eq!(config.log_filter, "warn");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();

        config.log_filter = "jobby_store=debug,warn".to_string();
        assert!(config.validate().is_ok());

        config.log_filter = String::new();
        assert!(config.validate().is_err());

        config.log_filter = "jobby_store=loud".to_string();
        assert!(config.validate().is_err());
    }
}
