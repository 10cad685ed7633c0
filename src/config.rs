use clap::ValueEnum;
use tracing_subscriber::EnvFilter;

use crate::domain::manager::ContactManager;
use crate::errors::AppError;

/// What the store holds when the process starts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum SeedChoice {
    #[default]
    Default,
    Empty,
}

impl SeedChoice {
    pub fn is_which(&self) -> &str {
        match self {
            SeedChoice::Default => "default",
            SeedChoice::Empty => "empty",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub seed: SeedChoice,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: SeedChoice::Default,
            log_level: "warn".to_string(),
        }
    }
}

impl Config {
    pub fn new(seed: SeedChoice, log_level: impl Into<String>) -> Self {
        Self {
            seed,
            log_level: log_level.into(),
        }
    }

    pub fn build_manager(&self) -> ContactManager {
        match self.seed {
            SeedChoice::Default => ContactManager::new(),
            SeedChoice::Empty => ContactManager::empty(),
        }
    }

    /// `RUST_LOG` wins over the configured level.
    pub fn env_filter(&self) -> Result<EnvFilter, AppError> {
        if let Ok(filter) = EnvFilter::try_from_default_env() {
            return Ok(filter);
        }
        EnvFilter::try_new(&self.log_level)
            .map_err(|e| AppError::Config(format!("log level '{}': {e}", self.log_level)))
    }

    /// Logs go to stderr so command output on stdout stays parseable.
    pub fn init_tracing(&self) -> Result<(), AppError> {
        let filter = self.env_filter()?;
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
        Ok(())
    }
}
