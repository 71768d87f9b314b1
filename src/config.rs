//! Run configuration.

use crate::error::{ProcessingError, Result};
use crate::loader::LoadMode;
use crate::number::NumberMode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Number of shards scanned in parallel. `1` scans on the calling thread.
    pub workers: usize,
    pub number_mode: NumberMode,
    /// Abort on the first malformed number instead of dropping the record.
    /// Requires [`NumberMode::Validated`].
    pub strict: bool,
    pub load_mode: LoadMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            workers: num_cpus::get(),
            number_mode: NumberMode::default(),
            strict: false,
            load_mode: LoadMode::default(),
        }
    }
}

impl Config {
    pub fn single_threaded() -> Self {
        Self::default().with_workers(1)
    }

    #[must_use]
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    #[must_use]
    pub fn with_number_mode(mut self, number_mode: NumberMode) -> Self {
        self.number_mode = number_mode;
        self
    }

    #[must_use]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    #[must_use]
    pub fn with_load_mode(mut self, load_mode: LoadMode) -> Self {
        self.load_mode = load_mode;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.workers == 0 {
            return Err(ProcessingError::InvalidConfig(
                "at least one worker is required".to_string(),
            ));
        }
        if self.strict && self.number_mode == NumberMode::Trusted {
            return Err(ProcessingError::InvalidConfig(
                "strict mode needs validated numbers".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = Config::default();
        assert!(config.workers >= 1);
        assert_eq!(config.number_mode, NumberMode::Trusted);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_workers_rejected() {
        let config = Config::default().with_workers(0);
        assert!(matches!(
            config.validate(),
            Err(ProcessingError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_strict_requires_validated_numbers() {
        let config = Config::single_threaded().with_strict(true);
        assert!(config.validate().is_err());
        assert!(config
            .with_number_mode(NumberMode::Validated)
            .validate()
            .is_ok());
    }
}
