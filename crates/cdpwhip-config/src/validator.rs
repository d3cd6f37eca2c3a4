//! Configuration validation.

use crate::schema::Config;

/// Upper bound past which the dedup window is likely a mistake.
const LARGE_DEDUP_CAPACITY: usize = 1_000_000;

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }
}

/// A validation error.
#[derive(Debug)]
pub struct ValidationError {
    pub path: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// A validation warning.
#[derive(Debug)]
pub struct ValidationWarning {
    pub path: String,
    pub message: String,
}

impl ValidationWarning {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the configuration.
    pub fn validate(config: &Config) -> ValidationResult {
        let mut result = ValidationResult::default();
        Self::validate_dedup(config, &mut result);
        Self::validate_logging(config, &mut result);
        result
    }

    fn validate_dedup(config: &Config, result: &mut ValidationResult) {
        if config.dedup.enabled && config.dedup.capacity == 0 {
            result.add_warning(ValidationWarning::new(
                "dedup.capacity",
                "Deduplication is enabled with capacity 0, every event will pass through",
            ));
        }

        if config.dedup.capacity > LARGE_DEDUP_CAPACITY {
            result.add_warning(ValidationWarning::new(
                "dedup.capacity",
                format!(
                    "capacity is very high (>{}), the window is kept in memory",
                    LARGE_DEDUP_CAPACITY
                ),
            ));
        }
    }

    fn validate_logging(config: &Config, result: &mut ValidationResult) {
        if config.logging.filter.trim().is_empty() {
            result.add_error(ValidationError::new(
                "logging.filter",
                "Filter cannot be empty",
            ));
        }

        if let Some(ref dir) = config.logging.directory {
            if dir.trim().is_empty() {
                result.add_error(ValidationError::new(
                    "logging.directory",
                    "Directory cannot be empty when set",
                ));
            }
        }
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
