use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::{DEFAULT_NEAREST_K, DISTANCE_DECIMALS, INTERSECTION_EPSILON, MAX_OBSERVATIONS};
use crate::utils::logging::LogLevel;

/// Service-wide configuration parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Per-coordinate tolerance for trilateration comparisons
    pub tolerance: f64,
    /// Decimal digits kept in pairwise distance responses
    pub distance_decimals: u32,
    /// Neighbours returned by a nearest query that omits `k`
    pub default_k: usize,
    /// Proximity reports consumed per trilateration solve
    pub max_observations: usize,
    /// Log level used when `RUST_LOG` is unset
    pub log_level: LogLevel,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            tolerance: INTERSECTION_EPSILON,
            distance_decimals: DISTANCE_DECIMALS,
            default_k: DEFAULT_NEAREST_K,
            max_observations: MAX_OBSERVATIONS,
            log_level: LogLevel::Info,
        }
    }
}

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("Invalid parameter '{parameter}' = '{value}': {reason}")]
    InvalidParameter { parameter: String, value: String, reason: String },

    #[error("I/O error: {message}")]
    IoError { message: String },

    #[error("Serialization error: {message}")]
    SerializationError { message: String },
}

/// Configuration validation result
#[derive(Debug)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<ConfigError>,
    pub warnings: Vec<String>,
}

/// Holds the active configuration and where it was loaded from
#[derive(Debug, Default)]
pub struct ConfigurationManager {
    config: ServiceConfig,
    config_file_path: Option<PathBuf>,
    is_modified: bool,
}

impl ConfigurationManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut manager = Self::new();
        manager.load_from_file(path)?;
        Ok(manager)
    }

    pub fn get_config(&self) -> &ServiceConfig {
        &self.config
    }

    pub fn into_config(self) -> ServiceConfig {
        self.config
    }

    pub fn is_modified(&self) -> bool {
        self.is_modified
    }

    pub fn config_file_path(&self) -> Option<&Path> {
        self.config_file_path.as_deref()
    }

    /// Replaces the configuration if it validates
    pub fn update_config(&mut self, config: ServiceConfig) -> Result<(), ConfigError> {
        Self::first_error(Self::validate_config(&config))?;
        self.config = config;
        self.is_modified = true;
        Ok(())
    }

    /// Sets the trilateration tolerance, returning the previous value
    pub fn set_tolerance(&mut self, tolerance: f64) -> Result<f64, ConfigError> {
        let updated = ServiceConfig { tolerance, ..self.config.clone() };
        let old = self.config.tolerance;
        self.update_config(updated)?;
        Ok(old)
    }

    pub fn set_log_level(&mut self, level: LogLevel) -> LogLevel {
        self.is_modified = true;
        std::mem::replace(&mut self.config.log_level, level)
    }

    /// Loads configuration from a JSON file; missing fields take their defaults
    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();

        let content = fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            message: format!("Failed to read config file '{}': {}", path.display(), e),
        })?;

        let config: ServiceConfig = serde_json::from_str(&content).map_err(|e| ConfigError::SerializationError {
            message: format!("Failed to parse config file '{}': {}", path.display(), e),
        })?;

        Self::first_error(Self::validate_config(&config))?;

        self.config = config;
        self.config_file_path = Some(path.to_path_buf());
        self.is_modified = false;
        Ok(())
    }

    pub fn save_to_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();

        let content = serde_json::to_string_pretty(&self.config).map_err(|e| ConfigError::SerializationError {
            message: format!("Failed to serialize config: {}", e),
        })?;

        fs::write(path, content).map_err(|e| ConfigError::IoError {
            message: format!("Failed to write config file '{}': {}", path.display(), e),
        })?;

        self.config_file_path = Some(path.to_path_buf());
        self.is_modified = false;
        Ok(())
    }

    pub fn validate_config(config: &ServiceConfig) -> ValidationResult {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        if !(config.tolerance > 0.0 && config.tolerance <= 1.0) {
            errors.push(ConfigError::InvalidParameter {
                parameter: "tolerance".to_string(),
                value: config.tolerance.to_string(),
                reason: "Tolerance must be in (0, 1]".to_string(),
            });
        } else if config.tolerance > 1e-2 {
            warnings.push(format!(
                "Tolerance {} is loose; inconsistent range readings may be accepted",
                config.tolerance
            ));
        }

        if config.distance_decimals > 12 {
            errors.push(ConfigError::InvalidParameter {
                parameter: "distance_decimals".to_string(),
                value: config.distance_decimals.to_string(),
                reason: "At most 12 decimal digits are meaningful for f64 distances".to_string(),
            });
        }

        if config.default_k == 0 {
            errors.push(ConfigError::InvalidParameter {
                parameter: "default_k".to_string(),
                value: "0".to_string(),
                reason: "Nearest queries must return at least one robot".to_string(),
            });
        }

        if !(2..=MAX_OBSERVATIONS).contains(&config.max_observations) {
            errors.push(ConfigError::InvalidParameter {
                parameter: "max_observations".to_string(),
                value: config.max_observations.to_string(),
                reason: format!("Trilateration uses between 2 and {} observations", MAX_OBSERVATIONS),
            });
        } else if config.max_observations < MAX_OBSERVATIONS {
            warnings.push("Two observations cannot disambiguate mirrored candidates".to_string());
        }

        ValidationResult {
            is_valid: errors.is_empty(),
            errors,
            warnings,
        }
    }

    fn first_error(validation: ValidationResult) -> Result<(), ConfigError> {
        match validation.errors.into_iter().next() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
