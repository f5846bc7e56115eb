//! Configuration and logging utilities

pub mod config;
pub mod logging;

pub use config::{ConfigError, ConfigurationManager, ServiceConfig};
pub use logging::{init_logging, LogLevel};
