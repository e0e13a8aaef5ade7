//! Facade error types

use thiserror::Error;

use crate::config::ConfigError;

/// Errors raised while setting up the console
///
/// Logging itself never fails; these only come from bootstrap.
#[derive(Error, Debug)]
pub enum ConsoleError {
    /// The process-wide console was already set, explicitly or by a log call
    #[error("console already installed")]
    AlreadyInstalled,

    /// Configuration could not be loaded
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

pub type ConsoleResult<T> = Result<T, ConsoleError>;
