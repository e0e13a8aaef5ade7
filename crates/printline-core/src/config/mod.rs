//! Console configuration
//!
//! Sources, later ones winning:
//! - built-in defaults
//! - YAML file (`<config dir>/printline/config.yaml`)
//! - environment (`PRINTLINE_BATCH_LOG`, `PRINTLINE_TARGET`)

mod error;
mod file;

pub use error::{ConfigError, ConfigResult};
pub use file::{ConsoleConfig, ENV_BATCH_LOG, ENV_TARGET};
