//! Logging utilities.
//!
//! Centralizes logger initialization. Library code logs through the `log`
//! facade only; binaries install `env_logger` via [`init_logging`].

mod init;

pub use init::{init_logging, LoggingConfig, DEFAULT_FILTER};
