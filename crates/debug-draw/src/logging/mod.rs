//! Logging utilities.
//!
//! The library itself only emits through the `log` facade; this module is
//! for binaries that want the default `env_logger` setup.

mod init;

pub use init::{init_logging, LoggingConfig};
