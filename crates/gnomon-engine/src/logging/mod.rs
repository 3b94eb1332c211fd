//! Logging utilities.
//!
//! Centralizes logger initialization for host applications embedding the
//! dial. Intentionally small; nothing here goes beyond the standard `log`
//! facade.

mod init;

pub use init::{LoggingConfig, init_logging};
