//! Logger trait definition

use std::sync::Arc;

/// Logger abstraction for runtime-agnostic logging
///
/// The host build tool supplies its own implementation so that resolution
/// messages land in its output. Secrets are never passed to a logger.
///
/// Implementations:
/// - `NoOpLogger`: Silent logger, the default
/// - `ConsoleLogger`: Logs to stdout/stderr
pub trait Logger: Send + Sync {
    fn debug(&self, message: &str);

    fn info(&self, message: &str);

    fn warn(&self, message: &str);

    fn error(&self, message: &str);
}

/// Type alias for an Arc-wrapped logger
pub type SharedLogger = Arc<dyn Logger>;
