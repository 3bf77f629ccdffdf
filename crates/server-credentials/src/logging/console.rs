//! Console logger implementation

use super::traits::Logger;

/// A logger that outputs to the console (stdout/stderr)
#[derive(Debug, Clone)]
pub struct ConsoleLogger {
    prefix: String,
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleLogger {
    /// Create a new console logger with the `[server-credentials]` prefix
    pub fn new() -> Self {
        Self {
            prefix: "[server-credentials]".to_string(),
        }
    }

    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    fn format(&self, level: &str, message: &str) -> String {
        format!("{} {}: {}", self.prefix, level, message)
    }
}

impl Logger for ConsoleLogger {
    fn debug(&self, message: &str) {
        eprintln!("{}", self.format("DEBUG", message));
    }

    fn info(&self, message: &str) {
        println!("{}", self.format("INFO", message));
    }

    fn warn(&self, message: &str) {
        eprintln!("{}", self.format("WARN", message));
    }

    fn error(&self, message: &str) {
        eprintln!("{}", self.format("ERROR", message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_logger_prefix() {
        let logger = ConsoleLogger::new();
        assert_eq!(logger.prefix(), "[server-credentials]");

        let custom = ConsoleLogger::with_prefix("[jib]");
        assert_eq!(custom.prefix(), "[jib]");
    }

    #[test]
    fn test_console_logger_format() {
        let logger = ConsoleLogger::with_prefix("[build]");
        assert_eq!(
            logger.format("DEBUG", "no settings for ghcr.io"),
            "[build] DEBUG: no settings for ghcr.io"
        );
    }
}
