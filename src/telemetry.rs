//! Log output setup for the CLI and test harnesses.
//!
//! Library code logs through the `log` facade. The `tracing-subscriber`
//! formatter installed here also captures `log` records and writes both to
//! stderr.

use std::sync::Once;

use tracing::Level;

static INIT: Once = Once::new();

/// Parse a level name, falling back to `INFO`.
pub fn parse_level(level: &str) -> Level {
    level.trim().parse().unwrap_or(Level::INFO)
}

/// Install the stderr subscriber. Later calls are no-ops.
pub fn init_logging(level: &str) {
    let max_level = parse_level(level);
    INIT.call_once(|| {
        let installed = tracing_subscriber::fmt()
            .with_max_level(max_level)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
        if installed.is_ok() {
            tracing::debug!("[Telemetry] Logging initialized at {}", max_level);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_levels() {
        assert_eq!(parse_level("debug"), Level::DEBUG);
        assert_eq!(parse_level("WARN"), Level::WARN);
        assert_eq!(parse_level(" error "), Level::ERROR);
    }

    #[test]
    fn unknown_level_falls_back_to_info() {
        assert_eq!(parse_level("loud"), Level::INFO);
        assert_eq!(parse_level(""), Level::INFO);
    }

    #[test]
    fn init_is_idempotent() {
        init_logging("debug");
        init_logging("trace");
    }
}
