//! Logging configuration using tracing

use std::io::IsTerminal;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding an explicit log filter
pub const LOG_ENV: &str = "NOSY_LOG";

/// Filter used when neither flags, `NOSY_LOG` nor a readable config set one
pub const DEFAULT_LEVEL: &str = "warn";

/// Initialize the logging subsystem
///
/// Logs go to stderr so they never interleave with dashboard output on
/// stdout. `NOSY_LOG` wins over everything else.
///
/// # Examples
/// ```bash
/// NOSY_LOG=debug nosy-worker
/// NOSY_LOG=nosy_core=trace nosy-worker dashboard
/// ```
pub fn init(verbose: bool, quiet: bool, config_level: &str) {
    let env_filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(fallback_filter(verbose, quiet, config_level)));

    let result = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false)
                .with_thread_ids(false),
        )
        .try_init();

    if let Err(e) = result {
        eprintln!("failed to initialize logging: {e}");
    }
}

fn fallback_filter<'a>(verbose: bool, quiet: bool, config_level: &'a str) -> &'a str {
    if verbose {
        "debug"
    } else if quiet {
        "error"
    } else {
        config_level
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_config_level() {
        assert_eq!(fallback_filter(true, false, "warn"), "debug");
        assert_eq!(fallback_filter(false, true, "warn"), "error");
        assert_eq!(fallback_filter(false, false, "info"), "info");
    }
}
