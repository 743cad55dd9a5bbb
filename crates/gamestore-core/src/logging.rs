//! Tracing setup shared by the CLI and the desktop app.
//!
//! `RUST_LOG` always wins; otherwise the level comes from the `-v` count.
//! Output goes to stderr so command output on stdout stays clean.
//!
//! ```bash
//! # Cart engine internals
//! RUST_LOG=gamestore_core=debug gamestore shell
//! ```

use tracing_subscriber::EnvFilter;

/// Map a `-v` count to a filter directive
pub fn filter_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global fmt subscriber
///
/// Calling this twice is harmless; the second install is ignored.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_for_verbosity(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(filter_for_verbosity(0), "warn");
        assert_eq!(filter_for_verbosity(1), "info");
        assert_eq!(filter_for_verbosity(2), "debug");
        assert_eq!(filter_for_verbosity(3), "trace");
        assert_eq!(filter_for_verbosity(200), "trace");
    }

    #[test]
    fn test_init_twice_does_not_panic() {
        init(0);
        init(2);
    }
}
