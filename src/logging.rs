//! Tracing setup for the binary

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Default filter directive for a `-v` count
fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "budget_tracker=warn",
        1 => "budget_tracker=info",
        _ => "budget_tracker=debug",
    }
}

/// Install the global subscriber, writing to stderr
///
/// `RUST_LOG` wins when set. Later calls are no-ops.
pub fn init(verbosity: u8) {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(default_directive(0), "budget_tracker=warn");
        assert_eq!(default_directive(1), "budget_tracker=info");
        assert_eq!(default_directive(5), "budget_tracker=debug");
    }

    #[test]
    fn test_init_twice() {
        init(0);
        init(2);
    }
}
