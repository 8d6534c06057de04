//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the Lure tracing/logging system.
///
/// Reads the `LURE_LOG` environment variable for per-subsystem log levels.
/// Format: `LURE_LOG=lure_analysis=debug,lure_core=info`
///
/// Falls back to `lure=info` if `LURE_LOG` is not set or is invalid.
///
/// This function is idempotent — calling it multiple times is safe.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env("LURE_LOG").unwrap_or_else(|_| EnvFilter::new("lure=info"));
        let description = filter.to_string();

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true))
            .with(filter)
            .init();

        tracing::debug!(filter = %description, "tracing initialized");
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_tracing_is_idempotent() {
        init_tracing();
        init_tracing();
    }
}
