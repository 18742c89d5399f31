//! Tracing setup.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the infalens tracing/logging system.
///
/// Reads the `INFALENS_LOG` environment variable for per-subsystem log
/// levels, e.g. `INFALENS_LOG=infalens_extract=debug,infalens_report=info`.
/// Falls back to `infalens=info` if `INFALENS_LOG` is not set or invalid.
///
/// Idempotent: calling it multiple times is safe.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("INFALENS_LOG")
            .unwrap_or_else(|_| EnvFilter::new("infalens=info"));

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true))
            .with(filter)
            .init();
    });
}
