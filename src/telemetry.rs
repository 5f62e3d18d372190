//! Telemetry helpers for hosts embedding `poet-timeline`.
//!
//! The library only emits `tracing` events; installing a subscriber stays the
//! host's decision. The CLI calls `init_default_tracing` at startup.

/// Default directive used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "poet_timeline=info";

/// Initializes a compact stderr `tracing` subscriber when the `telemetry`
/// feature is enabled.
///
/// Returns `false` when the feature is disabled or when the host already
/// installed a global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_FILTER));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
