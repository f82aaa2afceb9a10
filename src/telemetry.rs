//! Tracing setup for hosts embedding the overlay.
//!
//! The overlay itself only emits `tracing` events (commits, resolved
//! defaults, ignored input); wiring a subscriber is left to the host.
//! [`init_default_tracing`] offers a minimal one behind the `telemetry`
//! feature for hosts that have no subscriber of their own.

/// Installs a compact `tracing` subscriber when the `telemetry` feature
/// is enabled.
///
/// The default filter enables `info` and above for this crate only;
/// `RUST_LOG` overrides it. Returns `false` when the feature is disabled
/// or another global subscriber is already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("rangeband_rs=info"));

        return tracing_subscriber::fmt()
            .with_env_filter(filter)
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
