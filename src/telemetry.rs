//! Opt-in tracing setup for applications embedding `xy-graph`.
//!
//! Surface events are emitted under the `xy_graph` target:
//! - `debug`: axis/trace registration, layout passes, committed range
//!   commands, history execute/undo/redo.
//! - `trace`: per-axis autoscale and stagger skips, residual layout area.
//! - `warn`: trace bindings skipped because an axis is missing or has the
//!   wrong orientation.
//!
//! Hosts either call [`init_default_tracing`] or install their own subscriber.

/// Filter used when `RUST_LOG` is unset: surface decisions at `debug`,
/// everything else at `warn`.
pub const DEFAULT_TRACING_FILTER: &str = "warn,xy_graph=debug";

/// Installs a compact `fmt` subscriber filtered by `RUST_LOG`, falling back to
/// [`DEFAULT_TRACING_FILTER`].
///
/// Returns `false` when the `telemetry` feature is disabled or a global
/// subscriber is already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_TRACING_FILTER));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::init_default_tracing;

    #[cfg(not(feature = "telemetry"))]
    #[test]
    fn disabled_feature_installs_nothing() {
        assert!(!init_default_tracing());
    }

    #[cfg(feature = "telemetry")]
    #[test]
    fn second_install_is_refused() {
        let _ = init_default_tracing();
        assert!(!init_default_tracing());
    }
}
