//! Optional `tracing` subscriber for binaries built on `regression-lab`.
//!
//! The library only emits events; nothing is printed until a subscriber is
//! installed. Hosts with their own subscriber should skip this module.

/// Filter used when `RUST_LOG` is unset or unparsable.
#[cfg(feature = "telemetry")]
const DEFAULT_FILTER: &str = "regression_lab=info";

/// Installs a compact fmt subscriber filtered by `RUST_LOG`.
///
/// Without `RUST_LOG` only this crate's `info` and above are shown, so fit
/// degeneracy warnings surface while dependencies stay quiet. Event targets
/// are omitted from each line.
///
/// Returns `false` when the `telemetry` feature is off or another global
/// subscriber is already installed; callers may ignore it.
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_FILTER)),
            )
            .with_target(false)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
