// File: crates/schedule-core/src/telemetry.rs
// Summary: Opt-in tracing subscriber setup for the demo hosts.

/// Console logging for `schedule-demo` and `schedule-window-demo`.
///
/// Shows the mount, skipped-mount, and surface reallocation events the chart
/// emits. `RUST_LOG=schedule_core=trace` adds per-redraw and per-hover lines;
/// without `RUST_LOG` only `info` and above print. Library users who install
/// their own subscriber get `false` back and keep theirs.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
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
