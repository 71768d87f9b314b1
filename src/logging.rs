use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Sends log output to stderr so stdout only carries the summary.
///
/// `RUST_LOG` takes precedence over `level`.
pub fn init(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // try_init fails with an "already set" error when a global subscriber
    // exists from an earlier call; the first one stays in place
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_timer(fmt::time::uptime())
                .with_writer(std::io::stderr),
        )
        .try_init();
}

/// Maps `-q`/`-v` flags to a filter level.
pub fn level(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "warn";
    }
    match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}
