use tracing_subscriber::EnvFilter;

/// Initializes logging. Call once at startup.
///
/// Level defaults to INFO (DEBUG with `--verbose`) and can be overridden
/// through the RUST_LOG env var.
pub fn init(verbose: bool) {
    let fallback = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
