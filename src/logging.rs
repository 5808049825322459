use tracing_subscriber::EnvFilter;

/// Initialise logging. The default level is `info`; with `debug` enabled the
/// level becomes `debug` and `RUST_LOG` may override it.
pub fn init(debug: bool) {
    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::new("info")
    };

    // Fails only when a global subscriber is already installed (tests, or a
    // second call); the existing one keeps working.
    if let Err(e) = tracing_subscriber::fmt().with_env_filter(filter).try_init() {
        tracing::debug!("logging already initialised: {e}");
    }
}
