use tracing_subscriber::EnvFilter;

/// Installs the global fmt subscriber. The filter comes from the config file
/// only; an unparsable level falls back to `info`.
pub fn init(level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
