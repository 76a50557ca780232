use tracing_subscriber::EnvFilter;

/// Installs the global tracing subscriber. The host calls this once at
/// plugin load; `OVERVIEW_NAV_LOG` overrides the default filter.
pub fn init() {
    let filter = EnvFilter::try_from_env("OVERVIEW_NAV_LOG")
        .unwrap_or_else(|_| EnvFilter::new("overview_nav=info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
