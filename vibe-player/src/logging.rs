use tracing_subscriber::EnvFilter;

/// Initializes the global tracing subscriber from a filter string like `info` or
/// `vibe_player=debug`. An invalid filter falls back to `info`.
pub fn initialize_logging(filters: &str) {
	let environment_filter = EnvFilter::try_new(filters).unwrap_or_else(|_| EnvFilter::new("info"));
	tracing_subscriber::fmt().with_env_filter(environment_filter).init();
}
