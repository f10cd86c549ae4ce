use fortimac_domain::Config;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Installs the fmt subscriber on stderr, keeping stdout free for `generate` output.
///
/// `RUST_LOG` takes precedence over `logging.level` when set.
pub fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| level_filter(&config.logging.level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();

    info!(level = %config.logging.level, "Logging initialized");
}

fn level_filter(level: &str) -> EnvFilter {
    EnvFilter::try_new(level.to_ascii_lowercase()).unwrap_or_else(|_| EnvFilter::new("info"))
}
