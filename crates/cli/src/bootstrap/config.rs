use fortimac_domain::{CliOverrides, Config};

/// Loads and validates the config. Nothing is logged here: the subscriber
/// is installed from the loaded config afterwards.
pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;
    Ok(config)
}
