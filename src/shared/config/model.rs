use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub logging: LoggingConfig,
    pub window: WindowConfig,
}

#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    pub stdout_level: String,
    pub file_level: String,
    pub log_dir: String,
}

#[derive(Debug, Deserialize)]
pub struct WindowConfig {
    /// Target number of bars used when deriving an automatic interval
    /// from an absolute time range.
    pub target_bars: u32,
}

pub fn load_settings() -> Result<Settings, config::ConfigError> {
    let config_path = env::var("LENSIFY_CONFIG").unwrap_or_else(|_| "lensify".to_string());

    let settings: Settings = config::Config::builder()
        .set_default("logging.stdout_level", "info")?
        .set_default("logging.file_level", "debug")?
        .set_default("logging.log_dir", "logs")?
        .set_default("window.target_bars", 100)?
        .add_source(config::File::with_name(&config_path).required(false))
        .build()?
        .try_deserialize()?;

    Ok(settings)
}
