use once_cell::sync::Lazy;

use crate::shared::config::model::{Settings, load_settings};

/// Process-wide settings, loaded once on first use. The conversion core
/// only reads `window.target_bars`; the logging setup reads the rest.
pub static CONFIG: Lazy<Settings> =
    Lazy::new(|| load_settings().expect("Failed to load configuration"));
