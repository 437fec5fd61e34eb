pub mod schema;
pub mod watcher;

pub use schema::{
    DashboardConfig, SamplerConfig, ThemeConfig, MAX_INTERVAL_SECS, MIN_INTERVAL_SECS,
};
pub use watcher::ConfigWatcher;

use aqmon_core::{AqError, Result};
use std::path::{Path, PathBuf};

/// Load configuration from a TOML file.  Returns `DashboardConfig::default()`
/// if the file doesn't exist so the dashboard always has sensible defaults.
pub fn load(path: impl AsRef<Path>) -> Result<DashboardConfig> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::warn!(
            "Config file not found at '{}'; using defaults.",
            path.display()
        );
        return Ok(DashboardConfig::default());
    }

    let raw = std::fs::read_to_string(path)
        .map_err(|e| AqError::Config(format!("cannot read '{}': {e}", path.display())))?;

    parse(&raw)
}

/// Parse and validate a TOML document.
pub fn parse(raw: &str) -> Result<DashboardConfig> {
    let config: DashboardConfig =
        toml::from_str(raw).map_err(|e| AqError::Config(format!("TOML parse error: {e}")))?;
    validate(config)
}

/// Reject settings the sampler cannot run with and clamp the interval into
/// `[MIN_INTERVAL_SECS, MAX_INTERVAL_SECS]`.
pub fn validate(mut config: DashboardConfig) -> Result<DashboardConfig> {
    let sampler = &mut config.sampler;

    if sampler.capacity == 0 {
        return Err(AqError::Config("sampler.capacity must be at least 1".into()));
    }
    if sampler.table_rows == 0 {
        return Err(AqError::Config("sampler.table_rows must be at least 1".into()));
    }
    if !sampler.interval_secs.is_finite() || sampler.interval_secs <= 0.0 {
        return Err(AqError::Config(format!(
            "sampler.interval_secs must be a positive number, got {}",
            sampler.interval_secs
        )));
    }

    let clamped = clamp_interval(sampler.interval_secs);
    if clamped != sampler.interval_secs {
        tracing::warn!(
            "sampler.interval_secs = {} is outside {MIN_INTERVAL_SECS}–{MAX_INTERVAL_SECS}s; using {clamped}",
            sampler.interval_secs
        );
        sampler.interval_secs = clamped;
    }

    Ok(config)
}

/// Clamp an interval (seconds) into the supported range.
pub fn clamp_interval(secs: f64) -> f64 {
    secs.clamp(MIN_INTERVAL_SECS, MAX_INTERVAL_SECS)
}

/// Return the default config path, honouring `$XDG_CONFIG_HOME`.
pub fn default_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("aqmon").join("aqmon.toml")
}
