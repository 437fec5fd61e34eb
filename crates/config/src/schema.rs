use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::time::Duration;

/// Shortest allowed sampling interval, in seconds.
pub const MIN_INTERVAL_SECS: f64 = 1.0;
/// Longest allowed sampling interval, in seconds.
pub const MAX_INTERVAL_SECS: f64 = 30.0;

/// Root configuration structure parsed from `aqmon.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Sampling loop settings.
    pub sampler: SamplerConfig,
    /// Theme / visual settings.
    pub theme: ThemeConfig,
}

/// Settings for the generate → append → build_table loop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplerConfig {
    /// Seconds between ticks.  Fractional values are allowed.
    pub interval_secs: f64,
    /// Number of readings kept in the rolling window.
    pub capacity: usize,
    /// Number of most recent rows shown in the readings grid.
    pub table_rows: usize,
}

impl SamplerConfig {
    /// Tick period, clamped into the supported range.
    pub fn interval(&self) -> Duration {
        let secs = crate::clamp_interval(self.interval_secs);
        Duration::try_from_secs_f64(secs).unwrap_or(Duration::from_millis(1_500))
    }

    /// Rolling window size; `None` only for an unvalidated zero.
    pub fn capacity(&self) -> Option<NonZeroUsize> {
        NonZeroUsize::new(self.capacity)
    }
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            interval_secs: 1.5,
            capacity:      25,
            table_rows:    15,
        }
    }
}

/// Theme / styling configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Start in dark mode.
    pub dark_mode: bool,
    /// Base font size in points.
    pub font_size: f32,
    /// Outer padding for each panel (pixels).
    pub padding: u16,
    /// Gap between stacked elements (pixels).
    pub gap: u16,
    /// Color for "Good" readings (hex, e.g. `"#3498db"`).
    pub good: String,
    /// Color for "Moderate" readings.
    pub moderate: String,
    /// Color for "Unhealthy for Sensitive Groups" readings.
    pub unhealthy: String,
    /// Color for "Dangerous" readings.
    pub dangerous: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            dark_mode: false,
            font_size: 16.0,
            padding:   12,
            gap:       8,
            good:      "#3498db".to_string(),
            moderate:  "#40916c".to_string(),
            unhealthy: "#fb8500".to_string(),
            dangerous: "#bf0603".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let cfg: DashboardConfig = toml::from_str("").unwrap();
        assert_eq!(cfg, DashboardConfig::default());
        assert_eq!(cfg.sampler.interval_secs, 1.5);
        assert_eq!(cfg.sampler.capacity, 25);
    }

    #[test]
    fn interval_is_fractional_and_clamped() {
        let mut sampler = SamplerConfig::default();
        assert_eq!(sampler.interval(), Duration::from_millis(1_500));

        sampler.interval_secs = 120.0;
        assert_eq!(sampler.interval(), Duration::from_secs(30));

        sampler.interval_secs = f64::NAN;
        assert_eq!(sampler.interval(), Duration::from_millis(1_500));
    }

    #[test]
    fn partial_sections_fill_in_defaults() {
        let cfg: DashboardConfig = toml::from_str(
            r##"
            [sampler]
            interval_secs = 5

            [theme]
            dark_mode = true
            dangerous = "#ff0000"
            "##,
        )
        .unwrap();
        assert_eq!(cfg.sampler.interval_secs, 5.0);
        assert_eq!(cfg.sampler.table_rows, 15);
        assert!(cfg.theme.dark_mode);
        assert_eq!(cfg.theme.dangerous, "#ff0000");
        assert_eq!(cfg.theme.good, "#3498db");
    }
}
