pub mod colors;
pub mod style;

pub use colors::Color;

use aqmon_config::ThemeConfig;
use aqmon_core::Severity;

/// Compiled theme derived from [`ThemeConfig`].
///
/// All colors are pre-parsed from hex strings into normalised `[0, 1]` RGBA.
/// Calling [`Theme::from_config`] is infallible — invalid color strings fall
/// back to the built-in severity palette.
#[derive(Debug, Clone)]
pub struct Theme {
    pub dark_mode: bool,
    pub font_size: f32,
    pub padding:   u16,
    pub gap:       u16,
    pub good:      Color,
    pub moderate:  Color,
    pub unhealthy: Color,
    pub dangerous: Color,
}

impl Theme {
    /// Build a [`Theme`] from the config file's `[theme]` section.
    pub fn from_config(cfg: &ThemeConfig) -> Self {
        Self {
            dark_mode: cfg.dark_mode,
            font_size: cfg.font_size,
            padding:   cfg.padding,
            gap:       cfg.gap,
            good:      Color::from_hex(&cfg.good).unwrap_or(Color::BLUE),
            moderate:  Color::from_hex(&cfg.moderate).unwrap_or(Color::GREEN),
            unhealthy: Color::from_hex(&cfg.unhealthy).unwrap_or(Color::ORANGE),
            dangerous: Color::from_hex(&cfg.dangerous).unwrap_or(Color::RED),
        }
    }

    /// Indicator color for a severity bucket.
    pub fn severity_color(&self, severity: Severity) -> Color {
        match severity {
            Severity::Good                  => self.good,
            Severity::Moderate              => self.moderate,
            Severity::UnhealthyForSensitive => self.unhealthy,
            Severity::Dangerous             => self.dangerous,
        }
    }

    pub fn background(&self) -> Color {
        if self.dark_mode { Color::NIGHT } else { Color::PAPER }
    }

    pub fn foreground(&self) -> Color {
        if self.dark_mode { Color::FOG } else { Color::INK }
    }

    /// Built-in Iced palette matching the light/dark switch.
    pub fn iced_theme(&self) -> iced::Theme {
        if self.dark_mode {
            iced::Theme::Dark
        } else {
            iced::Theme::Light
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_config(&ThemeConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_palette_matches_severity_colors() {
        let theme = Theme::default();
        assert_eq!(theme.severity_color(Severity::Good), Color::BLUE);
        assert_eq!(theme.severity_color(Severity::Moderate), Color::GREEN);
        assert_eq!(theme.severity_color(Severity::UnhealthyForSensitive), Color::ORANGE);
        assert_eq!(theme.severity_color(Severity::Dangerous), Color::RED);
    }

    #[test]
    fn invalid_hex_falls_back() {
        let cfg = ThemeConfig {
            dangerous: "not-a-color".into(),
            ..ThemeConfig::default()
        };
        assert_eq!(Theme::from_config(&cfg).dangerous, Color::RED);
    }

    #[test]
    fn dark_mode_swaps_surface_colors() {
        let light = Theme::default();
        let dark = Theme { dark_mode: true, ..Theme::default() };
        assert_ne!(light.background(), dark.background());
        assert_eq!(dark.foreground(), Color::FOG);
    }
}
