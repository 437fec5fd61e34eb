use aqmon_core::{classify, event::Message, Session};
use aqmon_theme::Theme;
use iced::{
    font::Weight,
    widget::{column, text},
    Element, Font,
};

/// Large PM2.5 readout, colored by the severity of the latest reading.
#[derive(Debug, Default)]
pub struct IndicatorWidget;

impl IndicatorWidget {
    pub fn new() -> Self {
        Self
    }

    pub fn view<'a>(&'a self, session: &'a Session, theme: &'a Theme) -> Element<'a, Message> {
        let bold = Font {
            weight: Weight::Bold,
            ..Font::DEFAULT
        };

        let readout = match session.latest() {
            Some(reading) => {
                let color = theme.severity_color(classify(reading.value()));
                text(format_pm25(reading.value())).color(color.to_iced())
            }
            None => text("-- µg/m³").color(theme.foreground().with_alpha(0.5).to_iced()),
        };

        column![
            text("Current PM2.5 Level").size(theme.font_size * 1.4),
            readout.size(theme.font_size * 2.0).font(bold),
            text("Note: Values may vary based on conditions.").size(theme.font_size * 0.8),
        ]
        .spacing(f32::from(theme.gap))
        .into()
    }
}

/// `"23.4 µg/m³"`.
pub fn format_pm25(value: f64) -> String {
    format!("{value:.1} µg/m³")
}
