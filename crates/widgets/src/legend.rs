use aqmon_core::{event::Message, Severity};
use aqmon_theme::{style, Theme};
use iced::{
    widget::{column, container, row, rule, text, Column},
    Alignment, Element, Length,
};

/// Sidebar explaining the four severity colors.
#[derive(Debug, Default)]
pub struct LegendWidget;

impl LegendWidget {
    pub fn new() -> Self {
        Self
    }

    pub fn view<'a>(&'a self, theme: &'a Theme) -> Element<'a, Message> {
        let entries = Severity::ALL.into_iter().map(|severity| -> Element<'a, Message> {
            let color = theme.severity_color(severity);
            row![
                container(text(""))
                    .width(Length::Fixed(18.0))
                    .height(Length::Fixed(18.0))
                    .style(style::swatch(color)),
                text(severity.label()).size(theme.font_size).color(color.to_iced()),
            ]
            .spacing(f32::from(theme.gap))
            .align_y(Alignment::Center)
            .into()
        });

        column![
            text("Air Quality Monitor").size(theme.font_size * 1.4),
            text("A demonstration of real-time air quality readings.").size(theme.font_size * 0.9),
            rule::horizontal(1.0f32),
            Column::with_children(entries).spacing(f32::from(theme.gap) * 2.0),
        ]
        .spacing(f32::from(theme.gap) * 2.0)
        .width(Length::Fixed(260.0))
        .into()
    }
}
