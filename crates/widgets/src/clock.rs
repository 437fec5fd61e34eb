use aqmon_core::{event::Message, Session};
use aqmon_theme::Theme;
use iced::{
    widget::{column, text},
    Element,
};

/// Displays the timestamp of the latest reading.
#[derive(Debug, Default)]
pub struct ClockWidget;

impl ClockWidget {
    pub fn new() -> Self {
        Self
    }

    pub fn view<'a>(&'a self, session: &'a Session, theme: &'a Theme) -> Element<'a, Message> {
        let stamp = session
            .latest()
            .map(|r| r.timestamp())
            .unwrap_or("waiting for first reading…");

        column![
            text("Current Date and Time").size(theme.font_size * 1.4),
            text(stamp).size(theme.font_size * 1.2),
        ]
        .spacing(f32::from(theme.gap))
        .into()
    }
}
