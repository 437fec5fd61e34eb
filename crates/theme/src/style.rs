use crate::{colors::Color, Theme};
use iced::{widget::container, Border};

/// Card-like container used for each dashboard panel.
pub fn panel(theme: &Theme) -> impl Fn(&iced::Theme) -> container::Style {
    let background = theme.background();
    let edge = theme.foreground().with_alpha(0.15);

    move |_| container::Style {
        background: Some(background.to_iced().into()),
        border: Border {
            color:  edge.to_iced(),
            width:  1.0,
            radius: 8.0.into(),
        },
        ..container::Style::default()
    }
}

/// Legend swatch: a small rounded block filled with `color`.
pub fn swatch(color: Color) -> impl Fn(&iced::Theme) -> container::Style {
    move |_| container::Style {
        background: Some(color.to_iced().into()),
        border: Border { radius: 4.0.into(), ..Default::default() },
        ..container::Style::default()
    }
}
