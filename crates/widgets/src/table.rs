use aqmon_core::{classify, event::Message, Session, TableRow};
use aqmon_theme::Theme;
use iced::{
    widget::{column, row, scrollable, text, Column},
    Element, Length,
};

/// Grid of the most recent readings, oldest at the top.
#[derive(Debug)]
pub struct TableWidget {
    /// How many rows of the rolling table to show.
    rows: usize,
}

impl TableWidget {
    pub fn new(rows: usize) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn set_rows(&mut self, rows: usize) {
        self.rows = rows;
    }

    pub fn view<'a>(&'a self, session: &'a Session, theme: &'a Theme) -> Element<'a, Message> {
        let visible = session.table().tail(self.rows);
        let size = theme.font_size * 0.9;

        let header = row![
            text("PM2.5 (µg/m³)").size(size).width(Length::FillPortion(1)),
            text("Timestamp").size(size).width(Length::FillPortion(2)),
        ];

        let body = visible.rows().iter().map(|r| -> Element<'a, Message> {
            let color = theme.severity_color(classify(r.value));
            let (value, timestamp) = cells(r);
            row![
                text(value).size(size).color(color.to_iced()).width(Length::FillPortion(1)),
                text(timestamp).size(size).width(Length::FillPortion(2)),
            ]
            .into()
        });

        column![
            text(format!("Most Recent Readings ({} of {})", visible.len(), session.buffer().capacity()))
                .size(theme.font_size * 1.2),
            header,
            scrollable(Column::with_children(body).spacing(2.0f32)).height(Length::Fill),
        ]
        .spacing(f32::from(theme.gap))
        .into()
    }
}

/// Display strings for one row.
fn cells(row: &TableRow) -> (String, String) {
    (format!("{:.1}", row.value), row.timestamp.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_format_value_with_one_decimal() {
        let row = TableRow { value: 4.0, timestamp: "2024-01-01 00:00:00".into() };
        assert_eq!(cells(&row), ("4.0".to_string(), "2024-01-01 00:00:00".to_string()));
    }

    #[test]
    fn row_count_is_adjustable() {
        let mut widget = TableWidget::new(15);
        widget.set_rows(5);
        assert_eq!(widget.rows(), 5);
    }
}
