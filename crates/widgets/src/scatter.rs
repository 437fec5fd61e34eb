use aqmon_core::{
    classify,
    event::Message,
    severity::{GOOD_MAX, MODERATE_MAX, UNHEALTHY_MAX},
    Session, Table,
};
use aqmon_theme::Theme;
use iced::{
    mouse,
    widget::{canvas, column, text, Canvas},
    Element, Length, Pixels, Point, Rectangle, Renderer,
};

/// Top of the y axis, µg/m³.  Leaves headroom above the highest band edge.
const Y_MAX: f64 = 60.0;
/// Margin around the plotting area (pixels).
const MARGIN: f32 = 28.0;
const DOT_RADIUS: f32 = 4.0;

/// Scatter plot of every reading in the rolling window (x = arrival order,
/// y = PM2.5), with a guide line at each severity band edge.
#[derive(Debug, Default)]
pub struct ScatterWidget;

impl ScatterWidget {
    pub fn new() -> Self {
        Self
    }

    pub fn view<'a>(&'a self, session: &'a Session, theme: &'a Theme) -> Element<'a, Message> {
        let plot = Canvas::new(Plot {
            table: session.table(),
            capacity: session.buffer().capacity(),
            theme,
        })
        .width(Length::Fill)
        .height(Length::Fixed(260.0));

        column![
            text("PM2.5 Over the Rolling Window").size(theme.font_size * 1.2),
            plot,
        ]
        .spacing(f32::from(theme.gap))
        .into()
    }
}

struct Plot<'a> {
    table:    &'a Table,
    capacity: usize,
    theme:    &'a Theme,
}

impl canvas::Program<Message> for Plot<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &iced::Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());
        let area = plot_area(bounds.width, bounds.height);
        let axis = self.theme.foreground().with_alpha(0.6).to_iced();

        // Axes.
        frame.stroke(
            &canvas::Path::line(
                Point::new(area.x, area.y),
                Point::new(area.x, area.y + area.height),
            ),
            canvas::Stroke::default().with_color(axis).with_width(1.0),
        );
        frame.stroke(
            &canvas::Path::line(
                Point::new(area.x, area.y + area.height),
                Point::new(area.x + area.width, area.y + area.height),
            ),
            canvas::Stroke::default().with_color(axis).with_width(1.0),
        );

        // Band edges.
        for edge in [GOOD_MAX, MODERATE_MAX, UNHEALTHY_MAX] {
            let y = y_for(edge, area);
            let color = self.theme.severity_color(classify(edge)).with_alpha(0.35);
            frame.stroke(
                &canvas::Path::line(Point::new(area.x, y), Point::new(area.x + area.width, y)),
                canvas::Stroke::default().with_color(color.to_iced()).with_width(1.0),
            );
            frame.fill_text(canvas::Text {
                content:  format!("{edge}"),
                position: Point::new(2.0, y - 6.0),
                color:    axis,
                size:     Pixels(10.0),
                ..canvas::Text::default()
            });
        }

        for (i, row) in self.table.rows().iter().enumerate() {
            let center = point_for(i, self.capacity, row.value, area);
            let color = self.theme.severity_color(classify(row.value));
            frame.fill(&canvas::Path::circle(center, DOT_RADIUS), color.to_iced());
        }

        vec![frame.into_geometry()]
    }
}

/// Inner rectangle the points are drawn in.
fn plot_area(width: f32, height: f32) -> Rectangle {
    Rectangle {
        x:      MARGIN,
        y:      MARGIN / 2.0,
        width:  (width - MARGIN * 1.5).max(1.0),
        height: (height - MARGIN * 1.5).max(1.0),
    }
}

/// Vertical pixel position of `value`; values beyond the axis are pinned to
/// its ends.
fn y_for(value: f64, area: Rectangle) -> f32 {
    let t = (value / Y_MAX).clamp(0.0, 1.0) as f32;
    area.y + area.height * (1.0 - t)
}

/// Position of the `index`-th reading when the window holds up to
/// `capacity` readings.  The newest slot sits on the right edge.
fn point_for(index: usize, capacity: usize, value: f64, area: Rectangle) -> Point {
    let slots = capacity.saturating_sub(1).max(1) as f32;
    let x = area.x + area.width * (index as f32 / slots).min(1.0);
    Point::new(x, y_for(value, area))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area() -> Rectangle {
        Rectangle { x: 0.0, y: 0.0, width: 240.0, height: 120.0 }
    }

    #[test]
    fn zero_sits_on_the_x_axis() {
        assert_eq!(y_for(0.0, area()), 120.0);
    }

    #[test]
    fn top_of_axis_is_y_max() {
        assert_eq!(y_for(Y_MAX, area()), 0.0);
        assert_eq!(y_for(Y_MAX * 2.0, area()), 0.0);
        assert_eq!(y_for(-5.0, area()), 120.0);
    }

    #[test]
    fn first_and_last_slots_span_the_width() {
        assert_eq!(point_for(0, 25, 10.0, area()).x, 0.0);
        assert_eq!(point_for(24, 25, 10.0, area()).x, 240.0);
    }

    #[test]
    fn single_slot_window_does_not_divide_by_zero() {
        let p = point_for(0, 1, 30.0, area());
        assert!(p.x.is_finite() && p.y.is_finite());
    }

    #[test]
    fn plot_area_never_collapses() {
        let tiny = plot_area(0.0, 0.0);
        assert!(tiny.width >= 1.0 && tiny.height >= 1.0);
    }
}
