//! Desktop window for `aqmon`.
//!
//! Owns the Iced application loop and the dashboard's single [`Session`]:
//! - Sampling timer (interval from config, adjustable with the slider)
//! - Config file watcher (live reload on change)
//!
//! Every tick runs inside `update`, which Iced calls one message at a time,
//! so the generate → append → build_table cycle never interleaves.

use aqmon_config::{
    clamp_interval, default_path, load as load_config, ConfigWatcher, DashboardConfig,
    MAX_INTERVAL_SECS, MIN_INTERVAL_SECS,
};
use aqmon_core::{event::Message, Session};
use aqmon_sampler::SampleGenerator;
use aqmon_theme::{style, Theme};
use aqmon_widgets::{ClockWidget, IndicatorWidget, LegendWidget, ScatterWidget, TableWidget};
use futures::channel::mpsc::Sender;
use iced::{
    widget::{column, container, row, slider, text, toggler},
    Alignment, Element, Length, Size, Subscription, Task,
};
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn};

/// Rolling window size used when the configured one is unusable.
const FALLBACK_CAPACITY: NonZeroUsize = match NonZeroUsize::new(25) {
    Some(n) => n,
    None => unreachable!(),
};

// ── Entry point ───────────────────────────────────────────────────────────────

/// Open the dashboard window.  Returns when the window is closed.
pub fn run() -> iced::Result {
    iced::application(Dashboard::new, Dashboard::update, Dashboard::view)
        .title("Live Air Quality Data")
        .subscription(Dashboard::subscription)
        .theme(Dashboard::theme)
        .window_size(Size::new(1100.0, 760.0))
        .run()
}

// ── State ─────────────────────────────────────────────────────────────────────

struct Dashboard {
    session:     Session,
    generator:   SampleGenerator,
    config:      DashboardConfig,
    config_path: PathBuf,
    theme:       Theme,
    // Sidebar
    legend:      LegendWidget,
    // Main panel
    indicator:   IndicatorWidget,
    clock:       ClockWidget,
    table:       TableWidget,
    scatter:     ScatterWidget,
}

impl Dashboard {
    fn new() -> (Self, Task<Message>) {
        let config_path = default_path();
        let config = load_config(&config_path).unwrap_or_else(|e| {
            warn!("{e}; using defaults");
            DashboardConfig::default()
        });

        let mut dashboard = Self::with_config(config, config_path);

        // Show a reading right away instead of waiting a full interval.
        dashboard.tick();

        (dashboard, Task::none())
    }

    fn with_config(config: DashboardConfig, config_path: PathBuf) -> Self {
        let capacity = config.sampler.capacity().unwrap_or(FALLBACK_CAPACITY);

        Self {
            session:   Session::new(capacity),
            generator: SampleGenerator::new(),
            theme:     Theme::from_config(&config.theme),
            legend:    LegendWidget::new(),
            indicator: IndicatorWidget::new(),
            clock:     ClockWidget::new(),
            table:     TableWidget::new(config.sampler.table_rows),
            scatter:   ScatterWidget::new(),
            config,
            config_path,
        }
    }

    fn interval(&self) -> Duration {
        self.config.sampler.interval()
    }

    fn tick(&mut self) {
        aqmon_sampler::tick(&mut self.session, &mut self.generator);
    }

    // ── Update ────────────────────────────────────────────────────────────────

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Tick => self.tick(),
            Message::IntervalChanged(secs) => {
                let secs = clamp_interval(secs);
                if secs != self.config.sampler.interval_secs {
                    info!("Sampling interval set to {secs}s");
                    self.config.sampler.interval_secs = secs;
                }
            }
            Message::DarkModeToggled(on) => {
                self.theme.dark_mode = on;
            }
            Message::ConfigReloaded => match load_config(&self.config_path) {
                Ok(cfg) => self.apply_config(cfg),
                Err(e)  => warn!("Config reload failed: {e}"),
            },
        }
        Task::none()
    }

    fn apply_config(&mut self, cfg: DashboardConfig) {
        info!("Config reloaded");

        if cfg.sampler.capacity != self.session.buffer().capacity() {
            warn!(
                "sampler.capacity changed to {}; restart to resize the rolling window",
                cfg.sampler.capacity
            );
        }

        self.theme = Theme::from_config(&cfg.theme);
        self.table.set_rows(cfg.sampler.table_rows);
        self.config = cfg;
    }

    // ── View ──────────────────────────────────────────────────────────────────

    fn view(&self) -> Element<'_, Message> {
        let pad = self.theme.padding;
        let gap = f32::from(self.theme.gap);

        let header = row![
            text("Live Air Quality Data").size(self.theme.font_size * 1.8),
            iced::widget::Space::new().width(Length::Fill),
            toggler(self.theme.dark_mode)
                .label("Dark mode")
                .on_toggle(Message::DarkModeToggled),
        ]
        .align_y(Alignment::Center);

        let sidebar = container(self.legend.view(&self.theme))
            .padding(pad)
            .height(Length::Fill)
            .style(style::panel(&self.theme));

        let interval = self.config.sampler.interval_secs;
        let controls = row![
            text("Update interval").width(Length::Fixed(140.0)),
            slider(MIN_INTERVAL_SECS..=MAX_INTERVAL_SECS, interval, Message::IntervalChanged)
                .step(0.5)
                .width(Length::Fixed(240.0)),
            text(format!("{interval:.1} s")),
        ]
        .spacing(gap)
        .align_y(Alignment::Center);

        let readout = row![
            self.panel(self.indicator.view(&self.session, &self.theme)),
            self.panel(self.clock.view(&self.session, &self.theme)),
        ]
        .spacing(gap);

        let data = row![
            self.panel(self.table.view(&self.session, &self.theme)),
            self.panel(self.scatter.view(&self.session, &self.theme)),
        ]
        .spacing(gap)
        .height(Length::Fill);

        let main = column![readout, self.panel(controls), data]
            .spacing(gap)
            .width(Length::Fill);

        column![header, row![sidebar, main].spacing(gap)]
            .padding(pad)
            .spacing(gap)
            .into()
    }

    fn panel<'a>(&self, content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
        container(content)
            .padding(self.theme.padding)
            .width(Length::Fill)
            .style(style::panel(&self.theme))
            .into()
    }

    // ── Subscriptions ─────────────────────────────────────────────────────────

    fn subscription(&self) -> Subscription<Message> {
        // A new period yields a new subscription, so a slider change applies
        // from the next tick.
        let tick = iced::time::every(self.interval()).map(|_| Message::Tick);

        Subscription::batch([tick, Subscription::run(config_stream)])
    }

    // ── Theme ─────────────────────────────────────────────────────────────────

    fn theme(&self) -> iced::Theme {
        self.theme.iced_theme()
    }
}

// ── Subscription streams ──────────────────────────────────────────────────────

/// Watches `~/.config/aqmon/aqmon.toml` for writes and sends `ConfigReloaded`.
fn config_stream() -> impl iced::futures::Stream<Item = Message> {
    iced::stream::channel(1, |mut sender: Sender<Message>| async move {
        let (_watcher, mut rx) = ConfigWatcher::spawn(default_path());

        while rx.recv().await.is_some() {
            let _ = sender.try_send(Message::ConfigReloaded);
        }

        // Watcher gave up (no parent dir, or inotify unavailable); stall rather than crash.
        loop {
            tokio::time::sleep(Duration::from_secs(3600)).await;
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dashboard() -> Dashboard {
        Dashboard::with_config(DashboardConfig::default(), PathBuf::from("/nonexistent/aqmon.toml"))
    }

    #[test]
    fn ticks_fill_the_session() {
        let mut d = dashboard();
        for _ in 0..30 {
            let _ = d.update(Message::Tick);
        }
        assert_eq!(d.session.table().len(), 25);
        assert_eq!(d.session.ticks(), 30);
    }

    #[test]
    fn interval_changes_are_clamped() {
        let mut d = dashboard();
        let _ = d.update(Message::IntervalChanged(45.0));
        assert_eq!(d.interval(), Duration::from_secs(30));

        let _ = d.update(Message::IntervalChanged(2.5));
        assert_eq!(d.interval(), Duration::from_millis(2_500));
    }

    #[test]
    fn dark_mode_toggle_switches_theme() {
        let mut d = dashboard();
        let _ = d.update(Message::DarkModeToggled(true));
        assert!(d.theme.dark_mode);
        assert!(matches!(d.theme(), iced::Theme::Dark));
    }

    #[test]
    fn reload_keeps_running_buffer_capacity() {
        let mut d = dashboard();
        let mut cfg = DashboardConfig::default();
        cfg.sampler.capacity = 5;
        cfg.sampler.table_rows = 3;
        d.apply_config(cfg);

        assert_eq!(d.session.buffer().capacity(), 25);
        assert_eq!(d.table.rows(), 3);
    }

    #[test]
    fn reload_of_missing_file_restores_defaults() {
        let mut d = dashboard();
        let _ = d.update(Message::IntervalChanged(10.0));
        let _ = d.update(Message::ConfigReloaded);
        assert_eq!(d.config, DashboardConfig::default());
    }
}
