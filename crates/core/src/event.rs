/// All messages (events) that can flow through the application event bus.
///
/// Sources:
/// - Sampling timer        → `Tick`
/// - Config watcher task   → `ConfigReloaded`
/// - User controls         → `IntervalChanged`, `DarkModeToggled`
#[derive(Debug, Clone)]
pub enum Message {
    // ── Sampling ──────────────────────────────────────────────────────────────
    /// Sampling interval elapsed — generate, append, rebuild the table.
    Tick,

    // ── Config ────────────────────────────────────────────────────────────────
    /// Config file changed on disk — triggers a live reload.
    ConfigReloaded,

    // ── User actions ──────────────────────────────────────────────────────────
    /// Interval slider moved (seconds).  Applies from the next tick.
    IntervalChanged(f64),
    /// Dark-mode switch flipped.
    DarkModeToggled(bool),
}
