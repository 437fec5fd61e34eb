use crate::{
    buffer::RollingBuffer,
    reading::Reading,
    table::{build_table, Table},
};
use std::num::NonZeroUsize;

/// Per-session sampling state — the only mutable state in the dashboard.
///
/// One `Session` belongs to one running dashboard (or headless loop) and is
/// never shared.  Renderers only read [`Session::latest`] and
/// [`Session::table`].
#[derive(Debug, Clone)]
pub struct Session {
    buffer: RollingBuffer,
    /// View of `buffer`, rebuilt on every tick.
    table:  Table,
    ticks:  u64,
}

impl Session {
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            buffer: RollingBuffer::new(capacity),
            table:  Table::default(),
            ticks:  0,
        }
    }

    /// Run the append → build_table half of a tick for a freshly generated
    /// reading.  Completes synchronously, so ticks never interleave.
    pub fn tick(&mut self, reading: Reading) {
        self.buffer.append(reading);
        self.table = build_table(self.buffer.iter());
        self.ticks += 1;
    }

    pub fn latest(&self) -> Option<&Reading> {
        self.buffer.latest()
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn buffer(&self) -> &RollingBuffer {
        &self.buffer
    }

    /// Number of ticks processed since the session started.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}
