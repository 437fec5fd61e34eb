use crate::reading::Reading;
use std::collections::VecDeque;
use std::num::NonZeroUsize;

/// Fixed-capacity rolling window of readings, oldest first.
///
/// Appending at capacity evicts the oldest reading, so `len() <= capacity()`
/// holds at all times.
#[derive(Debug, Clone)]
pub struct RollingBuffer {
    readings: VecDeque<Reading>,
    capacity: NonZeroUsize,
}

impl RollingBuffer {
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            readings: VecDeque::with_capacity(capacity.get()),
            capacity,
        }
    }

    /// Push a new reading, evicting the oldest if at capacity.
    pub fn append(&mut self, reading: Reading) {
        while self.readings.len() >= self.capacity.get() {
            self.readings.pop_front();
        }
        self.readings.push_back(reading);
    }

    /// Current contents in insertion order (oldest first).
    pub fn snapshot(&self) -> Vec<Reading> {
        self.readings.iter().cloned().collect()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Reading> + ExactSizeIterator {
        self.readings.iter()
    }

    /// Most recently appended reading.
    pub fn latest(&self) -> Option<&Reading> {
        self.readings.back()
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity.get()
    }
}
