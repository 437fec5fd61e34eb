//! Synthetic PM2.5 source.

use aqmon_core::reading::{round_to_tenth, Reading, TIMESTAMP_FORMAT, VALUE_MAX, VALUE_MIN};
use chrono::{DateTime, Local, TimeZone};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt::Display;

/// Produces one simulated reading per call.
///
/// Values are drawn uniformly from `[VALUE_MIN, VALUE_MAX]` and rounded to
/// one decimal place; timestamps come from the local wall clock.
#[derive(Debug)]
pub struct SampleGenerator<R = StdRng> {
    rng: R,
}

impl Default for SampleGenerator<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl SampleGenerator<StdRng> {
    /// Generator seeded from OS entropy.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Deterministic generator, for reproducible runs and tests.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> SampleGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Draw a reading stamped with the current local time.
    pub fn generate(&mut self) -> Reading {
        self.generate_at(Local::now())
    }

    /// Draw a reading stamped with `now`.
    pub fn generate_at<Tz>(&mut self, now: DateTime<Tz>) -> Reading
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let value = round_to_tenth(self.rng.gen_range(VALUE_MIN..=VALUE_MAX));
        Reading::new(value, now.format(TIMESTAMP_FORMAT).to_string())
    }
}
