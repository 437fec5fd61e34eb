use serde::{Deserialize, Serialize};

/// Lowest PM2.5 value the simulated sensor reports (µg/m³).
pub const VALUE_MIN: f64 = 0.0;
/// Highest PM2.5 value the simulated sensor reports (µg/m³).
pub const VALUE_MAX: f64 = 55.0;

/// `strftime` layout used for every reading timestamp.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single PM2.5 sample.  Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    value:     f64,
    timestamp: String,
}

impl Reading {
    /// Build a reading from an already-rounded value and a formatted timestamp.
    pub fn new(value: f64, timestamp: impl Into<String>) -> Self {
        Self {
            value,
            timestamp: timestamp.into(),
        }
    }

    /// PM2.5 concentration in µg/m³.
    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Local wall-clock time, formatted with [`TIMESTAMP_FORMAT`].
    #[inline]
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }
}

/// Round to one decimal place.
#[must_use]
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_to_tenth_keeps_one_digit() {
        assert_eq!(round_to_tenth(12.04), 12.0);
        assert_eq!(round_to_tenth(12.06), 12.1);
        assert_eq!(round_to_tenth(54.99), 55.0);
    }

    #[test]
    fn accessors_return_constructor_values() {
        let r = Reading::new(17.3, "2024-05-01 08:30:00");
        assert_eq!(r.value(), 17.3);
        assert_eq!(r.timestamp(), "2024-05-01 08:30:00");
    }
}
