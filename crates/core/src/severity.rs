use serde::{Deserialize, Serialize};

/// Upper bound (inclusive) of the "Good" band, µg/m³.
pub const GOOD_MAX: f64 = 12.0;
/// Upper bound (inclusive) of the "Moderate" band, µg/m³.
pub const MODERATE_MAX: f64 = 35.4;
/// Upper bound (inclusive) of the "Unhealthy for Sensitive Groups" band, µg/m³.
pub const UNHEALTHY_MAX: f64 = 55.4;

/// Four-level air quality bucket derived from a PM2.5 value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Good,
    Moderate,
    UnhealthyForSensitive,
    Dangerous,
}

impl Severity {
    /// Every severity, mildest first.  Used to draw the legend.
    pub const ALL: [Severity; 4] = [
        Severity::Good,
        Severity::Moderate,
        Severity::UnhealthyForSensitive,
        Severity::Dangerous,
    ];

    /// Human-readable label shown in the legend.
    pub fn label(self) -> &'static str {
        match self {
            Severity::Good                  => "Good Air Quality",
            Severity::Moderate              => "Moderate Air Quality",
            Severity::UnhealthyForSensitive => "Unhealthy for Sensitive Groups",
            Severity::Dangerous             => "Dangerous Air Quality",
        }
    }
}

/// Classify a PM2.5 value.  Total over `f64`: anything above the last band,
/// including NaN, is [`Severity::Dangerous`].
pub fn classify(value: f64) -> Severity {
    if value <= GOOD_MAX {
        Severity::Good
    } else if value <= MODERATE_MAX {
        Severity::Moderate
    } else if value <= UNHEALTHY_MAX {
        Severity::UnhealthyForSensitive
    } else {
        Severity::Dangerous
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_boundaries() {
        assert_eq!(classify(12.0), Severity::Good);
        assert_eq!(classify(12.1), Severity::Moderate);
        assert_eq!(classify(35.4), Severity::Moderate);
        assert_eq!(classify(35.5), Severity::UnhealthyForSensitive);
        assert_eq!(classify(55.4), Severity::UnhealthyForSensitive);
        assert_eq!(classify(55.5), Severity::Dangerous);
    }

    #[test]
    fn out_of_range_values_still_classify() {
        assert_eq!(classify(-3.0), Severity::Good);
        assert_eq!(classify(f64::INFINITY), Severity::Dangerous);
        assert_eq!(classify(f64::NEG_INFINITY), Severity::Good);
        assert_eq!(classify(f64::NAN), Severity::Dangerous);
    }

    #[test]
    fn all_is_ordered_mildest_first() {
        let classified: Vec<_> = [0.0, 20.0, 40.0, 60.0].into_iter().map(classify).collect();
        assert_eq!(classified, Severity::ALL.to_vec());
    }

    #[test]
    fn labels_are_distinct() {
        let labels: std::collections::HashSet<_> =
            Severity::ALL.iter().map(|s| s.label()).collect();
        assert_eq!(labels.len(), Severity::ALL.len());
    }
}
