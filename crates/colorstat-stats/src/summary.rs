use serde::Serialize;

use crate::{
    category::Category,
    dispersion::{self, VarianceKind},
    frequency::FrequencyTable,
    order::{self, Mode},
};

/// All descriptive statistics of a categorical dataset in one value.
///
/// # Examples
///
/// ```
/// use colorstat_stats::{category::Category, summary::FrequencySummary};
///
/// let sequence = ["BLUE", "BLUE", "RED"].map(Category::normalize);
/// let summary = FrequencySummary::from_sequence(&sequence);
///
/// assert_eq!(summary.total, 3);
/// assert_eq!(summary.mode.count, 2);
/// assert_eq!(summary.population_variance, 0.25);
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct FrequencySummary {
    /// Number of observations.
    pub total: u64,
    /// Counts per category in first-seen order.
    pub frequencies: FrequencyTable,
    /// Most frequent categories.
    pub mode: Mode,
    /// Frequency-rank median (zero, one or two categories).
    pub median: Vec<Category>,
    /// Variance of the counts, normalized by `N`.
    pub population_variance: f64,
    /// Variance of the counts, normalized by `N - 1`.
    pub sample_variance: f64,
}

impl FrequencySummary {
    /// Builds the frequency table of `sequence` and summarizes it.
    #[must_use]
    pub fn from_sequence<'a, I>(sequence: I) -> Self
    where
        I: IntoIterator<Item = &'a Category>,
    {
        Self::new(FrequencyTable::from_sequence(sequence))
    }

    /// Summarizes an existing frequency table.
    #[must_use]
    pub fn new(frequencies: FrequencyTable) -> Self {
        Self {
            total: frequencies.total(),
            mode: order::mode(&frequencies),
            median: order::median_by_frequency(&frequencies),
            population_variance: dispersion::variance(&frequencies, VarianceKind::Population),
            sample_variance: dispersion::variance(&frequencies, VarianceKind::Sample),
            frequencies,
        }
    }

    /// Empirical probability of `token`; see [`dispersion::probability`].
    #[must_use]
    pub fn probability(&self, token: &str) -> f64 {
        dispersion::probability(&self.frequencies, token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observation::ObservationLog;

    const WEEK: &str = "
MONDAY: GREEN, YELLOW, GREEN, BROWN, BLUE, PINK, BLUE, YELLOW, ORANGE, CREAM, ORANGE, RED, WHITE, BLUE, WHITE, BLUE, BLUE, BLUE, GREEN
TUESDAY: ARSH, BROWN, GREEN, BROWN, BLUE, BLUE, BLEW, PINK, PINK, ORANGE, ORANGE, RED, WHITE, BLUE, WHITE, WHITE, BLUE, BLUE, BLUE
WEDNESDAY: GREEN, YELLOW, GREEN, BROWN, BLUE, PINK, RED, YELLOW, ORANGE, RED, ORANGE, RED, BLUE, BLUE, WHITE, BLUE, BLUE, WHITE, WHITE
THURSDAY: BLUE, BLUE, GREEN, WHITE, BLUE, BROWN, PINK, YELLOW, ORANGE, CREAM, ORANGE, RED, WHITE, BLUE, WHITE, BLUE, BLUE, BLUE, GREEN
FRIDAY: GREEN, WHITE, GREEN, BROWN, BLUE, BLUE, BLACK, WHITE, ORANGE, RED, RED, RED, WHITE, BLUE, WHITE, BLUE, BLUE, BLUE, WHITE
";

    #[test]
    fn test_weekly_colors() {
        let log = ObservationLog::parse(WEEK);
        let summary = FrequencySummary::from_sequence(log.sequence());

        assert_eq!(summary.total, 95);
        assert_eq!(summary.frequencies.len(), 11);
        assert_eq!(summary.frequencies.get(&Category::normalize("BLUE")), 31);
        assert_eq!(summary.frequencies.get(&Category::normalize("WHITE")), 16);
        assert_eq!(summary.frequencies.get(&Category::normalize("ARSH")), 1);

        assert_eq!(summary.mode.categories, [Category::normalize("BLUE")]);
        assert_eq!(summary.mode.count, 31);
        assert_eq!(summary.median, [Category::normalize("BROWN")]);

        assert!((summary.population_variance - 68.231_404_958_677_69).abs() < 1e-9);
        assert!((summary.sample_variance - 75.054_545_454_545_45).abs() < 1e-9);
        assert!((summary.probability("red") - 9.0 / 95.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_summary() {
        let summary = FrequencySummary::new(FrequencyTable::default());
        assert_eq!(summary.total, 0);
        assert!(summary.mode.categories.is_empty());
        assert!(summary.median.is_empty());
        assert_eq!(summary.population_variance, 0.0);
        assert_eq!(summary.sample_variance, 0.0);
        assert_eq!(summary.probability("RED"), 0.0);
    }
}
