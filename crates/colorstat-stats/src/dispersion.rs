use serde::Serialize;

use crate::{category::Category, frequency::FrequencyTable};

/// Normalization used by [`variance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum VarianceKind {
    /// Divide the squared deviations by `N`.
    #[default]
    Population,
    /// Divide the squared deviations by `N - 1`.
    Sample,
}

/// Variance of the counts in `table`.
///
/// Uses the two-pass formula: the mean is computed first, then the mean
/// squared deviation. An empty table yields `0.0`, and so does the sample
/// variance of fewer than two counts.
///
/// # Examples
///
/// ```
/// use colorstat_stats::{
///     category::Category,
///     dispersion::{self, VarianceKind},
///     frequency::FrequencyTable,
/// };
///
/// let table = ["BLUE", "BLUE", "RED"]
///     .into_iter()
///     .map(Category::normalize)
///     .collect::<FrequencyTable>();
/// assert_eq!(dispersion::variance(&table, VarianceKind::Population), 0.25);
/// assert_eq!(dispersion::variance(&table, VarianceKind::Sample), 0.5);
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn variance(table: &FrequencyTable, kind: VarianceKind) -> f64 {
    let n = table.len();
    if n == 0 {
        return 0.0;
    }
    let mean = table.total() as f64 / n as f64;
    let squared_deviations = table
        .counts()
        .map(|count| (count as f64 - mean).powi(2))
        .sum::<f64>();
    match kind {
        VarianceKind::Population => squared_deviations / n as f64,
        VarianceKind::Sample if n < 2 => 0.0,
        VarianceKind::Sample => squared_deviations / (n - 1) as f64,
    }
}

/// Standard deviation of the counts in `table`.
#[must_use]
pub fn std_dev(table: &FrequencyTable, kind: VarianceKind) -> f64 {
    variance(table, kind).sqrt()
}

/// Empirical probability that a random observation is `token`.
///
/// `token` is normalized the same way as the stored categories, so the lookup
/// ignores case, surrounding whitespace and known typos. An empty table yields
/// `0.0`.
///
/// # Examples
///
/// ```
/// use colorstat_stats::{category::Category, dispersion, frequency::FrequencyTable};
///
/// let table = ["RED", "BLUE", "BLUE", "BLUE"]
///     .into_iter()
///     .map(Category::normalize)
///     .collect::<FrequencyTable>();
/// assert_eq!(dispersion::probability(&table, "red"), 0.25);
/// assert_eq!(dispersion::probability(&table, "purple"), 0.0);
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn probability(table: &FrequencyTable, token: &str) -> f64 {
    let total = table.total();
    if total == 0 {
        return 0.0;
    }
    table.get(&Category::normalize(token)) as f64 / total as f64
}
