//! Order statistics over a [`FrequencyTable`].
//!
//! Both statistics here rank *distinct categories* by their counts:
//!
//! - [`mode`] reports every category sharing the maximum count.
//! - [`median_by_frequency`] picks the middle category (or the two middle
//!   categories) after ranking categories by ascending count.
//!
//! Ties are resolved by first-seen order. For the median this means the result
//! for tied counts depends on the order in which categories first appeared in
//! the observation sequence; that dependency is part of the contract.

use serde::Serialize;

use crate::{category::Category, frequency::FrequencyTable};

/// The most frequent categories and their shared count.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Mode {
    /// Co-maximal categories in first-seen order. Empty only for an empty table.
    pub categories: Vec<Category>,
    /// The maximum count, or 0 for an empty table.
    pub count: u64,
}

impl Mode {
    /// Returns `true` if more than one category shares the maximum count.
    #[must_use]
    pub fn is_tied(&self) -> bool {
        self.categories.len() > 1
    }
}

/// Computes the mode of `table`.
///
/// All categories achieving the maximum count are reported; none is dropped
/// to break a tie.
///
/// # Examples
///
/// ```
/// use colorstat_stats::{category::Category, frequency::FrequencyTable, order};
///
/// let table = ["RED", "BLUE", "BLUE", "RED", "GREEN"]
///     .into_iter()
///     .map(Category::normalize)
///     .collect::<FrequencyTable>();
/// let mode = order::mode(&table);
/// assert_eq!(mode.count, 2);
/// assert_eq!(mode.categories, [Category::normalize("RED"), Category::normalize("BLUE")]);
/// ```
#[must_use]
pub fn mode(table: &FrequencyTable) -> Mode {
    let Some(count) = table.counts().max() else {
        return Mode::default();
    };
    let categories = table
        .iter()
        .filter(|&(_, n)| n == count)
        .map(|(category, _)| category.clone())
        .collect();
    Mode { categories, count }
}

/// Computes the frequency-rank median of `table`.
///
/// Entries are sorted by ascending count with a stable sort, so equal counts
/// keep their first-seen order. With `n` entries the result is the entry at
/// `n / 2` when `n` is odd, and the entries at `n / 2 - 1` and `n / 2` (lower
/// first) when `n` is even. An empty table yields an empty result.
///
/// # Examples
///
/// ```
/// use colorstat_stats::{category::Category, frequency::FrequencyTable, order};
///
/// let table = ["A", "B", "B", "C", "C", "C"]
///     .into_iter()
///     .map(Category::normalize)
///     .collect::<FrequencyTable>();
/// assert_eq!(order::median_by_frequency(&table), [Category::normalize("B")]);
/// ```
#[must_use]
pub fn median_by_frequency(table: &FrequencyTable) -> Vec<Category> {
    let mut ranked = table.iter().collect::<Vec<_>>();
    // `sort_by_key` is stable; first-seen order survives among equal counts.
    ranked.sort_by_key(|&(_, count)| count);

    let n = ranked.len();
    let middle = match n {
        0 => return vec![],
        _ if n % 2 == 1 => &ranked[n / 2..=n / 2],
        _ => &ranked[n / 2 - 1..=n / 2],
    };
    middle
        .iter()
        .map(|(category, _)| (*category).clone())
        .collect()
}
