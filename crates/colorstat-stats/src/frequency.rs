use std::collections::HashMap;

use serde::{Serialize, Serializer, ser::SerializeMap as _};

use crate::category::Category;

/// Occurrence counts per category, kept in first-seen order.
///
/// Entries are stored as an explicit ordered list of `(category, count)` pairs,
/// so every statistic that depends on entry order (mode listing, median tie
/// breaking) is reproducible from the input sequence alone.
///
/// Invariants:
///
/// - keys are unique
/// - every stored count is at least 1
/// - the sum of counts equals the length of the source sequence
///
/// # Examples
///
/// ```
/// use colorstat_stats::{category::Category, frequency::FrequencyTable};
///
/// let table = ["BLUE", "BLUE", "RED"]
///     .into_iter()
///     .map(Category::normalize)
///     .collect::<FrequencyTable>();
/// assert_eq!(table.get(&Category::normalize("blue")), 2);
/// assert_eq!(table.total(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    entries: Vec<(Category, u64)>,
    index: HashMap<Category, usize>,
}

impl FrequencyTable {
    /// Counts the categories of `sequence` in a single pass.
    #[must_use]
    pub fn from_sequence<'a, I>(sequence: I) -> Self
    where
        I: IntoIterator<Item = &'a Category>,
    {
        sequence.into_iter().cloned().collect()
    }

    fn increment(&mut self, category: Category) {
        if let Some(&pos) = self.index.get(&category) {
            self.entries[pos].1 += 1;
        } else {
            self.index.insert(category.clone(), self.entries.len());
            self.entries.push((category, 1));
        }
    }

    /// Returns the count for `category`, or 0 when it was never observed.
    #[must_use]
    pub fn get(&self, category: &Category) -> u64 {
        self.index
            .get(category)
            .map_or(0, |&pos| self.entries[pos].1)
    }

    /// Sum of all counts.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// Number of distinct categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates `(category, count)` pairs in first-seen order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&Category, u64)> + '_ {
        self.entries.iter().map(|(category, count)| (category, *count))
    }

    /// Iterates counts in first-seen order.
    pub fn counts(&self) -> impl ExactSizeIterator<Item = u64> + '_ {
        self.entries.iter().map(|(_, count)| *count)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[(Category, u64)] {
        &self.entries
    }
}

impl FromIterator<Category> for FrequencyTable {
    fn from_iter<T: IntoIterator<Item = Category>>(iter: T) -> Self {
        let mut table = Self::default();
        for category in iter {
            table.increment(category);
        }
        tracing::debug!(
            distinct = table.len(),
            total = table.total(),
            "built frequency table"
        );
        table
    }
}

impl Serialize for FrequencyTable {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (category, count) in &self.entries {
            map.serialize_entry(category, count)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn table(labels: &[&str]) -> FrequencyTable {
        labels.iter().copied().map(Category::normalize).collect()
    }

    #[test]
    fn test_empty_sequence() {
        let table = FrequencyTable::from_sequence(&Vec::<Category>::new());
        assert!(table.is_empty());
        assert_eq!(table.total(), 0);
    }

    #[test]
    fn test_counts_in_first_seen_order() {
        let table = table(&["BLUE", "BLUE", "RED"]);
        let entries = table
            .iter()
            .map(|(c, n)| (c.as_str(), n))
            .collect::<Vec<_>>();
        assert_eq!(entries, [("BLUE", 2), ("RED", 1)]);
    }

    #[test]
    fn test_normalized_labels_share_a_key() {
        let table = table(&["blue", " BLEW", "Blue "]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(&Category::normalize("BLUE")), 3);
    }

    #[test]
    fn test_missing_category_counts_zero() {
        let table = table(&["RED"]);
        assert_eq!(table.get(&Category::normalize("GREEN")), 0);
    }

    #[test]
    fn test_serializes_as_ordered_map() {
        let table = table(&["RED", "BLUE", "BLUE"]);
        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(json, r#"{"RED":1,"BLUE":2}"#);
    }

    #[test]
    fn test_order_does_not_change_content() {
        let forward = table(&["A", "B", "A", "C"]);
        let backward = table(&["C", "A", "B", "A"]);
        for (category, count) in forward.iter() {
            assert_eq!(backward.get(category), count);
        }
        assert_eq!(forward.len(), backward.len());
    }

    proptest! {
        #[test]
        fn prop_sum_matches_sequence_length(labels in prop::collection::vec("[a-e]", 0..64)) {
            let sequence = labels.iter().map(|l| Category::normalize(l)).collect::<Vec<_>>();
            let table = FrequencyTable::from_sequence(&sequence);
            prop_assert_eq!(table.total(), sequence.len() as u64);
            prop_assert!(table.counts().all(|count| count >= 1));
        }
    }
}
