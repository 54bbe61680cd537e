//! Parsing of labelled observation logs.
//!
//! An observation log is plain text where each line has the form
//! `LABEL: token, token, ...`. The label usually names a day; tokens are raw
//! category labels that go through [`Category::normalize`].

use crate::category::Category;

/// Observations recorded under one label (typically a day of the week).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayObservations {
    /// Trimmed, upper-cased label.
    pub label: String,
    /// Normalized categories in recorded order.
    pub categories: Vec<Category>,
}

/// An ordered collection of labelled observations.
///
/// # Examples
///
/// ```
/// use colorstat_stats::observation::ObservationLog;
///
/// let log = ObservationLog::parse("monday: Red, blew\nTUESDAY: green,,\n");
/// assert_eq!(log.days().len(), 2);
/// assert_eq!(log.days()[0].label, "MONDAY");
/// let sequence = log.sequence().map(|c| c.as_str()).collect::<Vec<_>>();
/// assert_eq!(sequence, ["RED", "BLUE", "GREEN"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservationLog {
    days: Vec<DayObservations>,
}

impl ObservationLog {
    /// Parses a raw log.
    ///
    /// Lines without a `:` are ignored, as are blank tokens. Everything else is
    /// accepted; the parser never fails.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let days = raw
            .lines()
            .filter_map(|line| {
                let (label, tokens) = line.split_once(':')?;
                let categories = tokens
                    .split(',')
                    .filter(|token| !token.trim().is_empty())
                    .map(Category::normalize)
                    .collect();
                Some(DayObservations {
                    label: label.trim().to_uppercase(),
                    categories,
                })
            })
            .collect::<Vec<_>>();
        tracing::debug!(days = days.len(), "parsed observation log");
        Self { days }
    }

    #[must_use]
    pub fn days(&self) -> &[DayObservations] {
        &self.days
    }

    /// Returns the flattened observation sequence in input order.
    pub fn sequence(&self) -> impl Iterator<Item = &Category> + '_ {
        self.days.iter().flat_map(|day| day.categories.iter())
    }

    /// Total number of observations across all labels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.days.iter().map(|day| day.categories.len()).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
