use serde::{Deserialize, Serialize};

/// Known misspellings and the category they stand for.
///
/// Lookups happen after trimming and upper-casing, so keys must be upper-case.
pub const TYPO_CORRECTIONS: &[(&str, &str)] = &[("BLEW", "BLUE")];

/// A canonical category label.
///
/// The only way to obtain a `Category` is through [`Category::normalize`]
/// (directly or via `From<&str>`/`From<String>`), so two categories compare
/// equal exactly when their canonical forms are equal.
///
/// Labels outside any known vocabulary are valid categories; nothing is
/// rejected.
///
/// # Examples
///
/// ```
/// use colorstat_stats::category::Category;
///
/// assert_eq!(Category::normalize("  blew "), Category::normalize("BLUE"));
/// assert_eq!(Category::normalize("arsh").as_str(), "ARSH");
/// ```
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, derive_more::Display,
)]
#[serde(from = "String", into = "String")]
pub struct Category(String);

impl Category {
    /// Trims, upper-cases and applies [`TYPO_CORRECTIONS`].
    #[must_use]
    pub fn normalize(token: &str) -> Self {
        let upper = token.trim().to_uppercase();
        let canonical = TYPO_CORRECTIONS
            .iter()
            .find_map(|(typo, fixed)| (*typo == upper).then(|| (*fixed).to_owned()))
            .unwrap_or(upper);
        Self(canonical)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Category {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Category {
    fn from(token: &str) -> Self {
        Self::normalize(token)
    }
}

impl From<String> for Category {
    fn from(token: String) -> Self {
        Self::normalize(&token)
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_and_uppercases() {
        assert_eq!(Category::normalize("  green\t").as_str(), "GREEN");
    }

    #[test]
    fn test_fixes_known_typo() {
        assert_eq!(Category::normalize("blew").as_str(), "BLUE");
        assert_eq!(Category::normalize(" Blew ").as_str(), "BLUE");
    }

    #[test]
    fn test_unknown_label_passes_through() {
        assert_eq!(Category::normalize("Arsh").as_str(), "ARSH");
    }

    #[test]
    fn test_empty_token_is_a_category() {
        assert_eq!(Category::normalize("   ").as_str(), "");
    }

    #[test]
    fn test_deserialize_normalizes() {
        let category: Category = serde_json::from_str("\" blew\"").unwrap();
        assert_eq!(category.as_str(), "BLUE");
        assert_eq!(serde_json::to_string(&category).unwrap(), "\"BLUE\"");
    }
}
