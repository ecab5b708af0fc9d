use std::collections::{BTreeMap, HashMap};

use strum::IntoEnumIterator;

use super::value_objects::Category;

/// Item counts per whitelisted category plus a grand total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySummary {
    pub categories: BTreeMap<Category, i64>,
    pub total: i64,
}

impl CategorySummary {
    /// Builds the summary from the raw per-category counts of the store.
    ///
    /// `total` sums every raw count, including labels outside the whitelist,
    /// while `categories` only carries the five known labels (zero when the
    /// store has no rows for them).
    pub fn from_raw_counts(raw: &HashMap<String, i64>) -> Self {
        let total = raw.values().sum();
        let categories = Category::iter()
            .map(|category| {
                let count = raw.get(category.label()).copied().unwrap_or(0);
                (category, count)
            })
            .collect();

        Self { categories, total }
    }

    pub fn count(&self, category: Category) -> i64 {
        self.categories.get(&category).copied().unwrap_or(0)
    }
}
