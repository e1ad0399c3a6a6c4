//! Supplier category sets and their comma-joined wire form.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Categories offered when registering a supplier.
pub const SUPPLIER_CATEGORIES: [&str; 7] =
    ["Produce", "Meat", "Dairy", "Seafood", "Bakery", "Pantry", "Spices"];

/// A set of category names.
///
/// On the wire the set is flattened into one comma-joined string
/// (`"Dairy,Produce"`). Splitting trims whitespace and drops empty segments,
/// so `""` is the empty set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Categories(BTreeSet<String>);

impl Categories {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the wire form.
    pub fn split(raw: &str) -> Self {
        Self(
            raw.split(',')
                .map(str::trim)
                .filter(|segment| !segment.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }

    /// Produce the wire form.
    pub fn join(&self) -> String {
        self.0.iter().map(String::as_str).collect::<Vec<_>>().join(",")
    }

    /// Add a category. Blank names and names containing the delimiter are
    /// rejected since they could not survive a round trip.
    pub fn insert(&mut self, category: &str) -> bool {
        let category = category.trim();
        if category.is_empty() || category.contains(',') {
            return false;
        }
        self.0.insert(category.to_string())
    }

    /// Select the category if absent, deselect it if present.
    pub fn toggle(&mut self, category: &str) {
        let category = category.trim();
        if !self.0.remove(category) {
            self.insert(category);
        }
    }

    pub fn contains(&self, category: &str) -> bool {
        self.0.contains(category.trim())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl From<String> for Categories {
    fn from(raw: String) -> Self {
        Self::split(&raw)
    }
}

impl From<Categories> for String {
    fn from(value: Categories) -> Self {
        value.join()
    }
}

impl<'a> FromIterator<&'a str> for Categories {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut set = Self::new();
        for category in iter {
            set.insert(category);
        }
        set
    }
}

impl core::fmt::Display for Categories {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0.iter().map(String::as_str).collect::<Vec<_>>().join(", "))
    }
}
