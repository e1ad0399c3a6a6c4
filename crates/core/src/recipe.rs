//! Recipes. The backend exposes no recipe endpoints, so the recipe book is a
//! local, static collection.

use serde::{Deserialize, Serialize};

use crate::entity::Entity;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub category: String,
    /// Minutes.
    pub prep_time: u32,
    /// Number of ingredients.
    pub ingredients: u32,
    /// Relative label, e.g. "Today", "3 days ago".
    pub last_used: String,
    pub popular: bool,
}

impl Recipe {
    /// Labels counted as "recently used".
    pub const RECENT_LABELS: [&'static str; 3] = ["Today", "Yesterday", "2 days ago"];

    pub fn is_recent(&self) -> bool {
        Self::RECENT_LABELS.contains(&self.last_used.as_str())
    }

    /// `needle` must already be lower-cased.
    pub fn matches(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.name.to_lowercase().contains(needle)
            || self.category.to_lowercase().contains(needle)
    }
}

impl Entity for Recipe {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
