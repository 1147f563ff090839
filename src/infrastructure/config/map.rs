//! Map view configuration.

use serde::{Deserialize, Serialize};

use crate::domain::map::{CategoryRule, DEFAULT_MAX_SELECTED, DEFAULT_TOP_N};

/// Map filter and favorites configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapConfig {
    /// Size of the pre-ranked "top" base set.
    #[serde(default = "default_top_n")]
    pub top_n: usize,

    /// Maximum number of pinned favorites.
    #[serde(default = "default_max_selected")]
    pub max_selected: usize,

    /// Classifier behind the category chips.
    #[serde(default)]
    pub category_rule: CategoryRule,
}

const fn default_top_n() -> usize {
    DEFAULT_TOP_N
}

const fn default_max_selected() -> usize {
    DEFAULT_MAX_SELECTED
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            top_n: default_top_n(),
            max_selected: default_max_selected(),
            category_rule: CategoryRule::default(),
        }
    }
}
