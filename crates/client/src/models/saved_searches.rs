//! Saved search models.

use serde::{Deserialize, Serialize};

/// A saved search: its name and SPL definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SavedSearch {
    pub name: String,
    pub search: String,
}

/// Content block of a saved search entry. Only the definition is kept.
#[derive(Debug, Deserialize, Clone)]
pub struct SavedSearchContent {
    #[serde(default)]
    pub search: String,
}
