//! Facet Selection Module
//!
//! The user's current filter state: free-text search plus one selected value
//! per equality facet.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Selection value meaning "no constraint" for a facet.
pub const ALL: &str = "all";

// == Facet Selection ==
/// Active search text and equality facet values.
///
/// A facet that is missing from `equality_facets` behaves exactly like one
/// set to `"all"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetSelection {
    /// Case-insensitive substring query
    #[serde(default)]
    pub search_text: String,
    /// Facet name → selected value or `"all"`
    #[serde(default)]
    pub equality_facets: BTreeMap<String, String>,
}

impl FacetSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    pub fn with_facet(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.equality_facets.insert(name.into(), value.into());
        self
    }

    pub fn set_facet(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.equality_facets.insert(name.into(), value.into());
    }

    // == Selected ==
    /// The value that constrains `facet`, or None when it is unconstrained.
    pub fn selected(&self, facet: &str) -> Option<&str> {
        self.equality_facets
            .get(facet)
            .map(String::as_str)
            .filter(|value| *value != ALL)
    }

    /// The search query as typed, or None when it is blank.
    pub fn search_query(&self) -> Option<&str> {
        let trimmed = self.search_text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(self.search_text.as_str())
        }
    }

    // == Reset ==
    /// Clears the search text and puts every known facet back to `"all"`.
    pub fn reset(&mut self) {
        self.search_text.clear();
        for value in self.equality_facets.values_mut() {
            *value = ALL.to_string();
        }
    }

    pub fn is_unconstrained(&self) -> bool {
        self.search_query().is_none() && self.equality_facets.values().all(|v| v == ALL)
    }
}
