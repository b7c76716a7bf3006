//! Record Accessors Module
//!
//! Records arrive in inconsistent shapes (flat company fields, nested form
//! entries, alternate field spellings), so the filter never reads fields
//! itself. Each catalog supplies closures that pull out the strings to search
//! and the values to compare per facet.
//!
//! Accessors must be total: return `None` or an empty `Vec` for missing data
//! rather than panicking.

use std::fmt;

use crate::filter::label::clean_label;

type ValueFn<R> = Box<dyn Fn(&R) -> Option<String> + Send + Sync>;
type ValuesFn<R> = Box<dyn Fn(&R) -> Vec<String> + Send + Sync>;

// == Facet ==
/// One equality facet (country, sector, category, day, ...).
///
/// A record passes a constrained facet when its primary label equals the
/// selected value, or when any of its widened values does (e.g. a company
/// whose primary sector is "General" but whose nested industries list
/// contains "Energy").
pub struct Facet<R> {
    name: String,
    primary: ValueFn<R>,
    widened: Option<ValuesFn<R>>,
    fallback: Option<String>,
    case_insensitive: bool,
    numeric_guard: bool,
}

impl<R> Facet<R> {
    // == Constructor ==
    /// Creates a facet compared by exact equality on `primary`.
    ///
    /// Numeric-only values are treated as missing unless `keep_numeric` is set.
    pub fn new<F>(name: impl Into<String>, primary: F) -> Self
    where
        F: Fn(&R) -> Option<String> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            primary: Box::new(primary),
            widened: None,
            fallback: None,
            case_insensitive: false,
            numeric_guard: true,
        }
    }

    /// Adds a multi-valued accessor whose values also satisfy the facet.
    pub fn widened_by<F>(mut self, values: F) -> Self
    where
        F: Fn(&R) -> Vec<String> + Send + Sync + 'static,
    {
        self.widened = Some(Box::new(values));
        self
    }

    /// Label used when the primary value is missing or a numeric code.
    pub fn with_fallback(mut self, label: impl Into<String>) -> Self {
        self.fallback = Some(label.into());
        self
    }

    pub fn case_insensitive(mut self) -> Self {
        self.case_insensitive = true;
        self
    }

    /// Lets numeric-only values through as real labels.
    pub fn keep_numeric(mut self) -> Self {
        self.numeric_guard = false;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn clean(&self, value: String) -> Option<String> {
        let usable = if self.numeric_guard {
            clean_label(&value).is_some()
        } else {
            !value.trim().is_empty()
        };
        usable.then_some(value)
    }

    // == Label ==
    /// The record's primary label for this facet, after the numeric guard
    /// and fallback.
    pub fn label(&self, record: &R) -> Option<String> {
        (self.primary)(record)
            .and_then(|value| self.clean(value))
            .or_else(|| self.fallback.clone())
    }

    /// The record's widened values, cleaned the same way as labels.
    pub fn widened_labels(&self, record: &R) -> Vec<String> {
        match &self.widened {
            Some(values) => values(record)
                .into_iter()
                .filter_map(|value| self.clean(value))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Labels this record contributes to the facet's option list.
    ///
    /// The widened list when it has entries (it is the complete list), the
    /// primary label otherwise.
    pub fn option_labels(&self, record: &R) -> Vec<String> {
        let widened = self.widened_labels(record);
        if widened.is_empty() {
            self.label(record).into_iter().collect()
        } else {
            widened
        }
    }

    fn same(&self, candidate: &str, selected: &str) -> bool {
        if self.case_insensitive {
            candidate.to_lowercase() == selected.to_lowercase()
        } else {
            candidate == selected
        }
    }

    // == Accepts ==
    /// True if the record satisfies `selected` for this facet.
    pub fn accepts(&self, record: &R, selected: &str) -> bool {
        if self
            .label(record)
            .is_some_and(|label| self.same(&label, selected))
        {
            return true;
        }

        self.widened_labels(record)
            .iter()
            .any(|value| self.same(value, selected))
    }
}

impl<R> fmt::Debug for Facet<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Facet")
            .field("name", &self.name)
            .field("widened", &self.widened.is_some())
            .field("fallback", &self.fallback)
            .field("case_insensitive", &self.case_insensitive)
            .field("numeric_guard", &self.numeric_guard)
            .finish()
    }
}

// == Facet Accessors ==
/// Searchable fields plus the declared equality facets for one record type.
pub struct FacetAccessors<R> {
    search: ValuesFn<R>,
    facets: Vec<Facet<R>>,
}

impl<R> FacetAccessors<R> {
    /// Creates accessors whose free-text search looks at `search(record)`.
    pub fn new<F>(search: F) -> Self
    where
        F: Fn(&R) -> Vec<String> + Send + Sync + 'static,
    {
        Self {
            search: Box::new(search),
            facets: Vec::new(),
        }
    }

    pub fn with_facet(mut self, facet: Facet<R>) -> Self {
        self.facets.push(facet);
        self
    }

    pub fn facet(&self, name: &str) -> Option<&Facet<R>> {
        self.facets.iter().find(|facet| facet.name() == name)
    }

    pub fn facets(&self) -> &[Facet<R>] {
        &self.facets
    }

    pub fn search_fields(&self, record: &R) -> Vec<String> {
        (self.search)(record)
    }
}

impl<R> fmt::Debug for FacetAccessors<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FacetAccessors")
            .field("facets", &self.facets)
            .finish_non_exhaustive()
    }
}
