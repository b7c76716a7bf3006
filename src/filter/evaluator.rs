//! Filter Evaluator Module
//!
//! Pure functions over already-fetched record lists. Nothing here mutates
//! its inputs, so every function is safe to re-run on each keystroke.

use std::collections::HashSet;

use crate::filter::accessors::{Facet, FacetAccessors};
use crate::filter::label::clean_label;
use crate::filter::selection::{FacetSelection, ALL};

/// Collects distinct values in first-seen order, prefixed with `"all"`.
fn distinct_with_all<I>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = HashSet::new();
    let mut options = vec![ALL.to_string()];

    for value in values {
        if seen.insert(value.clone()) {
            options.push(value);
        }
    }

    options
}

// == Extract Facet Values ==
/// Builds a filter control's option list from the records actually loaded.
///
/// Returns `"all"` followed by each distinct non-empty value of `accessor`
/// in first-seen order. Numeric-only values are unlabeled codes and are
/// left out.
pub fn extract_facet_values<R, F>(records: &[R], accessor: F) -> Vec<String>
where
    F: Fn(&R) -> Option<String>,
{
    distinct_with_all(
        records
            .iter()
            .filter_map(accessor)
            .filter(|value| clean_label(value).is_some()),
    )
}

/// Like `extract_facet_values` for accessors yielding several values per
/// record, e.g. every industry of a company.
pub fn extract_facet_values_flat<R, F>(records: &[R], accessor: F) -> Vec<String>
where
    F: Fn(&R) -> Vec<String>,
{
    distinct_with_all(
        records
            .iter()
            .flat_map(accessor)
            .filter(|value| clean_label(value).is_some()),
    )
}

/// Option list for a declared facet, honouring its fallback and widening.
pub fn facet_options<R>(records: &[R], facet: &Facet<R>) -> Vec<String> {
    distinct_with_all(records.iter().flat_map(|record| facet.option_labels(record)))
}

// == Matches ==
/// Evaluates `selection` against one record.
///
/// The search text must occur (case-insensitively) in at least one search
/// field, and every declared facet the selection constrains must accept the
/// record. Selection entries naming undeclared facets are ignored.
pub fn matches<R>(record: &R, selection: &FacetSelection, accessors: &FacetAccessors<R>) -> bool {
    if let Some(query) = selection.search_query() {
        let query = query.to_lowercase();
        let found = accessors
            .search_fields(record)
            .iter()
            .any(|field| field.to_lowercase().contains(&query));
        if !found {
            return false;
        }
    }

    accessors.facets().iter().all(|facet| {
        selection
            .selected(facet.name())
            .map_or(true, |selected| facet.accepts(record, selected))
    })
}

// == Filter Records ==
/// Returns the records matching `selection`, in input order.
///
/// The result borrows from `records`; no record is cloned or reordered.
pub fn filter_records<'a, R>(
    records: &'a [R],
    selection: &FacetSelection,
    accessors: &FacetAccessors<R>,
) -> Vec<&'a R> {
    records
        .iter()
        .filter(|record| matches(*record, selection, accessors))
        .collect()
}

// == Group Records ==
/// Groups records by `key`, groups ordered by first appearance.
///
/// Records whose key is missing or blank are dropped. Used to lay out a
/// schedule day by day.
pub fn group_records<'a, R, F>(records: &'a [R], key: F) -> Vec<(String, Vec<&'a R>)>
where
    F: Fn(&R) -> Option<String>,
{
    let mut groups: Vec<(String, Vec<&'a R>)> = Vec::new();

    for record in records {
        let Some(group_key) = key(record).filter(|k| !k.trim().is_empty()) else {
            continue;
        };

        match groups.iter_mut().find(|(existing, _)| *existing == group_key) {
            Some((_, members)) => members.push(record),
            None => groups.push((group_key, vec![record])),
        }
    }

    groups
}
