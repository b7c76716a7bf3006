//! Filter Module
//!
//! Faceted search over heterogeneous catalog records: free-text search plus
//! equality facets whose option lists come from the data itself.

mod accessors;
mod evaluator;
mod label;
mod selection;


// Re-export public types
pub use accessors::{Facet, FacetAccessors};
pub use evaluator::{
    extract_facet_values, extract_facet_values_flat, facet_options, filter_records, group_records,
    matches,
};
pub use label::{clean_label, is_numeric_code, label_or_general, GENERAL_LABEL};
pub use selection::{FacetSelection, ALL};
