//! Favorites
//!
//! In-memory set of favorited catalog items, keyed by item kind
//! (`"sessions"`, `"exhibitors"`, `"speakers"`) and item id. Persisting the
//! set is left to the caller; it serializes as `{ kind: [id, ...] }`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::catalog::json::text_field;
use crate::catalog::presets::session_accessors;
use crate::filter::{filter_records, FacetSelection};

/// Schedule filter mode that shows only favorited sessions.
pub const FAVORITES: &str = "favorites";

pub const SESSIONS: &str = "sessions";

// == Favorite Set ==
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FavoriteSet {
    /// Ids per kind, in the order they were favorited
    items: BTreeMap<String, Vec<String>>,
}

impl FavoriteSet {
    pub fn new() -> Self {
        Self::default()
    }

    // == Toggle ==
    /// Adds `id` under `kind`, or removes it if already present.
    ///
    /// Returns whether the item is a favorite afterwards.
    pub fn toggle(&mut self, kind: &str, id: &str) -> bool {
        let ids = self.items.entry(kind.to_string()).or_default();
        match ids.iter().position(|existing| existing == id) {
            Some(index) => {
                ids.remove(index);
                false
            }
            None => {
                ids.push(id.to_string());
                true
            }
        }
    }

    pub fn is_favorite(&self, kind: &str, id: &str) -> bool {
        self.items
            .get(kind)
            .is_some_and(|ids| ids.iter().any(|existing| existing == id))
    }

    /// Favorited ids of one kind, oldest first.
    pub fn ids(&self, kind: &str) -> &[String] {
        self.items.get(kind).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.items.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The record's `id`, numeric ids rendered as text.
pub fn record_id(record: &Value) -> Option<String> {
    text_field(record, &["id"])
}

// == Favorites Filter ==
/// Records of `kind` whose id is a favorite, in input order.
///
/// Records with no id are never favorites.
pub fn favorites_only<'a, R, F>(records: &'a [R], favorites: &FavoriteSet, kind: &str, id: F) -> Vec<&'a R>
where
    F: Fn(&R) -> Option<String>,
{
    records
        .iter()
        .filter(|record| id(record).is_some_and(|found| favorites.is_favorite(kind, &found)))
        .collect()
}

/// Schedule list for a filter `mode`: `FAVORITES`, `"all"` or a category.
pub fn filter_schedule<'a>(sessions: &'a [Value], mode: &str, favorites: &FavoriteSet) -> Vec<&'a Value> {
    if mode == FAVORITES {
        return favorites_only(sessions, favorites, SESSIONS, record_id);
    }

    let selection = FacetSelection::new().with_facet("category", mode);
    filter_records(sessions, &selection, &session_accessors())
}
