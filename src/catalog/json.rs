//! JSON field helpers
//!
//! The event API spells the same concept several ways (`en_name`,
//! `company_name`, `name`), nests company data in form entries and mixes
//! strings, numbers and objects. These helpers read such records without
//! ever failing.

use serde_json::Value;

/// Upstream key holding the company form entries of an exhibitor.
pub const FORM3_FIELD: &str = "form3_data_entry";

/// Key under which an expanded card stores its own form entry.
pub const FORM3_CARD_KEY: &str = "_form3_entry";

/// Key flagging an expanded card as a co-exhibitor.
pub const CO_EXHIBITOR_KEY: &str = "_is_coexhibitor";

/// Renders a scalar as text; blank strings and the literal `"null"` count as missing.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() && s != "null" => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

// == Text Field ==
/// First usable value among alternate spellings of a field.
pub fn text_field(record: &Value, names: &[&str]) -> Option<String> {
    names
        .iter()
        .find_map(|name| record.get(*name).and_then(scalar_text))
}

/// Like `text_field` but never empty: missing becomes `""`.
pub fn text_or_empty(record: &Value, names: &[&str]) -> String {
    text_field(record, names).unwrap_or_default()
}

/// True if the field holds `1` or `true`.
pub fn flag_set(record: &Value, name: &str) -> bool {
    match record.get(name) {
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_i64() == Some(1),
        _ => false,
    }
}

// == Form Entry ==
/// The company form entry describing this record.
///
/// An expanded card carries its own entry; otherwise the upstream field is
/// used, taking the first element when it is a list.
pub fn form3_entry(record: &Value) -> Option<&Value> {
    if let Some(entry) = record.get(FORM3_CARD_KEY).filter(|v| v.is_object()) {
        return Some(entry);
    }

    match record.get(FORM3_FIELD)? {
        Value::Object(_) => record.get(FORM3_FIELD),
        Value::Array(entries) => entries.first().filter(|v| v.is_object()),
        _ => None,
    }
}

// == Industry Names ==
/// Names from an industries value: a single item or a list of strings,
/// numbers or `{name | en_name}` objects.
pub fn industry_names(value: &Value) -> Vec<String> {
    fn one(item: &Value) -> Option<String> {
        match item {
            Value::Object(_) => text_field(item, &["name", "en_name"]),
            other => scalar_text(other),
        }
    }

    match value {
        Value::Array(items) => items.iter().filter_map(one).collect(),
        Value::Null => Vec::new(),
        other => one(other).into_iter().collect(),
    }
}

/// Industries listed on a record's form entry.
pub fn entry_industries(record: &Value) -> Vec<String> {
    form3_entry(record)
        .and_then(|entry| entry.get("company_industries").or_else(|| entry.get("industries")))
        .map(industry_names)
        .unwrap_or_default()
}
