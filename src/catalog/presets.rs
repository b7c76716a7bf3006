//! Accessor presets for the catalog pages
//!
//! Exhibitors, sponsors and partners are all company records from the same
//! API and share name/description/sector lookups. Sessions and speakers come
//! in flat shapes.

use serde_json::Value;

use crate::catalog::json::{entry_industries, form3_entry, text_field, text_or_empty};
use crate::catalog::sponsors::SponsorTier;
use crate::filter::{Facet, FacetAccessors, GENERAL_LABEL};

const NAME_FIELDS: &[&str] = &["en_name", "company_name", "name"];
const SECTOR_FIELDS: &[&str] = &["sector", "industry", "category"];

// == Company Lookups ==
/// Display name: the form entry's company name, else the record's own.
pub fn company_name(record: &Value) -> String {
    form3_entry(record)
        .and_then(|entry| text_field(entry, &["company"]))
        .or_else(|| text_field(record, NAME_FIELDS))
        .unwrap_or_default()
}

pub fn company_description(record: &Value) -> String {
    form3_entry(record)
        .and_then(|entry| text_field(entry, &["company_profile", "company_description"]))
        .or_else(|| text_field(record, &["description"]))
        .unwrap_or_default()
}

/// Primary sector: first listed industry, else the flat sector-like fields.
///
/// Numeric codes are passed through here; the sector facet's guard turns
/// them into `"General"`.
pub fn company_sector(record: &Value) -> Option<String> {
    entry_industries(record)
        .into_iter()
        .next()
        .or_else(|| text_field(record, SECTOR_FIELDS))
}

fn country_facet() -> Facet<Value> {
    Facet::new("country", |r: &Value| text_field(r, &["country"])).case_insensitive()
}

fn sector_facet() -> Facet<Value> {
    Facet::new("sector", company_sector)
        .widened_by(entry_industries)
        .with_fallback(GENERAL_LABEL)
}

// == Presets ==
/// Exhibitor list: search by name, description or booth; filter by
/// category, country and sector.
pub fn exhibitor_accessors() -> FacetAccessors<Value> {
    FacetAccessors::new(|r: &Value| {
        vec![
            company_name(r),
            company_description(r),
            text_or_empty(r, &["booth"]),
        ]
    })
    .with_facet(Facet::new("category", |r: &Value| text_field(r, &["category"])))
    .with_facet(country_facet())
    .with_facet(sector_facet())
}

/// Sponsor cards: search by name, description or country; filter by tier,
/// country and sector.
pub fn sponsor_accessors() -> FacetAccessors<Value> {
    FacetAccessors::new(|r: &Value| {
        vec![
            company_name(r),
            company_description(r),
            text_or_empty(r, &["country"]),
        ]
    })
    .with_facet(Facet::new("tier", |r: &Value| {
        Some(SponsorTier::of(r).as_str().to_string())
    }))
    .with_facet(country_facet())
    .with_facet(sector_facet())
}

/// Partner list: search by name, description or country; filter by sector
/// and country.
pub fn partner_accessors() -> FacetAccessors<Value> {
    FacetAccessors::new(|r: &Value| {
        vec![
            company_name(r),
            company_description(r),
            text_or_empty(r, &["country"]),
        ]
    })
    .with_facet(sector_facet())
    .with_facet(country_facet())
}

/// Schedule sessions: search by title, description or location; filter by
/// category and day.
pub fn session_accessors() -> FacetAccessors<Value> {
    FacetAccessors::new(|r: &Value| {
        vec![
            text_or_empty(r, &["title"]),
            text_or_empty(r, &["description"]),
            text_or_empty(r, &["location"]),
        ]
    })
    .with_facet(Facet::new("category", |r: &Value| text_field(r, &["category"])))
    .with_facet(Facet::new("day", |r: &Value| text_field(r, &["date"])))
}

/// Speakers: search by name, company or any expertise tag.
pub fn speaker_accessors() -> FacetAccessors<Value> {
    FacetAccessors::new(|r: &Value| {
        let mut fields = vec![text_or_empty(r, &["name"]), text_or_empty(r, &["company"])];
        if let Some(Value::Array(tags)) = r.get("expertise") {
            fields.extend(tags.iter().filter_map(|t| t.as_str().map(str::to_string)));
        }
        fields
    })
}
