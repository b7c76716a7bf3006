//! Sponsors and co-exhibitor cards
//!
//! Sponsors are exhibitors with a sponsorship flag. An exhibitor record may
//! carry several company form entries (the main company plus co-exhibitors);
//! the catalog shows one card per entry.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::catalog::json::{flag_set, CO_EXHIBITOR_KEY, FORM3_CARD_KEY, FORM3_FIELD};

// == Sponsor Tier ==
/// Sponsorship level, highest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SponsorTier {
    Platinum,
    Gold,
    Silver,
    Official,
    Sponsor,
}

impl SponsorTier {
    /// Resolves the tier from the sponsorship flags.
    ///
    /// Flags live on `events_user`, `event_user` or the record itself. A
    /// record with no flag set resolves to `Sponsor`.
    pub fn of(record: &Value) -> Self {
        let flags = sponsorship_flags(record);

        if flag_set(flags, "platinum_sponsorship") || flag_set(flags, "is_platinum_sponsorship") {
            SponsorTier::Platinum
        } else if flag_set(flags, "gold_sponsorship") {
            SponsorTier::Gold
        } else if flag_set(flags, "silver_sponsorship") {
            SponsorTier::Silver
        } else if flag_set(flags, "is_official_sponsorship") {
            SponsorTier::Official
        } else {
            SponsorTier::Sponsor
        }
    }

    /// Facet value, e.g. `"gold"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            SponsorTier::Platinum => "platinum",
            SponsorTier::Gold => "gold",
            SponsorTier::Silver => "silver",
            SponsorTier::Official => "official",
            SponsorTier::Sponsor => "sponsor",
        }
    }

    /// Display label, e.g. `"Gold Sponsor"`.
    pub fn label(&self) -> &'static str {
        match self {
            SponsorTier::Platinum => "Platinum Sponsor",
            SponsorTier::Gold => "Gold Sponsor",
            SponsorTier::Silver => "Silver Sponsor",
            SponsorTier::Official => "Official Sponsor",
            SponsorTier::Sponsor => "Sponsor",
        }
    }
}

fn sponsorship_flags(record: &Value) -> &Value {
    record
        .get("events_user")
        .or_else(|| record.get("event_user"))
        .filter(|v| v.is_object())
        .unwrap_or(record)
}

/// True if any sponsorship flag is set on the record.
pub fn is_sponsor(record: &Value) -> bool {
    let flags = sponsorship_flags(record);
    [
        "platinum_sponsorship",
        "gold_sponsorship",
        "silver_sponsorship",
        "is_platinum_sponsorship",
        "is_official_sponsorship",
    ]
    .iter()
    .any(|name| flag_set(flags, name))
}

// == Expand Form Entries ==
/// One card per company form entry, in record then entry order.
///
/// Each card is a copy of the record with its entry stored under
/// `FORM3_CARD_KEY` and a co-exhibitor flag. Records without an entry list
/// pass through unchanged; a record whose list is empty yields no card.
pub fn expand_form3_entries(records: &[Value]) -> Vec<Value> {
    let mut cards = Vec::with_capacity(records.len());

    for record in records {
        let entries = match record.get(FORM3_FIELD) {
            Some(Value::Array(entries)) if record.is_object() => entries,
            _ => {
                cards.push(record.clone());
                continue;
            }
        };

        for entry in entries {
            let mut card = record.clone();
            if let Value::Object(fields) = &mut card {
                fields.insert(FORM3_CARD_KEY.to_string(), entry.clone());
                fields.insert(
                    CO_EXHIBITOR_KEY.to_string(),
                    Value::Bool(flag_set(entry, "is_coexhibitor")),
                );
            }
            cards.push(card);
        }
    }

    cards
}
