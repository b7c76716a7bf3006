//! Catalog Module
//!
//! Adapters from the event API's JSON records to the generic filter:
//! field lookups across alternate spellings, co-exhibitor card expansion,
//! sponsor tiers, per-page accessor presets, favorites and schedule ordering.

mod favorites;
pub mod json;
mod presets;
mod schedule;
mod sponsors;

// Re-export public types
pub use favorites::{
    favorites_only, filter_schedule, record_id, FavoriteSet, FAVORITES, SESSIONS,
};
pub use presets::{
    company_description, company_name, company_sector, exhibitor_accessors, partner_accessors,
    session_accessors, speaker_accessors, sponsor_accessors,
};
pub use schedule::{session_time, sort_sessions_by_time};
pub use sponsors::{expand_form3_entries, is_sponsor, SponsorTier};
