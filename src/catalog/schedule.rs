//! Schedule ordering
//!
//! Sessions carry a wall-clock `time` such as `"2:00 PM"`. Filtering keeps
//! API order; the schedule view sorts each day by time afterwards.

use chrono::NaiveTime;
use serde_json::Value;

use crate::catalog::json::text_field;

const TIME_FORMATS: &[&str] = &["%I:%M %p", "%I:%M%p", "%H:%M", "%H:%M:%S"];

/// Parses a session's `time` field.
pub fn session_time(session: &Value) -> Option<NaiveTime> {
    let raw = text_field(session, &["time", "start_time"])?;
    let raw = raw.trim().to_uppercase();

    TIME_FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(&raw, format).ok())
}

/// Stable sort by time of day; sessions without a readable time go last.
pub fn sort_sessions_by_time(sessions: &mut [&Value]) {
    sessions.sort_by_key(|session| {
        let time = session_time(session);
        (time.is_none(), time)
    });
}
