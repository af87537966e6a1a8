use chrono::Utc;
use serde::{Deserialize, Deserializer};

pub type EntryId = u64;

pub const FIRST_ENTRY_ID: EntryId = 1;

/// Server-side timestamp for entries submitted without one: naive UTC with
/// microsecond precision, e.g. `2025-03-01T09:30:00.000000`.
pub fn now_iso8601() -> String {
    Utc::now()
        .naive_utc()
        .format("%Y-%m-%dT%H:%M:%S%.6f")
        .to_string()
}

/// Treats an empty string the same as a missing value.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Pair with `#[serde(default)]` on an `Option<Option<T>>` field to tell an
/// absent key (`None`) apart from an explicit `null` (`Some(None)`).
pub fn deserialize_present<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}
