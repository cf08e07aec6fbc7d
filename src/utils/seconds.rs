//! Serde helpers for whole-second durations.
//!
//! The summarization backend derives a video's length from the end of its last
//! transcript segment, so `duration_seconds` may arrive as a fractional JSON
//! number.  These helpers accept either form and floor to whole seconds.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Seconds {
    Whole(u64),
    Fractional(f64),
}

/// Deserialize a non-negative JSON number into whole seconds, rounding down.
pub fn deserialize<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    match Seconds::deserialize(deserializer)? {
        Seconds::Whole(secs) => Ok(secs),
        Seconds::Fractional(secs) if secs.is_finite() && secs >= 0.0 => Ok(secs.floor() as u64),
        Seconds::Fractional(secs) => Err(D::Error::custom(format!(
            "duration must be a non-negative number of seconds, got {secs}"
        ))),
    }
}

/// Serialize whole seconds as a JSON integer.
pub fn serialize<S>(secs: &u64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_u64(*secs)
}
